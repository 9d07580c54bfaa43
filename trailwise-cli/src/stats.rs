//! Stats command implementation for the Trailwise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use trailwise_core::DateWindow;
use trailwise_data::load_weather_archive;
use trailwise_scorer::WeatherStatistics;

use crate::{
    ARG_LOCATION, ARG_WEATHER, CliError, ENV_STATS_LOCATION, ENV_STATS_WEATHER,
    build_recommender, window_from, write_json,
};

/// CLI arguments for the `stats` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "stats",
    about = "Summarise the weather history of one location"
)]
#[ortho_config(prefix = "TRAILWISE")]
pub(crate) struct StatsArgs {
    /// Weather file (`.csv` or `.json`).
    #[arg(long = ARG_WEATHER, value_name = "path")]
    #[serde(default)]
    pub(crate) weather: Option<Utf8PathBuf>,
    /// Location key to summarise.
    #[arg(long = ARG_LOCATION, value_name = "location")]
    #[serde(default)]
    pub(crate) location: Option<String>,
    /// JSON engine configuration overriding the comfort coefficients.
    #[arg(long, value_name = "path")]
    #[serde(default)]
    pub(crate) engine_config: Option<Utf8PathBuf>,
    /// First day to include (YYYY-MM-DD).
    #[arg(long, value_name = "date")]
    #[serde(default)]
    pub(crate) from: Option<NaiveDate>,
    /// Last day to include (YYYY-MM-DD).
    #[arg(long, value_name = "date")]
    #[serde(default)]
    pub(crate) to: Option<NaiveDate>,
}

impl StatsArgs {
    pub(crate) fn into_config(self) -> Result<StatsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        StatsConfig::try_from(merged)
    }
}

/// Resolved `stats` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatsConfig {
    pub(crate) weather: Utf8PathBuf,
    pub(crate) location: String,
    pub(crate) engine_config: Option<Utf8PathBuf>,
    pub(crate) window: Option<DateWindow>,
}

impl TryFrom<StatsArgs> for StatsConfig {
    type Error = CliError;

    fn try_from(args: StatsArgs) -> Result<Self, Self::Error> {
        let weather = args.weather.ok_or(CliError::MissingArgument {
            field: ARG_WEATHER,
            env: ENV_STATS_WEATHER,
        })?;
        let location = args.location.ok_or(CliError::MissingArgument {
            field: ARG_LOCATION,
            env: ENV_STATS_LOCATION,
        })?;
        Ok(Self {
            weather,
            location,
            engine_config: args.engine_config,
            window: window_from(args.from, args.to)?,
        })
    }
}

pub(crate) fn run_stats_with(args: StatsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let stats = execute_stats(&config)?;
    write_json(writer, &stats)
}

fn execute_stats(config: &StatsConfig) -> Result<WeatherStatistics, CliError> {
    let recommender = build_recommender(config.engine_config.as_deref())?;
    let weather = load_weather_archive(&config.weather)?;
    let comfort = recommender.comfort();
    let stats = config.window.map_or_else(
        || WeatherStatistics::for_location(&weather, &config.location, comfort),
        |window| WeatherStatistics::for_window(&weather, &config.location, window, comfort),
    )?;
    Ok(stats)
}
