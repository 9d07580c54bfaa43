//! Weekly command implementation for the Trailwise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use trailwise_core::UserPreference;
use trailwise_data::{load_trails, load_weather_archive};
use trailwise_recommender::{DEFAULT_PER_DAY, DailyRecommendation};

use crate::preference::PreferenceFlags;
use crate::{
    ARG_START, ARG_TRAILS, ARG_WEATHER, CliError, ENV_WEEKLY_START, ENV_WEEKLY_TRAILS,
    ENV_WEEKLY_WEATHER, build_recommender, write_json,
};

/// CLI arguments for the `weekly` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "weekly",
    long_about = "Plan seven days starting at --start. Each day ranks the \
                  trails using only that day's weather record for the trail's \
                  region.",
    about = "Suggest trails for each day of a week"
)]
#[ortho_config(prefix = "TRAILWISE")]
pub(crate) struct WeeklyArgs {
    /// Trail file (`.csv` or `.json`).
    #[arg(long = ARG_TRAILS, value_name = "path")]
    #[serde(default)]
    pub(crate) trails: Option<Utf8PathBuf>,
    /// Weather file (`.csv` or `.json`).
    #[arg(long = ARG_WEATHER, value_name = "path")]
    #[serde(default)]
    pub(crate) weather: Option<Utf8PathBuf>,
    /// First day of the plan (YYYY-MM-DD).
    #[arg(long = ARG_START, value_name = "date")]
    #[serde(default)]
    pub(crate) start: Option<NaiveDate>,
    /// Trails suggested per day; zero lists every trail.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) per_day: Option<usize>,
    /// JSON engine configuration overriding the default tunables.
    #[arg(long, value_name = "path")]
    #[serde(default)]
    pub(crate) engine_config: Option<Utf8PathBuf>,
    /// JSON preference profile; flags below override its fields.
    #[arg(long, value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Ideal mean temperature in °C.
    #[arg(long, value_name = "celsius", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) temperature: Option<f64>,
    /// Highest comfortable daily precipitation in millimetres.
    #[arg(long, value_name = "mm")]
    #[serde(default)]
    pub(crate) max_precipitation: Option<f64>,
    /// Easiest acceptable difficulty grade (1 to 5).
    #[arg(long, value_name = "grade")]
    #[serde(default)]
    pub(crate) min_difficulty: Option<u8>,
    /// Hardest acceptable difficulty grade (1 to 5).
    #[arg(long, value_name = "grade")]
    #[serde(default)]
    pub(crate) max_difficulty: Option<u8>,
    /// Shortest acceptable trail in kilometres.
    #[arg(long, value_name = "km")]
    #[serde(default)]
    pub(crate) min_length: Option<f64>,
    /// Longest acceptable trail in kilometres.
    #[arg(long, value_name = "km")]
    #[serde(default)]
    pub(crate) max_length: Option<f64>,
    /// Largest acceptable ascent in metres.
    #[arg(long, value_name = "m")]
    #[serde(default)]
    pub(crate) max_elevation_gain: Option<f64>,
    /// Comma-separated regions the preference accepts.
    #[arg(long, value_name = "list")]
    #[serde(default)]
    pub(crate) prefer_regions: Option<String>,
    /// Comma-separated terrains the preference accepts.
    #[arg(long, value_name = "list")]
    #[serde(default)]
    pub(crate) prefer_terrains: Option<String>,
    /// Comma-separated tags; a trail must carry at least one.
    #[arg(long, value_name = "list")]
    #[serde(default)]
    pub(crate) prefer_tags: Option<String>,
    /// Fewest mean daily sunshine hours acceptable.
    #[arg(long, value_name = "hours")]
    #[serde(default)]
    pub(crate) min_sunshine: Option<f64>,
}

impl WeeklyArgs {
    pub(crate) fn into_config(self) -> Result<WeeklyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        WeeklyConfig::try_from(merged)
    }
}

/// Resolved `weekly` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WeeklyConfig {
    pub(crate) trails: Utf8PathBuf,
    pub(crate) weather: Utf8PathBuf,
    pub(crate) start: NaiveDate,
    pub(crate) per_day: usize,
    pub(crate) engine_config: Option<Utf8PathBuf>,
    pub(crate) preference: UserPreference,
}

impl TryFrom<WeeklyArgs> for WeeklyConfig {
    type Error = CliError;

    fn try_from(args: WeeklyArgs) -> Result<Self, Self::Error> {
        let trails = args.trails.ok_or(CliError::MissingArgument {
            field: ARG_TRAILS,
            env: ENV_WEEKLY_TRAILS,
        })?;
        let weather = args.weather.ok_or(CliError::MissingArgument {
            field: ARG_WEATHER,
            env: ENV_WEEKLY_WEATHER,
        })?;
        let start = args.start.ok_or(CliError::MissingArgument {
            field: ARG_START,
            env: ENV_WEEKLY_START,
        })?;
        let preference = PreferenceFlags {
            file: args.preferences,
            temperature: args.temperature,
            max_precipitation: args.max_precipitation,
            min_difficulty: args.min_difficulty,
            max_difficulty: args.max_difficulty,
            min_length: args.min_length,
            max_length: args.max_length,
            max_elevation_gain: args.max_elevation_gain,
            prefer_regions: args.prefer_regions,
            prefer_terrains: args.prefer_terrains,
            prefer_tags: args.prefer_tags,
            min_sunshine: args.min_sunshine,
        }
        .resolve()?;
        Ok(Self {
            trails,
            weather,
            start,
            per_day: args.per_day.unwrap_or(DEFAULT_PER_DAY),
            engine_config: args.engine_config,
            preference,
        })
    }
}

pub(crate) fn run_weekly_with(args: WeeklyArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let plan = execute_weekly(&config)?;
    write_json(writer, &plan)
}

fn execute_weekly(config: &WeeklyConfig) -> Result<Vec<DailyRecommendation>, CliError> {
    let recommender = build_recommender(config.engine_config.as_deref())?;
    let trails = load_trails(&config.trails)?;
    let weather = load_weather_archive(&config.weather)?;
    Ok(recommender.recommend_weekly(
        &trails,
        &weather,
        &config.preference,
        config.start,
        config.per_day,
    )?)
}
