//! Trail command implementation for the Trailwise CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::warn;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use trailwise_core::{TrailCategory, TrailRecord};
use trailwise_data::{load_trail_catalog, load_weather_archive};
use trailwise_recommender::RouteRecommender;
use trailwise_scorer::WeatherStatistics;

use crate::{
    ARG_TRAIL_ID, ARG_TRAILS, CliError, ENV_TRAIL_ID, ENV_TRAIL_TRAILS, build_recommender,
    write_json,
};

/// CLI arguments for the `trail` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "trail",
    long_about = "Describe one trail: its record, category and estimated \
                  completion time. With --weather, the weather statistics of \
                  the trail's region are included.",
    about = "Describe a single trail"
)]
#[ortho_config(prefix = "TRAILWISE")]
pub(crate) struct TrailArgs {
    /// Trail file (`.csv` or `.json`).
    #[arg(long = ARG_TRAILS, value_name = "path")]
    #[serde(default)]
    pub(crate) trails: Option<Utf8PathBuf>,
    /// Identifier of the trail to describe.
    #[arg(long = ARG_TRAIL_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) id: Option<String>,
    /// Optional weather file (`.csv` or `.json`).
    #[arg(long, value_name = "path")]
    #[serde(default)]
    pub(crate) weather: Option<Utf8PathBuf>,
    /// JSON engine configuration overriding the default tunables.
    #[arg(long, value_name = "path")]
    #[serde(default)]
    pub(crate) engine_config: Option<Utf8PathBuf>,
}

impl TrailArgs {
    pub(crate) fn into_config(self) -> Result<TrailConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TrailConfig::try_from(merged)
    }
}

/// Resolved `trail` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrailConfig {
    pub(crate) trails: Utf8PathBuf,
    pub(crate) id: String,
    pub(crate) weather: Option<Utf8PathBuf>,
    pub(crate) engine_config: Option<Utf8PathBuf>,
}

impl TryFrom<TrailArgs> for TrailConfig {
    type Error = CliError;

    fn try_from(args: TrailArgs) -> Result<Self, Self::Error> {
        let trails = args.trails.ok_or(CliError::MissingArgument {
            field: ARG_TRAILS,
            env: ENV_TRAIL_TRAILS,
        })?;
        let id = args.id.ok_or(CliError::MissingArgument {
            field: ARG_TRAIL_ID,
            env: ENV_TRAIL_ID,
        })?;
        Ok(Self {
            trails,
            id,
            weather: args.weather,
            engine_config: args.engine_config,
        })
    }
}

/// Description of one trail as printed by the `trail` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct TrailReport {
    pub(crate) trail: TrailRecord,
    pub(crate) category: TrailCategory,
    pub(crate) estimated_completion_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) weather: Option<WeatherStatistics>,
}

pub(crate) fn run_trail_with(args: TrailArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_trail(&config)?;
    write_json(writer, &report)
}

fn execute_trail(config: &TrailConfig) -> Result<TrailReport, CliError> {
    let recommender = build_recommender(config.engine_config.as_deref())?;
    let catalog = load_trail_catalog(&config.trails)?;
    let trail = catalog
        .get(&config.id)
        .cloned()
        .ok_or_else(|| CliError::UnknownTrail {
            id: config.id.clone(),
            path: config.trails.clone(),
        })?;

    let weather = config
        .weather
        .as_deref()
        .map(|path| region_statistics(path, &trail, &recommender))
        .transpose()?
        .flatten();

    Ok(TrailReport {
        category: recommender.categorizer().categorize(&trail),
        estimated_completion_hours: recommender.estimator().estimate_hours(&trail),
        trail,
        weather,
    })
}

/// Statistics for the trail's region, or `None` when the file has no records
/// for it.
fn region_statistics(
    path: &Utf8Path,
    trail: &TrailRecord,
    recommender: &RouteRecommender,
) -> Result<Option<WeatherStatistics>, CliError> {
    let archive = load_weather_archive(path)?;
    let stats = WeatherStatistics::for_location(&archive, trail.region(), recommender.comfort())
        .inspect_err(|err| warn!("{err}; omitting statistics"))
        .ok();
    Ok(stats)
}
