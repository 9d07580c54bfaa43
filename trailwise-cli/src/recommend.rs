//! Recommend command implementation for the Trailwise CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use trailwise_core::{
    DateWindow, RecommendationResult, TerrainType, TrailFilter, UserPreference,
};
use trailwise_data::{load_trail_catalog, load_weather_archive};

use crate::preference::{PreferenceFlags, parse_terrain};
use crate::{
    ARG_TRAILS, ARG_WEATHER, CliError, ENV_RECOMMEND_TRAILS, ENV_RECOMMEND_WEATHER,
    build_recommender, window_from, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Rank trails against a preference profile using each trail \
                 region's weather history. Trails that break a hard limit are \
                 listed after every trail that satisfies them.",
    about = "Rank trails against preferences and historical weather"
)]
#[ortho_config(prefix = "TRAILWISE")]
pub(crate) struct RecommendArgs {
    /// Trail file (`.csv` or `.json`).
    #[arg(long = ARG_TRAILS, value_name = "path")]
    #[serde(default)]
    pub(crate) trails: Option<Utf8PathBuf>,
    /// Weather file (`.csv` or `.json`).
    #[arg(long = ARG_WEATHER, value_name = "path")]
    #[serde(default)]
    pub(crate) weather: Option<Utf8PathBuf>,
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
    /// Highest comfortable mean daily precipitation in millimetres.
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
    /// Only consider trails in this region.
    #[arg(long, value_name = "region")]
    #[serde(default)]
    pub(crate) region: Option<String>,
    /// Only consider trails with this terrain.
    #[arg(long, value_name = "terrain")]
    #[serde(default)]
    pub(crate) terrain: Option<String>,
    /// First day of weather to consider (YYYY-MM-DD).
    #[arg(long, value_name = "date")]
    #[serde(default)]
    pub(crate) from: Option<NaiveDate>,
    /// Last day of weather to consider (YYYY-MM-DD).
    #[arg(long, value_name = "date")]
    #[serde(default)]
    pub(crate) to: Option<NaiveDate>,
    /// Number of trails to print; zero prints all.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) trails: Utf8PathBuf,
    pub(crate) weather: Utf8PathBuf,
    pub(crate) engine_config: Option<Utf8PathBuf>,
    pub(crate) preference: UserPreference,
    pub(crate) filter: TrailFilter,
    pub(crate) window: Option<DateWindow>,
    pub(crate) top_n: Option<usize>,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let trails = args.trails.ok_or(CliError::MissingArgument {
            field: ARG_TRAILS,
            env: ENV_RECOMMEND_TRAILS,
        })?;
        let weather = args.weather.ok_or(CliError::MissingArgument {
            field: ARG_WEATHER,
            env: ENV_RECOMMEND_WEATHER,
        })?;
        let terrain: Option<TerrainType> = args.terrain.as_deref().map(parse_terrain).transpose()?;
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
            engine_config: args.engine_config,
            preference,
            filter: TrailFilter {
                region: args.region,
                terrain,
                ..TrailFilter::default()
            },
            window: window_from(args.from, args.to)?,
            top_n: args.top_n,
        })
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let results = execute_recommend(&config)?;
    write_json(writer, &results)
}

fn execute_recommend(
    config: &RecommendConfig,
) -> Result<Vec<RecommendationResult>, CliError> {
    let recommender = build_recommender(config.engine_config.as_deref())?;
    let catalog = load_trail_catalog(&config.trails)?;
    let weather = load_weather_archive(&config.weather)?;
    let candidates = catalog.filtered(&config.filter);
    info!(
        "{} of {} trails pass the catalog filter",
        candidates.len(),
        catalog.len()
    );
    let results = config.window.map_or_else(
        || recommender.recommend(&candidates, &weather, &config.preference, config.top_n),
        |window| {
            recommender.recommend_in_window(
                &candidates,
                &weather,
                &config.preference,
                window,
                config.top_n,
            )
        },
    )?;
    Ok(results)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
