//! Error types emitted by the Trailwise CLI.
//!
//! Keep this error type reasonably small, as every command returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use trailwise_core::DateWindowError;
use trailwise_data::LoadError;
use trailwise_recommender::RecommendError;
use trailwise_scorer::{ConfigError, StatisticsError};

/// Errors emitted by the Trailwise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// Only one end of a date window was given.
    #[error("--from and --to must be given together")]
    IncompleteWindow,
    /// The date window ends before it starts.
    #[error(transparent)]
    InvalidWindow(#[from] DateWindowError),
    /// A terrain name was not recognised.
    #[error("unknown terrain type '{value}'")]
    UnknownTerrain {
        /// Terrain text as given.
        value: String,
    },
    /// No trail has the requested identifier.
    #[error("no trail with id '{id}' in {path}")]
    UnknownTrail {
        /// Requested identifier.
        id: String,
        /// Trails file that was searched.
        path: Utf8PathBuf,
    },
    /// Opening the preference file failed.
    #[error("failed to open preferences at {path}: {source}")]
    OpenPreferences {
        /// Preference file.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Preference JSON could not be decoded.
    #[error("failed to parse preferences JSON at {path}: {source}")]
    ParsePreferences {
        /// Preference file.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// A data or engine configuration file failed to load.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Engine configuration was rejected.
    #[error("invalid engine configuration: {0}")]
    EngineConfig(#[from] ConfigError),
    /// The recommender rejected the request.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
    /// The requested location has no weather records.
    #[error(transparent)]
    Statistics(#[from] StatisticsError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
