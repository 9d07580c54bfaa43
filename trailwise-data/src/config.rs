//! Engine configuration files.

use camino::Utf8Path;
use log::info;
use trailwise_scorer::EngineConfig;

use crate::LoadError;
use crate::codec::read_to_string;

/// Read and validate an [`EngineConfig`] from a JSON file.
///
/// Sections and fields missing from the file keep their defaults; unknown
/// fields are rejected.
///
/// # Errors
/// Returns [`LoadError::Open`] when the file cannot be read and
/// [`LoadError::Config`] when it fails to parse or validate.
pub fn load_engine_config(path: &Utf8Path) -> Result<EngineConfig, LoadError> {
    let text = read_to_string(path)?;
    let config = EngineConfig::from_json_str(&text).map_err(|source| LoadError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded engine configuration from {path}");
    Ok(config)
}
