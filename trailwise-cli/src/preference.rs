//! Preference flags shared by the ranking subcommands.

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use trailwise_core::{TerrainType, UserPreference};

use crate::CliError;

/// Preference options gathered from a command's flags.
///
/// Values start from the optional preference file, or the defaults when no
/// file is given, and each flag that is set overrides its field.
#[derive(Debug, Clone, Default)]
pub(crate) struct PreferenceFlags {
    pub(crate) file: Option<Utf8PathBuf>,
    pub(crate) temperature: Option<f64>,
    pub(crate) max_precipitation: Option<f64>,
    pub(crate) min_difficulty: Option<u8>,
    pub(crate) max_difficulty: Option<u8>,
    pub(crate) min_length: Option<f64>,
    pub(crate) max_length: Option<f64>,
    pub(crate) max_elevation_gain: Option<f64>,
    pub(crate) prefer_regions: Option<String>,
    pub(crate) prefer_terrains: Option<String>,
    pub(crate) prefer_tags: Option<String>,
    pub(crate) min_sunshine: Option<f64>,
}

impl PreferenceFlags {
    /// Resolve the flags into an unvalidated preference snapshot.
    pub(crate) fn resolve(self) -> Result<UserPreference, CliError> {
        let mut preference = self
            .file
            .as_deref()
            .map(load_preferences)
            .transpose()?
            .unwrap_or_default();
        if let Some(value) = self.temperature {
            preference.preferred_temperature = value;
        }
        if let Some(value) = self.max_precipitation {
            preference.max_precipitation = value;
        }
        if let Some(value) = self.min_difficulty {
            preference.min_difficulty = value;
        }
        if let Some(value) = self.max_difficulty {
            preference.max_difficulty = value;
        }
        if let Some(value) = self.min_length {
            preference.min_length_km = value;
        }
        if let Some(value) = self.max_length {
            preference.max_length_km = value;
        }
        if let Some(value) = self.max_elevation_gain {
            preference.max_elevation_gain_m = Some(value);
        }
        if let Some(value) = self.min_sunshine {
            preference.min_sunshine_hours = Some(value);
        }
        if let Some(regions) = &self.prefer_regions {
            preference.preferred_regions = split_list(regions).map(str::to_owned).collect();
        }
        if let Some(tags) = &self.prefer_tags {
            preference.preferred_tags = split_list(tags).map(str::to_owned).collect();
        }
        if let Some(terrains) = &self.prefer_terrains {
            preference.preferred_terrains = split_list(terrains)
                .map(parse_terrain)
                .collect::<Result<_, _>>()?;
        }
        Ok(preference)
    }
}

/// Parse a terrain name as given on the command line.
pub(crate) fn parse_terrain(value: &str) -> Result<TerrainType, CliError> {
    value.parse().map_err(|_| CliError::UnknownTerrain {
        value: value.to_owned(),
    })
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|item| !item.is_empty())
}

/// Load a JSON-encoded [`UserPreference`] from disk.
///
/// Fields missing from the file keep their defaults.
pub(crate) fn load_preferences(path: &Utf8Path) -> Result<UserPreference, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenPreferences {
            path: path.to_path_buf(),
            source,
        }
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParsePreferences {
        path: path.to_path_buf(),
        source,
    })
}
