//! Trail file loading and saving.

use camino::Utf8Path;
use log::info;
use trailwise_core::{TerrainType, TrailCatalog, TrailRecord};

use crate::codec::{load_format, open_reader, read_csv, read_json, save_format, write_csv, write_json};
use crate::rows::{TagList, TrailDocument, TrailRow};
use crate::{DataFormat, LoadError, SaveError};

/// Load and validate every trail in a `.csv` or `.json` file.
///
/// Loading stops at the first record that fails to decode or validate.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be opened, its format is not
/// recognised, it fails to decode or a record is invalid.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use trailwise_data::load_trails;
///
/// # fn main() -> Result<(), trailwise_data::LoadError> {
/// let trails = load_trails(Utf8Path::new("data/trails.csv"))?;
/// println!("{} trails", trails.len());
/// # Ok(())
/// # }
/// ```
pub fn load_trails(path: &Utf8Path) -> Result<Vec<TrailRecord>, LoadError> {
    let format = load_format(path)?;
    let reader = open_reader(path)?;
    let trails = match format {
        DataFormat::Csv => {
            let rows: Vec<TrailRow<String>> = read_csv(path, reader)?;
            validate_rows(path, rows)?
        }
        DataFormat::Json => {
            let document: TrailDocument<TrailRow<Vec<String>>> = read_json(path, reader)?;
            validate_rows(path, document.trail_records)?
        }
    };
    info!("loaded {} trails from {path}", trails.len());
    Ok(trails)
}

/// Load a trails file into a [`TrailCatalog`], rejecting repeated ids.
///
/// # Errors
/// Returns [`LoadError::Catalog`] for duplicate identifiers, plus every
/// error [`load_trails`] can return.
pub fn load_trail_catalog(path: &Utf8Path) -> Result<TrailCatalog, LoadError> {
    TrailCatalog::new(load_trails(path)?).map_err(|source| LoadError::Catalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `trails` to a `.csv` or `.json` file, creating parent directories.
///
/// # Errors
/// Returns [`SaveError`] when the format is not recognised or the file
/// cannot be written.
pub fn save_trails(path: &Utf8Path, trails: &[TrailRecord]) -> Result<(), SaveError> {
    match save_format(path)? {
        DataFormat::Csv => write_csv(path, trails.iter().map(TrailRow::<String>::from))?,
        DataFormat::Json => write_json(
            path,
            &TrailDocument {
                trail_records: trails
                    .iter()
                    .map(TrailRow::<Vec<String>>::from)
                    .collect(),
            },
        )?,
    }
    info!("saved {} trails to {path}", trails.len());
    Ok(())
}

fn validate_rows<T: TagList>(
    path: &Utf8Path,
    rows: Vec<TrailRow<T>>,
) -> Result<Vec<TrailRecord>, LoadError> {
    rows.into_iter()
        .zip(1..)
        .map(|(row, record)| {
            let terrain = row.terrain_type.parse::<TerrainType>().map_err(|_| {
                LoadError::InvalidTerrain {
                    path: path.to_path_buf(),
                    record,
                    value: row.terrain_type.clone(),
                }
            })?;
            TrailRecord::new(row.into_draft(terrain)).map_err(|source| LoadError::InvalidRecord {
                path: path.to_path_buf(),
                record,
                source,
            })
        })
        .collect()
}
