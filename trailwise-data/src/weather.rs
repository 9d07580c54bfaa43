//! Weather file loading and saving.

use camino::Utf8Path;
use log::info;
use trailwise_core::{WeatherArchive, WeatherRecord};

use crate::codec::{load_format, open_reader, read_csv, read_json, save_format, write_csv, write_json};
use crate::rows::{WeatherDocument, WeatherRow};
use crate::{DataFormat, LoadError, SaveError};

/// Load and validate every weather record in a `.csv` or `.json` file.
///
/// Dates use the `YYYY-MM-DD` form.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be opened, its format is not
/// recognised, it fails to decode or a record is invalid.
pub fn load_weather(path: &Utf8Path) -> Result<Vec<WeatherRecord>, LoadError> {
    let format = load_format(path)?;
    let reader = open_reader(path)?;
    let rows: Vec<WeatherRow> = match format {
        DataFormat::Csv => read_csv(path, reader)?,
        DataFormat::Json => {
            let document: WeatherDocument<WeatherRow> = read_json(path, reader)?;
            document.weather_records
        }
    };
    let records = rows
        .into_iter()
        .zip(1..)
        .map(|(row, record)| {
            WeatherRecord::new(row.into()).map_err(|source| LoadError::InvalidRecord {
                path: path.to_path_buf(),
                record,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    info!("loaded {} weather records from {path}", records.len());
    Ok(records)
}

/// Load a weather file into a [`WeatherArchive`] indexed by location.
///
/// # Errors
/// Returns every error [`load_weather`] can return.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use trailwise_data::load_weather_archive;
///
/// # fn main() -> Result<(), trailwise_data::LoadError> {
/// let archive = load_weather_archive(Utf8Path::new("data/weather.json"))?;
/// for location in archive.locations() {
///     println!("{location}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn load_weather_archive(path: &Utf8Path) -> Result<WeatherArchive, LoadError> {
    load_weather(path).map(WeatherArchive::from_records)
}

/// Write `records` to a `.csv` or `.json` file, creating parent directories.
///
/// # Errors
/// Returns [`SaveError`] when the format is not recognised or the file
/// cannot be written.
pub fn save_weather(path: &Utf8Path, records: &[WeatherRecord]) -> Result<(), SaveError> {
    match save_format(path)? {
        DataFormat::Csv => write_csv(path, records.iter().map(WeatherRow::from))?,
        DataFormat::Json => write_json(
            path,
            &WeatherDocument {
                weather_records: records.iter().map(WeatherRow::from).collect(),
            },
        )?,
    }
    info!("saved {} weather records to {path}", records.len());
    Ok(())
}
