//! Errors raised while reading and writing trail and weather files.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;
use trailwise_core::{CatalogError, InvalidRecord};
use trailwise_scorer::ConfigError;

/// Errors returned when loading a data or configuration file.
///
/// `record` fields are 1-based positions among the file's records, not
/// counting a CSV header.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to open {path}")]
    Open {
        /// File that failed to open.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The extension is neither `.csv` nor `.json`.
    #[error("unsupported data format for {path}; expected .csv or .json")]
    UnsupportedFormat {
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A CSV row could not be decoded.
    #[error("malformed CSV in {path}")]
    Csv {
        /// File being parsed.
        path: Utf8PathBuf,
        /// Decoder error, carrying the row position.
        #[source]
        source: csv::Error,
    },
    /// The JSON document could not be decoded.
    #[error("malformed JSON in {path}")]
    Json {
        /// File being parsed.
        path: Utf8PathBuf,
        /// Decoder error, carrying the line and column.
        #[source]
        source: serde_json::Error,
    },
    /// A trail named a terrain type outside the known set.
    #[error("record {record} in {path} has unknown terrain type '{value}'")]
    InvalidTerrain {
        /// File being parsed.
        path: Utf8PathBuf,
        /// 1-based record position.
        record: usize,
        /// Terrain text as written.
        value: String,
    },
    /// A record decoded but failed domain validation.
    #[error("record {record} in {path} is invalid")]
    InvalidRecord {
        /// File being parsed.
        path: Utf8PathBuf,
        /// 1-based record position.
        record: usize,
        /// Validation failure.
        #[source]
        source: InvalidRecord,
    },
    /// The trails file repeats an identifier.
    #[error("trail catalog in {path} is inconsistent")]
    Catalog {
        /// File being parsed.
        path: Utf8PathBuf,
        /// Catalog failure.
        #[source]
        source: CatalogError,
    },
    /// An engine configuration file failed to parse or validate.
    #[error("invalid engine configuration in {path}")]
    Config {
        /// Configuration file.
        path: Utf8PathBuf,
        /// Parse or validation failure.
        #[source]
        source: ConfigError,
    },
}

/// Errors returned when writing a data file.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The file or its parent directories could not be created or written.
    #[error("failed to write {path}")]
    Write {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The extension is neither `.csv` nor `.json`.
    #[error("unsupported data format for {path}; expected .csv or .json")]
    UnsupportedFormat {
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// CSV encoding failed.
    #[error("failed to encode CSV for {path}")]
    Csv {
        /// Destination path.
        path: Utf8PathBuf,
        /// Encoder error.
        #[source]
        source: csv::Error,
    },
    /// JSON encoding failed.
    #[error("failed to encode JSON for {path}")]
    Json {
        /// Destination path.
        path: Utf8PathBuf,
        /// Encoder error.
        #[source]
        source: serde_json::Error,
    },
}
