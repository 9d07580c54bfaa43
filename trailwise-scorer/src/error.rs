//! Error types raised by the scoring components.

use thiserror::Error;

/// An engine tunable was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value was NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Dotted path of the offending field.
        field: &'static str,
    },
    /// A value that must not be negative was negative.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A value that must be positive was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The ideal temperature band was inverted.
    #[error("ideal temperature band is inverted: {low} °C > {high} °C")]
    InvertedIdealBand {
        /// Configured lower edge.
        low: f64,
        /// Configured upper edge.
        high: f64,
    },
    /// A difficulty threshold fell outside `1..=5`.
    #[error("{field} must be between 1 and 5, got {value}")]
    DifficultyOutOfRange {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Rejected value.
        value: u8,
    },
    /// A harder grade had a smaller pace multiplier than an easier one.
    #[error("difficulty multiplier for grade {grade} is below the previous grade")]
    DecreasingDifficultyTable {
        /// First grade whose multiplier decreased.
        grade: u8,
    },
    /// The temperature share of the weather score fell outside `0..=1`.
    #[error("matcher.temperature_share must be between 0 and 1, got {value}")]
    ShareOutOfRange {
        /// Rejected value.
        value: f64,
    },
    /// A configuration document could not be parsed.
    #[cfg(feature = "serde")]
    #[error("failed to parse engine configuration")]
    Parse(#[source] serde_json::Error),
}

/// Statistics could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatisticsError {
    /// The location had no weather records, or none in the requested window.
    #[error("no weather history for location {location}")]
    EmptyHistory {
        /// Location key that had no records.
        location: String,
    },
}
