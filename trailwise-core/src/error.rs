//! Validation errors raised while constructing trail and weather records.

use chrono::NaiveDate;
use thiserror::Error;

/// A trail or weather record violated one of its invariants.
///
/// Raised by [`TrailRecord::new`](crate::TrailRecord::new) and
/// [`WeatherRecord::new`](crate::WeatherRecord::new); the engine itself never
/// produces this error because it only accepts constructed records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidRecord {
    /// The trail identifier was empty or whitespace.
    #[error("trail identifier must not be empty")]
    EmptyIdentifier,
    /// The trail had no region key to join weather on.
    #[error("trail {id} must name a region")]
    EmptyRegion {
        /// Identifier of the offending trail.
        id: String,
    },
    /// Trail length was zero, negative or not finite.
    #[error("trail {id} has non-positive length {length_km} km")]
    NonPositiveLength {
        /// Identifier of the offending trail.
        id: String,
        /// Rejected length.
        length_km: f64,
    },
    /// Elevation gain was negative or not finite.
    #[error("trail {id} has invalid elevation gain {elevation_gain_m} m")]
    InvalidElevationGain {
        /// Identifier of the offending trail.
        id: String,
        /// Rejected gain.
        elevation_gain_m: f64,
    },
    /// Difficulty fell outside `1..=5`.
    #[error("trail {id} has difficulty {difficulty}; expected 1 to 5")]
    DifficultyOutOfRange {
        /// Identifier of the offending trail.
        id: String,
        /// Rejected difficulty.
        difficulty: u8,
    },
    /// A start or end coordinate lay outside WGS84 bounds.
    #[error("trail {id} has coordinate ({lat}, {lon}) outside WGS84 bounds")]
    CoordinateOutOfRange {
        /// Identifier of the offending trail.
        id: String,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },
    /// The weather record had no location key.
    #[error("weather record for {date} must name a location")]
    EmptyLocation {
        /// Date of the offending record.
        date: NaiveDate,
    },
    /// A temperature was NaN or infinite.
    #[error("weather record {location}/{date} has a non-finite temperature")]
    NonFiniteTemperature {
        /// Location of the offending record.
        location: String,
        /// Date of the offending record.
        date: NaiveDate,
    },
    /// Temperatures were not ordered `min <= avg <= max`.
    #[error("weather record {location}/{date} has min {min} / avg {avg} / max {max} out of order")]
    TemperatureOrder {
        /// Location of the offending record.
        location: String,
        /// Date of the offending record.
        date: NaiveDate,
        /// Minimum temperature.
        min: f64,
        /// Average temperature.
        avg: f64,
        /// Maximum temperature.
        max: f64,
    },
    /// Precipitation was negative or not finite.
    #[error("weather record {location}/{date} has invalid precipitation {precipitation_mm} mm")]
    InvalidPrecipitation {
        /// Location of the offending record.
        location: String,
        /// Date of the offending record.
        date: NaiveDate,
        /// Rejected precipitation.
        precipitation_mm: f64,
    },
    /// Sunshine hours fell outside `0..=24`.
    #[error("weather record {location}/{date} has sunshine {sunshine_hours} h outside 0 to 24")]
    SunshineOutOfRange {
        /// Location of the offending record.
        location: String,
        /// Date of the offending record.
        date: NaiveDate,
        /// Rejected sunshine duration.
        sunshine_hours: f64,
    },
    /// Cloud cover exceeded 100 %.
    #[error("weather record {location}/{date} has cloud cover {cloud_cover_pct}% above 100")]
    CloudCoverOutOfRange {
        /// Location of the offending record.
        location: String,
        /// Date of the offending record.
        date: NaiveDate,
        /// Rejected cloud cover.
        cloud_cover_pct: u8,
    },
}
