//! Daily weather observations for a location.

use chrono::NaiveDate;

use crate::InvalidRecord;

/// Unvalidated daily weather values, as produced by a loader.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherDraft {
    /// Observation date.
    pub date: NaiveDate,
    /// Location key matching [`TrailRecord::region`](crate::TrailRecord::region).
    pub location: String,
    /// Mean temperature in °C.
    pub avg_temp_c: f64,
    /// Minimum temperature in °C.
    pub min_temp_c: f64,
    /// Maximum temperature in °C.
    pub max_temp_c: f64,
    /// Precipitation in millimetres.
    pub precipitation_mm: f64,
    /// Hours of sunshine.
    pub sunshine_hours: f64,
    /// Cloud cover percentage.
    pub cloud_cover_pct: u8,
}

/// A validated, immutable daily weather observation.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trailwise_core::{WeatherDraft, WeatherRecord};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let date = NaiveDate::from_ymd_opt(2023, 7, 15).ok_or("invalid date")?;
/// let record = WeatherRecord::new(WeatherDraft {
///     date,
///     location: "TATRY".into(),
///     avg_temp_c: 21.0,
///     min_temp_c: 14.0,
///     max_temp_c: 26.0,
///     precipitation_mm: 0.0,
///     sunshine_hours: 9.5,
///     cloud_cover_pct: 20,
/// })?;
/// assert_eq!(record.location(), "TATRY");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeatherRecord {
    date: NaiveDate,
    location: String,
    avg_temp_c: f64,
    min_temp_c: f64,
    max_temp_c: f64,
    precipitation_mm: f64,
    sunshine_hours: f64,
    cloud_cover_pct: u8,
}

impl WeatherRecord {
    /// Validate a draft and construct a [`WeatherRecord`].
    ///
    /// # Errors
    /// Returns [`InvalidRecord`] when the location is blank, a temperature is
    /// not finite or the temperatures are out of order, precipitation is
    /// negative, sunshine falls outside `0..=24` or cloud cover exceeds 100.
    pub fn new(draft: WeatherDraft) -> Result<Self, InvalidRecord> {
        let WeatherDraft {
            date,
            location,
            avg_temp_c,
            min_temp_c,
            max_temp_c,
            precipitation_mm,
            sunshine_hours,
            cloud_cover_pct,
        } = draft;

        if location.trim().is_empty() {
            return Err(InvalidRecord::EmptyLocation { date });
        }
        if ![avg_temp_c, min_temp_c, max_temp_c]
            .iter()
            .all(|t| t.is_finite())
        {
            return Err(InvalidRecord::NonFiniteTemperature { location, date });
        }
        if min_temp_c > avg_temp_c || avg_temp_c > max_temp_c {
            return Err(InvalidRecord::TemperatureOrder {
                location,
                date,
                min: min_temp_c,
                avg: avg_temp_c,
                max: max_temp_c,
            });
        }
        if !precipitation_mm.is_finite() || precipitation_mm < 0.0 {
            return Err(InvalidRecord::InvalidPrecipitation {
                location,
                date,
                precipitation_mm,
            });
        }
        if !(0.0..=24.0).contains(&sunshine_hours) {
            return Err(InvalidRecord::SunshineOutOfRange {
                location,
                date,
                sunshine_hours,
            });
        }
        if cloud_cover_pct > 100 {
            return Err(InvalidRecord::CloudCoverOutOfRange {
                location,
                date,
                cloud_cover_pct,
            });
        }

        Ok(Self {
            date,
            location,
            avg_temp_c,
            min_temp_c,
            max_temp_c,
            precipitation_mm,
            sunshine_hours,
            cloud_cover_pct,
        })
    }

    /// Observation date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Location key.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Mean temperature in °C.
    #[must_use]
    pub const fn avg_temp_c(&self) -> f64 {
        self.avg_temp_c
    }

    /// Minimum temperature in °C.
    #[must_use]
    pub const fn min_temp_c(&self) -> f64 {
        self.min_temp_c
    }

    /// Maximum temperature in °C.
    #[must_use]
    pub const fn max_temp_c(&self) -> f64 {
        self.max_temp_c
    }

    /// Precipitation in millimetres.
    #[must_use]
    pub const fn precipitation_mm(&self) -> f64 {
        self.precipitation_mm
    }

    /// Hours of sunshine in `0..=24`.
    #[must_use]
    pub const fn sunshine_hours(&self) -> f64 {
        self.sunshine_hours
    }

    /// Cloud cover percentage in `0..=100`.
    #[must_use]
    pub const fn cloud_cover_pct(&self) -> u8 {
        self.cloud_cover_pct
    }

    /// The subset of values the comfort index reads.
    #[must_use]
    pub fn conditions(&self) -> WeatherConditions {
        WeatherConditions::from(self)
    }
}

impl TryFrom<WeatherDraft> for WeatherRecord {
    type Error = InvalidRecord;

    fn try_from(draft: WeatherDraft) -> Result<Self, Self::Error> {
        Self::new(draft)
    }
}

/// Weather values for a single day or an aggregate over many days.
///
/// Aggregates carry means, so cloud cover is fractional here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherConditions {
    /// Mean temperature in °C.
    pub avg_temp_c: f64,
    /// Precipitation in millimetres.
    pub precipitation_mm: f64,
    /// Cloud cover percentage.
    pub cloud_cover_pct: f64,
    /// Hours of sunshine.
    pub sunshine_hours: f64,
}

impl From<&WeatherRecord> for WeatherConditions {
    fn from(record: &WeatherRecord) -> Self {
        Self {
            avg_temp_c: record.avg_temp_c,
            precipitation_mm: record.precipitation_mm,
            cloud_cover_pct: f64::from(record.cloud_cover_pct),
            sunshine_hours: record.sunshine_hours,
        }
    }
}
