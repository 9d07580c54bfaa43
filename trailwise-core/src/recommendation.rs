//! Output types produced by a recommendation run.

use crate::{TerrainType, TrailCategory};

/// The calendar month with the highest mean comfort index in a history.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestPeriod {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, `1..=12`.
    pub month: u32,
    /// Mean comfort index across the month's records.
    pub mean_comfort_index: f64,
    /// Number of records in the month.
    pub days: usize,
}

/// Comfort figures attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComfortSummary {
    /// Mean comfort index of the location's history.
    pub mean_comfort_index: f64,
    /// Number of sunny days in the history.
    pub sunny_days: usize,
    /// Number of rainy days in the history.
    pub rainy_days: usize,
    /// Best calendar month to walk the trail.
    pub best_period: BestPeriod,
}

/// The four normalised sub-scores behind an overall score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubScores {
    /// Temperature and precipitation fit, `0..=100`.
    pub weather: f64,
    /// Difficulty fit, `0..=100`.
    pub difficulty: f64,
    /// Length fit, `0..=100`.
    pub length: f64,
    /// Mean comfort index, `0..=100`.
    pub comfort: f64,
}

/// A hard constraint a trail failed to satisfy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum ConstraintViolation {
    /// The trail is harder than the preference allows.
    DifficultyAboveMax {
        /// Trail difficulty.
        difficulty: u8,
        /// Preference maximum.
        max: u8,
    },
    /// The trail is easier than the preference allows.
    DifficultyBelowMin {
        /// Trail difficulty.
        difficulty: u8,
        /// Preference minimum.
        min: u8,
    },
    /// The trail is longer than the preference allows.
    LengthAboveMax {
        /// Trail length in kilometres.
        length_km: f64,
        /// Preference maximum in kilometres.
        max_km: f64,
    },
    /// The trail is shorter than the preference allows.
    LengthBelowMin {
        /// Trail length in kilometres.
        length_km: f64,
        /// Preference minimum in kilometres.
        min_km: f64,
    },
    /// The trail climbs more than the preference allows.
    ElevationAboveMax {
        /// Trail ascent in metres.
        elevation_gain_m: f64,
        /// Preference maximum in metres.
        max_m: f64,
    },
    /// The trail lies outside the preferred regions.
    RegionNotPreferred {
        /// Trail region.
        region: String,
    },
    /// The trail's terrain is not among the preferred terrains.
    TerrainNotPreferred {
        /// Trail terrain.
        terrain: TerrainType,
    },
    /// The trail carries none of the preferred tags.
    TagsNotPreferred {
        /// Trail tags.
        tags: Vec<String>,
    },
    /// The location's mean daily sunshine falls short of the preference.
    SunshineBelowMin {
        /// Mean daily sunshine hours at the location.
        sunshine_hours: f64,
        /// Preference minimum in hours.
        min_hours: f64,
    },
    /// No weather records exist for the trail's location.
    NoWeatherHistory {
        /// Location key that had no records.
        location: String,
    },
}

impl std::fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DifficultyAboveMax { difficulty, max } => {
                write!(f, "difficulty {difficulty} exceeds maximum {max}")
            }
            Self::DifficultyBelowMin { difficulty, min } => {
                write!(f, "difficulty {difficulty} is below minimum {min}")
            }
            Self::LengthAboveMax { length_km, max_km } => {
                write!(f, "length {length_km} km exceeds maximum {max_km} km")
            }
            Self::LengthBelowMin { length_km, min_km } => {
                write!(f, "length {length_km} km is below minimum {min_km} km")
            }
            Self::ElevationAboveMax {
                elevation_gain_m,
                max_m,
            } => write!(f, "elevation gain {elevation_gain_m} m exceeds maximum {max_m} m"),
            Self::RegionNotPreferred { region } => {
                write!(f, "region {region} is not preferred")
            }
            Self::TerrainNotPreferred { terrain } => {
                write!(f, "terrain {terrain} is not preferred")
            }
            Self::TagsNotPreferred { tags } if tags.is_empty() => {
                write!(f, "trail has no tags")
            }
            Self::TagsNotPreferred { tags } => {
                write!(f, "tags {} are not preferred", tags.join(", "))
            }
            Self::SunshineBelowMin {
                sunshine_hours,
                min_hours,
            } => write!(
                f,
                "mean sunshine {sunshine_hours:.1} h is below minimum {min_hours} h"
            ),
            Self::NoWeatherHistory { location } => {
                write!(f, "no weather history for {location}")
            }
        }
    }
}

/// One ranked trail.
///
/// `matched` is true only when `violations` is empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationResult {
    /// Trail identifier.
    pub trail_id: String,
    /// Trail display name.
    pub trail_name: String,
    /// Trail region.
    pub region: String,
    /// Weighted score in `0..=100`.
    pub overall_score: f64,
    /// Trail category.
    pub category: TrailCategory,
    /// Estimated hours to complete the trail.
    pub estimated_completion_hours: f64,
    /// Comfort figures; `None` when the location had no weather history.
    pub comfort: Option<ComfortSummary>,
    /// Sub-scores; `None` when the location had no weather history.
    pub sub_scores: Option<SubScores>,
    /// Whether every hard constraint holds.
    pub matched: bool,
    /// Hard constraints the trail failed.
    pub violations: Vec<ConstraintViolation>,
}
