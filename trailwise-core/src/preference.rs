//! User preferences: soft targets, hard bounds and factor weights.
//!
//! A [`UserPreference`] enumerates every recognised option with a documented
//! default. Callers edit their own copy between recommendation calls and pass
//! it by reference, so each call scores against an immutable snapshot.

use thiserror::Error;

use crate::{MAX_DIFFICULTY, MIN_DIFFICULTY, TerrainType};

const HOURS_PER_DAY: f64 = 24.0;

/// Relative importance of the four scoring factors.
///
/// Weights must be finite and non-negative; they need not sum to one.
///
/// # Examples
/// ```
/// use trailwise_core::FactorWeights;
///
/// let weights = FactorWeights { weather: 3.0, comfort: 1.0, ..FactorWeights::zero() };
/// let normalised = weights.normalised();
/// assert_eq!(normalised.weather, 0.75);
/// assert_eq!(normalised.length, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FactorWeights {
    /// Weight of the weather sub-score.
    pub weather: f64,
    /// Weight of the difficulty sub-score.
    pub difficulty: f64,
    /// Weight of the length sub-score.
    pub length: f64,
    /// Weight of the comfort sub-score.
    pub comfort: f64,
}

impl FactorWeights {
    /// All four weights set to `1.0`.
    #[must_use]
    pub const fn uniform() -> Self {
        Self {
            weather: 1.0,
            difficulty: 1.0,
            length: 1.0,
            comfort: 1.0,
        }
    }

    /// All four weights set to `0.0`.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            weather: 0.0,
            difficulty: 0.0,
            length: 0.0,
            comfort: 0.0,
        }
    }

    fn named(self) -> [(&'static str, f64); 4] {
        [
            ("weather", self.weather),
            ("difficulty", self.difficulty),
            ("length", self.length),
            ("comfort", self.comfort),
        ]
    }

    /// Check every weight is finite and non-negative.
    ///
    /// # Errors
    /// Returns [`PreferenceError::InvalidWeight`] naming the first offending
    /// factor.
    pub fn validate(self) -> Result<Self, PreferenceError> {
        match self
            .named()
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((factor, value)) => Err(PreferenceError::InvalidWeight { factor, value }),
            None => Ok(self),
        }
    }

    /// Scale the weights so they sum to one.
    ///
    /// When every weight is zero the factors are weighted equally.
    #[expect(
        clippy::float_arithmetic,
        reason = "normalisation divides each weight by the total"
    )]
    #[must_use]
    pub fn normalised(self) -> NormalisedWeights {
        let total = self.weather + self.difficulty + self.length + self.comfort;
        if !total.is_finite() || total <= 0.0 {
            return NormalisedWeights {
                weather: 0.25,
                difficulty: 0.25,
                length: 0.25,
                comfort: 0.25,
            };
        }
        NormalisedWeights {
            weather: self.weather / total,
            difficulty: self.difficulty / total,
            length: self.length / total,
            comfort: self.comfort / total,
        }
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self::uniform()
    }
}

/// Factor weights scaled to sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalisedWeights {
    /// Share of the weather sub-score.
    pub weather: f64,
    /// Share of the difficulty sub-score.
    pub difficulty: f64,
    /// Share of the length sub-score.
    pub length: f64,
    /// Share of the comfort sub-score.
    pub comfort: f64,
}

/// A user's trail and weather preferences.
///
/// `max_difficulty` and `max_length_km` are hard constraints. The optional
/// bounds (`min_difficulty`, `min_length_km`, `max_elevation_gain_m`,
/// `preferred_regions`, `preferred_terrains`) are also hard constraints but
/// their defaults accept every trail.
///
/// # Examples
/// ```
/// use trailwise_core::UserPreference;
///
/// let preference = UserPreference {
///     max_difficulty: 3,
///     max_length_km: 10.0,
///     ..UserPreference::default()
/// };
/// assert!(preference.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct UserPreference {
    /// Ideal mean temperature in °C.
    pub preferred_temperature: f64,
    /// Highest comfortable mean daily precipitation in millimetres.
    pub max_precipitation: f64,
    /// Hardest acceptable difficulty grade.
    pub max_difficulty: u8,
    /// Longest acceptable trail in kilometres.
    pub max_length_km: f64,
    /// Easiest acceptable difficulty grade.
    pub min_difficulty: u8,
    /// Shortest acceptable trail in kilometres.
    pub min_length_km: f64,
    /// Largest acceptable ascent in metres, if bounded.
    pub max_elevation_gain_m: Option<f64>,
    /// Regions to restrict to; empty accepts any region.
    pub preferred_regions: Vec<String>,
    /// Terrains to restrict to; empty accepts any terrain.
    pub preferred_terrains: Vec<TerrainType>,
    /// Tags a trail must share at least one of; empty accepts any trail.
    pub preferred_tags: Vec<String>,
    /// Fewest mean daily sunshine hours acceptable at the trail's location.
    pub min_sunshine_hours: Option<f64>,
    /// Relative importance of each scoring factor.
    pub factor_weights: FactorWeights,
}

impl Default for UserPreference {
    fn default() -> Self {
        Self {
            preferred_temperature: 20.0,
            max_precipitation: 5.0,
            max_difficulty: MAX_DIFFICULTY,
            max_length_km: 50.0,
            min_difficulty: MIN_DIFFICULTY,
            min_length_km: 0.0,
            max_elevation_gain_m: None,
            preferred_regions: Vec::new(),
            preferred_terrains: Vec::new(),
            preferred_tags: Vec::new(),
            min_sunshine_hours: None,
            factor_weights: FactorWeights::default(),
        }
    }
}

impl UserPreference {
    /// Check the preference is internally consistent.
    ///
    /// # Errors
    /// Returns [`PreferenceError`] describing the first invalid option.
    pub fn validate(&self) -> Result<(), PreferenceError> {
        if !self.preferred_temperature.is_finite() {
            return Err(PreferenceError::NonFiniteTemperature);
        }
        if !self.max_precipitation.is_finite() || self.max_precipitation < 0.0 {
            return Err(PreferenceError::InvalidMaxPrecipitation {
                value: self.max_precipitation,
            });
        }
        for (field, value) in [
            ("max_difficulty", self.max_difficulty),
            ("min_difficulty", self.min_difficulty),
        ] {
            if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&value) {
                return Err(PreferenceError::DifficultyOutOfRange { field, value });
            }
        }
        if self.min_difficulty > self.max_difficulty {
            return Err(PreferenceError::DifficultyBoundsInverted {
                min: self.min_difficulty,
                max: self.max_difficulty,
            });
        }
        if !self.max_length_km.is_finite() || self.max_length_km <= 0.0 {
            return Err(PreferenceError::InvalidMaxLength {
                value: self.max_length_km,
            });
        }
        if !self.min_length_km.is_finite()
            || self.min_length_km < 0.0
            || self.min_length_km > self.max_length_km
        {
            return Err(PreferenceError::InvalidMinLength {
                value: self.min_length_km,
                max: self.max_length_km,
            });
        }
        if let Some(limit) = self.max_elevation_gain_m
            && (!limit.is_finite() || limit < 0.0)
        {
            return Err(PreferenceError::InvalidElevationLimit { value: limit });
        }
        if let Some(hours) = self.min_sunshine_hours
            && !(0.0..=HOURS_PER_DAY).contains(&hours)
        {
            return Err(PreferenceError::InvalidSunshineMinimum { value: hours });
        }
        self.factor_weights.validate()?;
        Ok(())
    }
}

/// Reasons a [`UserPreference`] cannot be scored against.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreferenceError {
    /// The preferred temperature was NaN or infinite.
    #[error("preferred temperature must be finite")]
    NonFiniteTemperature,
    /// Maximum precipitation was negative or not finite.
    #[error("max precipitation must be a non-negative number, got {value}")]
    InvalidMaxPrecipitation {
        /// Rejected value.
        value: f64,
    },
    /// A difficulty bound fell outside `1..=5`.
    #[error("{field} must be between 1 and 5, got {value}")]
    DifficultyOutOfRange {
        /// Name of the offending option.
        field: &'static str,
        /// Rejected value.
        value: u8,
    },
    /// The minimum difficulty exceeded the maximum.
    #[error("min difficulty {min} exceeds max difficulty {max}")]
    DifficultyBoundsInverted {
        /// Configured minimum.
        min: u8,
        /// Configured maximum.
        max: u8,
    },
    /// Maximum length was zero, negative or not finite.
    #[error("max length must be positive, got {value} km")]
    InvalidMaxLength {
        /// Rejected value.
        value: f64,
    },
    /// Minimum length was negative, not finite or above the maximum.
    #[error("min length {value} km must be between 0 and max length {max} km")]
    InvalidMinLength {
        /// Rejected value.
        value: f64,
        /// Configured maximum length.
        max: f64,
    },
    /// The elevation limit was negative or not finite.
    #[error("max elevation gain must be a non-negative number, got {value} m")]
    InvalidElevationLimit {
        /// Rejected value.
        value: f64,
    },
    /// The sunshine minimum fell outside `0..=24` hours.
    #[error("min sunshine must be between 0 and 24 hours, got {value}")]
    InvalidSunshineMinimum {
        /// Rejected value.
        value: f64,
    },
    /// A factor weight was negative or not finite.
    #[error("weight for {factor} must be a non-negative number, got {value}")]
    InvalidWeight {
        /// Factor name.
        factor: &'static str,
        /// Rejected value.
        value: f64,
    },
}
