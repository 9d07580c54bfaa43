//! Tunable thresholds and coefficients for every scoring component.
//!
//! Each component owns one section of [`EngineConfig`]. Sections validate on
//! construction of the component that reads them, so an invalid value is
//! reported before any trail is scored.

use trailwise_core::{MAX_DIFFICULTY, MIN_DIFFICULTY, TerrainType};

use crate::ConfigError;

/// Configuration for the whole scoring pipeline.
///
/// With the `serde` feature every section defaults independently, so a JSON
/// file only needs to name the values it overrides.
///
/// # Examples
/// ```
/// use trailwise_scorer::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.pace.base_speed_kmh, 4.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct EngineConfig {
    /// Comfort index coefficients.
    pub comfort: ComfortConfig,
    /// Category thresholds.
    pub categories: CategoryConfig,
    /// Completion time model.
    pub pace: PaceConfig,
    /// Preference matching coefficients.
    pub matcher: MatcherConfig,
}

impl EngineConfig {
    /// Validate every section.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.comfort.validate()?;
        self.categories.validate()?;
        self.pace.validate()?;
        self.matcher.validate()
    }

    /// Parse a configuration from JSON and validate it.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys and
    /// any validation error otherwise.
    ///
    /// # Examples
    /// ```
    /// use trailwise_scorer::EngineConfig;
    ///
    /// let config = EngineConfig::from_json_str(r#"{"pace": {"base_speed_kmh": 5.0}}"#)
    ///     .expect("valid config");
    /// assert_eq!(config.pace.base_speed_kmh, 5.0);
    /// assert_eq!(config.pace.minutes_per_100m_gain, 10.0);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}

/// Coefficients of the comfort index.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct ComfortConfig {
    /// Lower edge of the ideal temperature band in °C.
    pub ideal_temp_low_c: f64,
    /// Upper edge of the ideal temperature band in °C.
    pub ideal_temp_high_c: f64,
    /// Points lost per degree outside the ideal band.
    pub temperature_penalty_per_degree: f64,
    /// Points lost per millimetre of precipitation.
    pub precipitation_penalty_per_mm: f64,
    /// Largest precipitation penalty.
    pub precipitation_penalty_cap: f64,
    /// Points lost per percent of cloud cover.
    pub cloud_penalty_per_percent: f64,
    /// Points gained per hour of sunshine.
    pub sunshine_bonus_per_hour: f64,
    /// Largest sunshine bonus.
    pub sunshine_bonus_cap: f64,
    /// Minimum sunshine for a sunny day.
    pub sunny_min_sunshine_hours: f64,
    /// Cloud cover a sunny day must stay below.
    pub sunny_max_cloud_cover_pct: f64,
    /// Precipitation a rainy day must exceed.
    pub rainy_min_precipitation_mm: f64,
}

impl Default for ComfortConfig {
    fn default() -> Self {
        Self {
            ideal_temp_low_c: 18.0,
            ideal_temp_high_c: 24.0,
            temperature_penalty_per_degree: 4.0,
            precipitation_penalty_per_mm: 10.0,
            precipitation_penalty_cap: 40.0,
            cloud_penalty_per_percent: 0.2,
            sunshine_bonus_per_hour: 2.0,
            sunshine_bonus_cap: 10.0,
            sunny_min_sunshine_hours: 6.0,
            sunny_max_cloud_cover_pct: 50.0,
            rainy_min_precipitation_mm: 1.0,
        }
    }
}

impl ComfortConfig {
    /// Check every coefficient is finite and non-negative and the ideal band
    /// is ordered.
    ///
    /// # Errors
    /// Returns [`ConfigError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite("comfort.ideal_temp_low_c", self.ideal_temp_low_c)?;
        require_finite("comfort.ideal_temp_high_c", self.ideal_temp_high_c)?;
        if self.ideal_temp_low_c > self.ideal_temp_high_c {
            return Err(ConfigError::InvertedIdealBand {
                low: self.ideal_temp_low_c,
                high: self.ideal_temp_high_c,
            });
        }
        for (field, value) in [
            (
                "comfort.temperature_penalty_per_degree",
                self.temperature_penalty_per_degree,
            ),
            (
                "comfort.precipitation_penalty_per_mm",
                self.precipitation_penalty_per_mm,
            ),
            (
                "comfort.precipitation_penalty_cap",
                self.precipitation_penalty_cap,
            ),
            (
                "comfort.cloud_penalty_per_percent",
                self.cloud_penalty_per_percent,
            ),
            (
                "comfort.sunshine_bonus_per_hour",
                self.sunshine_bonus_per_hour,
            ),
            ("comfort.sunshine_bonus_cap", self.sunshine_bonus_cap),
            (
                "comfort.sunny_min_sunshine_hours",
                self.sunny_min_sunshine_hours,
            ),
            (
                "comfort.sunny_max_cloud_cover_pct",
                self.sunny_max_cloud_cover_pct,
            ),
            (
                "comfort.rainy_min_precipitation_mm",
                self.rainy_min_precipitation_mm,
            ),
        ] {
            require_non_negative(field, value)?;
        }
        Ok(())
    }
}

/// Thresholds used to categorise trails.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct CategoryConfig {
    /// Lowest difficulty of an extreme trail.
    pub extreme_min_difficulty: u8,
    /// Ascent an extreme trail must exceed, in metres.
    pub extreme_min_elevation_gain_m: f64,
    /// Lowest difficulty of a sporty trail.
    pub sporty_min_difficulty: u8,
    /// Length a sporty trail must exceed, in kilometres.
    pub sporty_min_length_km: f64,
    /// Tags that mark a trail as scenic, compared ignoring ASCII case.
    pub scenic_tags: Vec<String>,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            extreme_min_difficulty: 4,
            extreme_min_elevation_gain_m: 800.0,
            sporty_min_difficulty: 3,
            sporty_min_length_km: 15.0,
            scenic_tags: ["waterfalls", "viewpoint", "lake", "panorama", "landmark"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl CategoryConfig {
    /// Check difficulty thresholds lie on the grade scale and distance
    /// thresholds are finite and non-negative.
    ///
    /// # Errors
    /// Returns [`ConfigError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            (
                "categories.extreme_min_difficulty",
                self.extreme_min_difficulty,
            ),
            ("categories.sporty_min_difficulty", self.sporty_min_difficulty),
        ] {
            if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&value) {
                return Err(ConfigError::DifficultyOutOfRange { field, value });
            }
        }
        require_non_negative(
            "categories.extreme_min_elevation_gain_m",
            self.extreme_min_elevation_gain_m,
        )?;
        require_non_negative("categories.sporty_min_length_km", self.sporty_min_length_km)
    }
}

/// Completion time model parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct PaceConfig {
    /// Walking speed on the flat in km/h.
    pub base_speed_kmh: f64,
    /// Minutes added per 100 m of ascent.
    pub minutes_per_100m_gain: f64,
    /// Multiplier per difficulty grade, easiest first.
    pub difficulty_multipliers: [f64; 5],
    /// Multiplier per terrain type.
    pub terrain_multipliers: TerrainMultipliers,
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self {
            base_speed_kmh: 4.0,
            minutes_per_100m_gain: 10.0,
            difficulty_multipliers: [1.0, 1.125, 1.25, 1.375, 1.5],
            terrain_multipliers: TerrainMultipliers::default(),
        }
    }
}

impl PaceConfig {
    /// Check the speed and multipliers are positive and the difficulty table
    /// never decreases.
    ///
    /// # Errors
    /// Returns [`ConfigError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("pace.base_speed_kmh", self.base_speed_kmh)?;
        require_non_negative("pace.minutes_per_100m_gain", self.minutes_per_100m_gain)?;
        for value in self.difficulty_multipliers {
            require_positive("pace.difficulty_multipliers", value)?;
        }
        let mut grade = MIN_DIFFICULTY;
        for pair in self.difficulty_multipliers.windows(2) {
            grade = grade.saturating_add(1);
            if let [lower, higher] = pair
                && higher < lower
            {
                return Err(ConfigError::DecreasingDifficultyTable { grade });
            }
        }
        for terrain in TerrainType::ALL {
            require_positive(
                "pace.terrain_multipliers",
                self.terrain_multipliers.get(terrain),
            )?;
        }
        Ok(())
    }
}

/// Pace multiplier for each terrain type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct TerrainMultipliers {
    /// Mountain terrain.
    pub mountain: f64,
    /// Lakeside terrain.
    pub lakeside: f64,
    /// Forest terrain.
    pub forest: f64,
    /// Urban terrain.
    pub urban: f64,
    /// Mixed terrain.
    pub mixed: f64,
}

impl Default for TerrainMultipliers {
    fn default() -> Self {
        Self {
            mountain: 1.2,
            lakeside: 1.0,
            forest: 1.1,
            urban: 0.9,
            mixed: 1.05,
        }
    }
}

impl TerrainMultipliers {
    /// Multiplier for `terrain`.
    #[must_use]
    pub const fn get(&self, terrain: TerrainType) -> f64 {
        match terrain {
            TerrainType::Mountain => self.mountain,
            TerrainType::Lakeside => self.lakeside,
            TerrainType::Forest => self.forest,
            TerrainType::Urban => self.urban,
            TerrainType::Mixed => self.mixed,
        }
    }
}

/// Coefficients of the weather sub-score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct MatcherConfig {
    /// Share of the weather sub-score given to temperature, `0..=1`.
    pub temperature_share: f64,
    /// Temperature distance in °C at which closeness reaches zero.
    pub temperature_tolerance_c: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            temperature_share: 0.6,
            temperature_tolerance_c: 10.0,
        }
    }
}

impl MatcherConfig {
    /// Check the share lies in `0..=1` and the tolerance is positive.
    ///
    /// # Errors
    /// Returns [`ConfigError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.temperature_share) {
            return Err(ConfigError::ShareOutOfRange {
                value: self.temperature_share,
            });
        }
        require_positive(
            "matcher.temperature_tolerance_c",
            self.temperature_tolerance_c,
        )
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}
