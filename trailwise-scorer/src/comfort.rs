//! Comfort index: a single 0–100 figure for how pleasant a day is to walk.

use trailwise_core::{WeatherConditions, WeatherRecord};

use crate::{ComfortConfig, ConfigError};

/// Lowest comfort index.
pub const MIN_COMFORT: f64 = 0.0;
/// Highest comfort index.
pub const MAX_COMFORT: f64 = 100.0;

/// Derives comfort figures from daily or aggregate weather.
///
/// The index starts at 100, loses points for temperature outside the ideal
/// band, precipitation and cloud cover, gains a capped bonus for sunshine and
/// is clamped to `0..=100`.
///
/// # Examples
/// ```
/// use trailwise_core::WeatherConditions;
/// use trailwise_scorer::ComfortIndexCalculator;
///
/// let calculator = ComfortIndexCalculator::default();
/// let ideal = WeatherConditions {
///     avg_temp_c: 21.0,
///     precipitation_mm: 0.0,
///     cloud_cover_pct: 0.0,
///     sunshine_hours: 10.0,
/// };
/// assert_eq!(calculator.index(&ideal), 100.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComfortIndexCalculator {
    config: ComfortConfig,
}

impl ComfortIndexCalculator {
    /// Build a calculator from validated coefficients.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the coefficients are invalid.
    pub fn new(config: ComfortConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Coefficients in use.
    #[must_use]
    pub const fn config(&self) -> &ComfortConfig {
        &self.config
    }

    /// Comfort index of `conditions` in `0..=100`.
    ///
    /// Non-finite inputs score the minimum.
    #[expect(
        clippy::float_arithmetic,
        reason = "comfort index combines weighted penalties and bonuses"
    )]
    #[must_use]
    pub fn index(&self, conditions: &WeatherConditions) -> f64 {
        let fields = [
            conditions.avg_temp_c,
            conditions.precipitation_mm,
            conditions.cloud_cover_pct,
            conditions.sunshine_hours,
        ];
        if !fields.iter().all(|value| value.is_finite()) {
            return MIN_COMFORT;
        }
        let c = &self.config;
        let temp = conditions.avg_temp_c;
        let distance = if temp < c.ideal_temp_low_c {
            c.ideal_temp_low_c - temp
        } else if temp > c.ideal_temp_high_c {
            temp - c.ideal_temp_high_c
        } else {
            0.0
        };
        let temperature_penalty = distance * c.temperature_penalty_per_degree;
        let precipitation_penalty = (conditions.precipitation_mm.max(0.0)
            * c.precipitation_penalty_per_mm)
            .min(c.precipitation_penalty_cap);
        let cloud_penalty = conditions.cloud_cover_pct.max(0.0) * c.cloud_penalty_per_percent;
        let sunshine_bonus = (conditions.sunshine_hours.max(0.0) * c.sunshine_bonus_per_hour)
            .min(c.sunshine_bonus_cap);

        let raw = MAX_COMFORT - temperature_penalty - precipitation_penalty - cloud_penalty
            + sunshine_bonus;
        raw.clamp(MIN_COMFORT, MAX_COMFORT)
    }

    /// Comfort index of a single day.
    #[must_use]
    pub fn record_index(&self, record: &WeatherRecord) -> f64 {
        self.index(&record.conditions())
    }

    /// Report whether a day had plenty of sun and little cloud.
    #[must_use]
    pub fn is_sunny_day(&self, record: &WeatherRecord) -> bool {
        record.sunshine_hours() >= self.config.sunny_min_sunshine_hours
            && f64::from(record.cloud_cover_pct()) < self.config.sunny_max_cloud_cover_pct
    }

    /// Report whether a day had meaningful precipitation.
    #[must_use]
    pub fn is_rainy_day(&self, record: &WeatherRecord) -> bool {
        record.precipitation_mm() > self.config.rainy_min_precipitation_mm
    }
}
