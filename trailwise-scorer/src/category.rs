//! Rule-based trail categorisation.

use trailwise_core::{TrailCategory, TrailRecord};

use crate::{CategoryConfig, ConfigError};

/// Assigns each trail exactly one [`TrailCategory`].
///
/// Rules are checked in priority order: extreme, sporty, scenic, family.
///
/// # Examples
/// ```
/// use trailwise_core::{TrailCategory, test_support::trail};
/// use trailwise_scorer::TrailCategorizer;
///
/// let categorizer = TrailCategorizer::default();
/// assert_eq!(categorizer.categorize(&trail("T1", "TATRY", 3.0, 1)), TrailCategory::Family);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrailCategorizer {
    config: CategoryConfig,
}

impl TrailCategorizer {
    /// Build a categorizer from validated thresholds.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the thresholds are invalid.
    pub fn new(config: CategoryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Thresholds in use.
    #[must_use]
    pub const fn config(&self) -> &CategoryConfig {
        &self.config
    }

    /// Category of `trail`.
    #[must_use]
    pub fn categorize(&self, trail: &TrailRecord) -> TrailCategory {
        let c = &self.config;
        if trail.difficulty() >= c.extreme_min_difficulty
            && trail.elevation_gain_m() > c.extreme_min_elevation_gain_m
        {
            TrailCategory::Extreme
        } else if trail.difficulty() >= c.sporty_min_difficulty
            || trail.length_km() > c.sporty_min_length_km
        {
            TrailCategory::Sporty
        } else if c.scenic_tags.iter().any(|tag| trail.has_tag(tag)) {
            TrailCategory::Scenic
        } else {
            TrailCategory::Family
        }
    }
}
