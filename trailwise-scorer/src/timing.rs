//! Completion time estimates using a Naismith-style walking model.

use std::time::Duration;

use trailwise_core::TrailRecord;

use crate::{ConfigError, PaceConfig};

/// Estimates how long a trail takes to walk.
///
/// Base time is distance over flat speed plus a fixed allowance per 100 m of
/// ascent; the result is scaled by difficulty and terrain multipliers.
///
/// # Examples
/// ```
/// use trailwise_core::test_support::trail;
/// use trailwise_scorer::CompletionTimeEstimator;
///
/// let estimator = CompletionTimeEstimator::default();
/// // 8 km with 800 m ascent, grade 1, mountain terrain.
/// let hours = estimator.estimate_hours(&trail("T1", "TATRY", 8.0, 1));
/// assert!((hours - 4.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionTimeEstimator {
    config: PaceConfig,
}

impl CompletionTimeEstimator {
    /// Build an estimator from validated pace parameters.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a speed or multiplier is not positive or
    /// the difficulty table decreases.
    pub fn new(config: PaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parameters in use.
    #[must_use]
    pub const fn config(&self) -> &PaceConfig {
        &self.config
    }

    /// Multiplier for a difficulty grade; grades past the table use its last
    /// entry.
    #[must_use]
    pub fn difficulty_multiplier(&self, difficulty: u8) -> f64 {
        let table = &self.config.difficulty_multipliers;
        let index = usize::from(difficulty.saturating_sub(1));
        table
            .get(index)
            .or_else(|| table.last())
            .copied()
            .unwrap_or(1.0)
    }

    /// Estimated hours to complete `trail`.
    #[expect(
        clippy::float_arithmetic,
        reason = "walking time model combines distance, ascent and multipliers"
    )]
    #[must_use]
    pub fn estimate_hours(&self, trail: &TrailRecord) -> f64 {
        let c = &self.config;
        let flat_hours = trail.length_km() / c.base_speed_kmh;
        let climb_hours = trail.elevation_gain_m() / 100.0 * c.minutes_per_100m_gain / 60.0;
        (flat_hours + climb_hours)
            * self.difficulty_multiplier(trail.difficulty())
            * c.terrain_multipliers.get(trail.terrain())
    }

    /// Estimated completion time rounded to whole seconds.
    #[expect(
        clippy::float_arithmetic,
        reason = "hours are converted to seconds before rounding"
    )]
    #[must_use]
    pub fn estimate(&self, trail: &TrailRecord) -> Duration {
        Duration::try_from_secs_f64((self.estimate_hours(trail) * 3600.0).round())
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use trailwise_core::TerrainType;
    use trailwise_core::test_support::trail_with;

    #[fixture]
    fn estimator() -> CompletionTimeEstimator {
        CompletionTimeEstimator::default()
    }

    #[rstest]
    #[case(TerrainType::Lakeside, 2.0)]
    #[case(TerrainType::Urban, 1.8)]
    #[case(TerrainType::Forest, 2.2)]
    #[case(TerrainType::Mixed, 2.1)]
    #[case(TerrainType::Mountain, 2.4)]
    #[expect(clippy::float_arithmetic, reason = "assertion compares with a tolerance")]
    fn applies_terrain_multiplier(
        estimator: CompletionTimeEstimator,
        #[case] terrain: TerrainType,
        #[case] expected: f64,
    ) {
        let record = trail_with("T1", "MAZURY", 8.0, 1, terrain, &[]);
        let hours = estimator.estimate_hours(&record);
        assert!((hours - expected).abs() < 1e-9, "expected {expected}, got {hours}");
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "assertion compares with a tolerance")]
    fn applies_difficulty_multiplier(estimator: CompletionTimeEstimator) {
        let record = trail_with("T1", "MAZURY", 8.0, 5, TerrainType::Lakeside, &[]);
        assert!((estimator.estimate_hours(&record) - 3.0).abs() < 1e-9);
    }

    #[rstest]
    fn rounds_duration_to_seconds(estimator: CompletionTimeEstimator) {
        let record = trail_with("T1", "MAZURY", 5.0, 1, TerrainType::Lakeside, &[]);
        assert_eq!(estimator.estimate(&record), Duration::from_secs(4500));
    }

    #[rstest]
    #[case(0, 1.0)]
    #[case(3, 1.25)]
    #[case(9, 1.5)]
    fn looks_up_difficulty_multiplier(
        estimator: CompletionTimeEstimator,
        #[case] grade: u8,
        #[case] expected: f64,
    ) {
        assert_eq!(estimator.difficulty_multiplier(grade), expected);
    }

    #[rstest]
    fn rejects_invalid_pace() {
        let result = CompletionTimeEstimator::new(PaceConfig {
            minutes_per_100m_gain: -5.0,
            ..PaceConfig::default()
        });
        assert!(matches!(result, Err(ConfigError::Negative { .. })));
    }
}
