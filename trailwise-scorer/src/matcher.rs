//! Scoring a trail and its weather against a user's preferences.

use trailwise_core::{ConstraintViolation, SubScores, TrailRecord, UserPreference};

use crate::{ConfigError, MatcherConfig, WeatherStatistics};

const FULL_SCORE: f64 = 100.0;

/// Result of matching one trail against a preference.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// Weighted score in `0..=100`.
    pub score: f64,
    /// The four sub-scores the weighted score combines.
    pub sub_scores: SubScores,
    /// True when no hard constraint is violated.
    pub matched: bool,
    /// Hard constraints the trail failed.
    pub violations: Vec<ConstraintViolation>,
}

/// Combines hard constraints and weighted soft scores.
///
/// The matcher assumes the preference has been validated; degenerate values
/// such as a zero maximum score zero rather than dividing by zero.
///
/// # Examples
/// ```
/// use trailwise_core::UserPreference;
/// use trailwise_core::test_support::{trail, weather_series, ymd};
/// use trailwise_scorer::{ComfortIndexCalculator, PreferenceMatcher, WeatherStatistics};
///
/// let history = weather_series("TATRY", ymd(2023, 7, 1), 7, 20.0, 0.0);
/// let stats = WeatherStatistics::compute("TATRY", &history, &ComfortIndexCalculator::default())
///     .expect("history is non-empty");
/// let preference = UserPreference { max_length_km: 10.0, ..UserPreference::default() };
///
/// let outcome = PreferenceMatcher::default().evaluate(&trail("T1", "TATRY", 12.0, 2), &stats, &preference);
/// assert!(!outcome.matched);
/// assert_eq!(outcome.sub_scores.length, 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceMatcher {
    config: MatcherConfig,
}

impl PreferenceMatcher {
    /// Build a matcher from validated coefficients.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the coefficients are invalid.
    pub fn new(config: MatcherConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Coefficients in use.
    #[must_use]
    pub const fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Hard constraints `trail` violates under `preference`.
    #[must_use]
    pub fn violations(
        &self,
        trail: &TrailRecord,
        preference: &UserPreference,
    ) -> Vec<ConstraintViolation> {
        let mut violations = Vec::new();
        let difficulty = trail.difficulty();
        if difficulty > preference.max_difficulty {
            violations.push(ConstraintViolation::DifficultyAboveMax {
                difficulty,
                max: preference.max_difficulty,
            });
        }
        if difficulty < preference.min_difficulty {
            violations.push(ConstraintViolation::DifficultyBelowMin {
                difficulty,
                min: preference.min_difficulty,
            });
        }
        let length_km = trail.length_km();
        if length_km > preference.max_length_km {
            violations.push(ConstraintViolation::LengthAboveMax {
                length_km,
                max_km: preference.max_length_km,
            });
        }
        if length_km < preference.min_length_km {
            violations.push(ConstraintViolation::LengthBelowMin {
                length_km,
                min_km: preference.min_length_km,
            });
        }
        if let Some(max_m) = preference.max_elevation_gain_m
            && trail.elevation_gain_m() > max_m
        {
            violations.push(ConstraintViolation::ElevationAboveMax {
                elevation_gain_m: trail.elevation_gain_m(),
                max_m,
            });
        }
        if !preference.preferred_regions.is_empty()
            && !preference
                .preferred_regions
                .iter()
                .any(|region| region.eq_ignore_ascii_case(trail.region()))
        {
            violations.push(ConstraintViolation::RegionNotPreferred {
                region: trail.region().to_owned(),
            });
        }
        if !preference.preferred_terrains.is_empty()
            && !preference.preferred_terrains.contains(&trail.terrain())
        {
            violations.push(ConstraintViolation::TerrainNotPreferred {
                terrain: trail.terrain(),
            });
        }
        if !preference.preferred_tags.is_empty()
            && !preference.preferred_tags.iter().any(|tag| trail.has_tag(tag))
        {
            violations.push(ConstraintViolation::TagsNotPreferred {
                tags: trail.tags().iter().cloned().collect(),
            });
        }
        violations
    }

    /// Fit of the location's temperature and precipitation, `0..=100`.
    #[expect(
        clippy::float_arithmetic,
        reason = "weather fit blends two linear closeness measures"
    )]
    #[must_use]
    pub fn weather_score(&self, stats: &WeatherStatistics, preference: &UserPreference) -> f64 {
        let temperature_closeness = (1.0
            - (stats.mean_temperature_c - preference.preferred_temperature).abs()
                / self.config.temperature_tolerance_c)
            .max(0.0);
        let precipitation = stats.mean_daily_precipitation_mm;
        let precipitation_fit = if preference.max_precipitation <= 0.0 {
            if precipitation <= 0.0 { 1.0 } else { 0.0 }
        } else {
            (1.0 - precipitation / preference.max_precipitation).max(0.0)
        };
        let share = self.config.temperature_share;
        clamp_score(
            FULL_SCORE * (share * temperature_closeness + (1.0 - share) * precipitation_fit),
        )
    }

    /// Difficulty fit, `0..=100`; zero when the trail is too hard.
    #[expect(
        clippy::float_arithmetic,
        reason = "difficulty fit is a ratio of grades"
    )]
    #[must_use]
    pub fn difficulty_score(trail: &TrailRecord, preference: &UserPreference) -> f64 {
        let max = preference.max_difficulty;
        if max == 0 || trail.difficulty() > max {
            return 0.0;
        }
        clamp_score(FULL_SCORE * f64::from(trail.difficulty()) / f64::from(max))
    }

    /// Length fit, `0..=100`; zero when the trail is too long.
    #[expect(
        clippy::float_arithmetic,
        reason = "length fit is a ratio of distances"
    )]
    #[must_use]
    pub fn length_score(trail: &TrailRecord, preference: &UserPreference) -> f64 {
        let max = preference.max_length_km;
        if !max.is_finite() || max <= 0.0 || trail.length_km() > max {
            return 0.0;
        }
        clamp_score(FULL_SCORE * trail.length_km() / max)
    }

    /// All four sub-scores.
    #[must_use]
    pub fn sub_scores(
        &self,
        trail: &TrailRecord,
        stats: &WeatherStatistics,
        preference: &UserPreference,
    ) -> SubScores {
        SubScores {
            weather: self.weather_score(stats, preference),
            difficulty: Self::difficulty_score(trail, preference),
            length: Self::length_score(trail, preference),
            comfort: clamp_score(stats.mean_comfort_index),
        }
    }

    /// Score `trail` and check its hard constraints.
    ///
    /// Unmatched trails still receive a computed score.
    #[expect(
        clippy::float_arithmetic,
        reason = "overall score is a weighted sum of sub-scores"
    )]
    #[must_use]
    pub fn evaluate(
        &self,
        trail: &TrailRecord,
        stats: &WeatherStatistics,
        preference: &UserPreference,
    ) -> MatchOutcome {
        let sub_scores = self.sub_scores(trail, stats, preference);
        let w = preference.factor_weights.normalised();
        let score = clamp_score(
            w.weather * sub_scores.weather
                + w.difficulty * sub_scores.difficulty
                + w.length * sub_scores.length
                + w.comfort * sub_scores.comfort,
        );
        let mut violations = self.violations(trail, preference);
        if let Some(min_hours) = preference.min_sunshine_hours
            && stats.mean_sunshine_hours < min_hours
        {
            violations.push(ConstraintViolation::SunshineBelowMin {
                sunshine_hours: stats.mean_sunshine_hours,
                min_hours,
            });
        }
        MatchOutcome {
            score,
            sub_scores,
            matched: violations.is_empty(),
            violations,
        }
    }
}

fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, FULL_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use trailwise_core::test_support::{trail, trail_with, weather_series, ymd};
    use trailwise_core::{FactorWeights, TerrainType};

    use crate::ComfortIndexCalculator;

    fn stats(avg_temp_c: f64, precipitation_mm: f64) -> WeatherStatistics {
        let records = weather_series("TATRY", ymd(2023, 7, 1), 10, avg_temp_c, precipitation_mm);
        WeatherStatistics::compute("TATRY", &records, &ComfortIndexCalculator::default())
            .expect("non-empty history")
    }

    #[fixture]
    fn matcher() -> PreferenceMatcher {
        PreferenceMatcher::default()
    }

    #[fixture]
    fn preference() -> UserPreference {
        UserPreference {
            preferred_temperature: 20.0,
            max_precipitation: 5.0,
            max_difficulty: 3,
            max_length_km: 10.0,
            ..UserPreference::default()
        }
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "assertions compare with a tolerance")]
    fn scores_matching_trail_in_upper_half(matcher: PreferenceMatcher, preference: UserPreference) {
        let outcome = matcher.evaluate(&trail("T1", "TATRY", 7.8, 2), &stats(22.0, 0.0), &preference);
        assert!(outcome.matched);
        assert!(outcome.violations.is_empty());
        assert!((outcome.sub_scores.weather - 88.0).abs() < 1e-9);
        assert!((outcome.sub_scores.length - 78.0).abs() < 1e-9);
        assert!(outcome.score > 50.0, "score {} should be in upper half", outcome.score);
    }

    #[rstest]
    fn reports_every_violation(matcher: PreferenceMatcher) {
        let preference = UserPreference {
            max_difficulty: 3,
            max_length_km: 10.0,
            min_length_km: 2.0,
            max_elevation_gain_m: Some(500.0),
            preferred_regions: vec!["bieszczady".into()],
            preferred_terrains: vec![TerrainType::Forest],
            ..UserPreference::default()
        };
        let violations = matcher.violations(&trail("T1", "TATRY", 12.0, 4), &preference);
        assert_eq!(
            violations,
            vec![
                ConstraintViolation::DifficultyAboveMax { difficulty: 4, max: 3 },
                ConstraintViolation::LengthAboveMax { length_km: 12.0, max_km: 10.0 },
                ConstraintViolation::ElevationAboveMax { elevation_gain_m: 1200.0, max_m: 500.0 },
                ConstraintViolation::RegionNotPreferred { region: "TATRY".into() },
                ConstraintViolation::TerrainNotPreferred { terrain: TerrainType::Mountain },
            ]
        );
    }

    #[rstest]
    fn region_preference_ignores_case(matcher: PreferenceMatcher, mut preference: UserPreference) {
        preference.preferred_regions = vec!["tatry".into()];
        assert!(matcher.violations(&trail("T1", "TATRY", 5.0, 1), &preference).is_empty());
    }

    #[rstest]
    #[case(&["Lake", "forest"], true)]
    #[case(&["viewpoint"], false)]
    #[case(&[], false)]
    fn tag_preference_needs_one_shared_tag(
        matcher: PreferenceMatcher,
        mut preference: UserPreference,
        #[case] tags: &[&str],
        #[case] expected: bool,
    ) {
        preference.preferred_tags = vec!["lake".into(), "waterfall".into()];
        let candidate = trail_with("T1", "TATRY", 6.0, 2, TerrainType::Lakeside, tags);
        let violations = matcher.violations(&candidate, &preference);
        assert_eq!(violations.is_empty(), expected, "{violations:?}");
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(8.0), true)]
    #[case(Some(8.5), false)]
    fn sunshine_minimum_checks_mean_hours(
        matcher: PreferenceMatcher,
        mut preference: UserPreference,
        #[case] min_hours: Option<f64>,
        #[case] expected: bool,
    ) {
        preference.min_sunshine_hours = min_hours;
        let outcome = matcher.evaluate(&trail("T1", "TATRY", 6.0, 2), &stats(20.0, 0.0), &preference);
        assert_eq!(outcome.matched, expected);
        if !expected {
            assert_eq!(
                outcome.violations,
                vec![ConstraintViolation::SunshineBelowMin {
                    sunshine_hours: 8.0,
                    min_hours: 8.5,
                }]
            );
        }
    }

    #[rstest]
    fn unmatched_trail_still_scores(matcher: PreferenceMatcher, preference: UserPreference) {
        let long = trail_with("T2", "TATRY", 15.5, 1, TerrainType::Forest, &[]);
        let outcome = matcher.evaluate(&long, &stats(20.0, 0.0), &preference);
        assert!(!outcome.matched);
        assert_eq!(outcome.sub_scores.length, 0.0);
        assert!(outcome.score > 0.0);
    }

    #[rstest]
    #[case(2, 3, 200.0 / 3.0)]
    #[case(3, 3, 100.0)]
    #[case(4, 3, 0.0)]
    #[expect(clippy::float_arithmetic, reason = "assertion compares with a tolerance")]
    fn difficulty_score_is_ratio_within_limit(
        mut preference: UserPreference,
        #[case] difficulty: u8,
        #[case] max: u8,
        #[case] expected: f64,
    ) {
        preference.max_difficulty = max;
        let score = PreferenceMatcher::difficulty_score(&trail("T1", "TATRY", 5.0, difficulty), &preference);
        assert!((score - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(0.0, 0.0, 100.0)]
    #[case(0.0, 0.5, 60.0)]
    #[case(5.0, 2.5, 80.0)]
    #[case(5.0, 10.0, 60.0)]
    #[expect(clippy::float_arithmetic, reason = "assertion compares with a tolerance")]
    fn weather_score_blends_temperature_and_rain(
        matcher: PreferenceMatcher,
        mut preference: UserPreference,
        #[case] max_precipitation: f64,
        #[case] daily_precipitation: f64,
        #[case] expected: f64,
    ) {
        preference.max_precipitation = max_precipitation;
        let score = matcher.weather_score(&stats(20.0, daily_precipitation), &preference);
        assert!((score - expected).abs() < 1e-9, "expected {expected}, got {score}");
    }

    #[rstest]
    fn zero_weights_average_sub_scores(matcher: PreferenceMatcher, mut preference: UserPreference) {
        preference.factor_weights = FactorWeights::zero();
        let zeroed = matcher.evaluate(&trail("T1", "TATRY", 7.8, 2), &stats(22.0, 0.0), &preference);
        preference.factor_weights = FactorWeights::uniform();
        let uniform = matcher.evaluate(&trail("T1", "TATRY", 7.8, 2), &stats(22.0, 0.0), &preference);
        assert_eq!(zeroed.score, uniform.score);
    }

    #[rstest]
    fn single_factor_weight_selects_that_score(matcher: PreferenceMatcher, mut preference: UserPreference) {
        preference.factor_weights = FactorWeights {
            length: 2.0,
            ..FactorWeights::zero()
        };
        let outcome = matcher.evaluate(&trail("T1", "TATRY", 5.0, 2), &stats(22.0, 0.0), &preference);
        assert_eq!(outcome.score, outcome.sub_scores.length);
    }
}
