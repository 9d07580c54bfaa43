//! The top-level recommendation entry point.

use std::collections::HashMap;

use log::{debug, info, warn};
use trailwise_core::{
    ConstraintViolation, DateWindow, RecommendationResult, TrailRecord, UserPreference,
    WeatherHistory,
};
use trailwise_scorer::{
    ComfortIndexCalculator, CompletionTimeEstimator, ConfigError, EngineConfig,
    PreferenceMatcher, StatisticsError, TrailCategorizer, WeatherStatistics,
};

use crate::{RecommendError, ranking};

type StatisticsByLocation = HashMap<String, Result<WeatherStatistics, StatisticsError>>;

/// Ranks trails against a user's preferences and weather history.
///
/// The recommender holds only validated configuration, so one instance can
/// serve any number of calls. Each call validates the preference snapshot,
/// computes weather statistics once per distinct location, scores every trail
/// and sorts the results.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use trailwise_core::UserPreference;
/// use trailwise_core::test_support::{trail, weather_series, ymd};
/// use trailwise_recommender::RouteRecommender;
///
/// let trails = vec![trail("T1", "TATRY", 7.8, 2), trail("T2", "BIESZCZADY", 15.5, 1)];
/// let mut weather = HashMap::new();
/// weather.insert("TATRY".to_owned(), weather_series("TATRY", ymd(2023, 7, 1), 30, 22.0, 0.0));
/// weather.insert(
///     "BIESZCZADY".to_owned(),
///     weather_series("BIESZCZADY", ymd(2023, 7, 1), 30, 20.0, 0.0),
/// );
/// let preference = UserPreference {
///     max_difficulty: 3,
///     max_length_km: 10.0,
///     ..UserPreference::default()
/// };
///
/// let ranked = RouteRecommender::new()
///     .recommend(&trails, &weather, &preference, None)
///     .expect("preference is valid");
/// assert_eq!(ranked[0].trail_id, "T1");
/// assert!(ranked[0].matched);
/// assert!(!ranked[1].matched);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteRecommender {
    comfort: ComfortIndexCalculator,
    categorizer: TrailCategorizer,
    estimator: CompletionTimeEstimator,
    matcher: PreferenceMatcher,
}

impl RouteRecommender {
    /// Construct a recommender using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a recommender with explicit configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when any section of `config` is invalid.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        let EngineConfig {
            comfort,
            categories,
            pace,
            matcher,
        } = config;
        Ok(Self {
            comfort: ComfortIndexCalculator::new(comfort)?,
            categorizer: TrailCategorizer::new(categories)?,
            estimator: CompletionTimeEstimator::new(pace)?,
            matcher: PreferenceMatcher::new(matcher)?,
        })
    }

    /// Comfort calculator in use.
    #[must_use]
    pub const fn comfort(&self) -> &ComfortIndexCalculator {
        &self.comfort
    }

    /// Categorizer in use.
    #[must_use]
    pub const fn categorizer(&self) -> &TrailCategorizer {
        &self.categorizer
    }

    /// Completion estimator in use.
    #[must_use]
    pub const fn estimator(&self) -> &CompletionTimeEstimator {
        &self.estimator
    }

    /// Preference matcher in use.
    #[must_use]
    pub const fn matcher(&self) -> &PreferenceMatcher {
        &self.matcher
    }

    /// Rank `trails` against `preference` using each trail's full weather
    /// history.
    ///
    /// Matched trails rank first, then by descending score, ascending
    /// completion time and ascending identifier. `top_n` of `None` or
    /// `Some(0)` returns every trail.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidPreference`] when the preference fails
    /// validation. Trails without weather history are returned unmatched with
    /// a zero score instead of failing the call.
    pub fn recommend<H>(
        &self,
        trails: &[TrailRecord],
        weather: &H,
        preference: &UserPreference,
        top_n: Option<usize>,
    ) -> Result<Vec<RecommendationResult>, RecommendError>
    where
        H: WeatherHistory + ?Sized,
    {
        preference.validate()?;
        let stats = self.statistics_by_location(trails, |location| {
            WeatherStatistics::for_location(weather, location, &self.comfort)
        });
        Ok(self.rank_trails(trails, &stats, preference, top_n))
    }

    /// Rank `trails` using only weather observed inside `window`.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidPreference`] when the preference fails
    /// validation.
    pub fn recommend_in_window<H>(
        &self,
        trails: &[TrailRecord],
        weather: &H,
        preference: &UserPreference,
        window: DateWindow,
        top_n: Option<usize>,
    ) -> Result<Vec<RecommendationResult>, RecommendError>
    where
        H: WeatherHistory + ?Sized,
    {
        preference.validate()?;
        let stats = self.statistics_by_location(trails, |location| {
            WeatherStatistics::for_window(weather, location, window, &self.comfort)
        });
        Ok(self.rank_trails(trails, &stats, preference, top_n))
    }

    /// Score one trail given its location's statistics.
    ///
    /// A missing history yields an unmatched result with a zero score, no
    /// sub-scores and a [`ConstraintViolation::NoWeatherHistory`] entry.
    #[must_use]
    pub fn assess(
        &self,
        trail: &TrailRecord,
        stats: Result<&WeatherStatistics, &StatisticsError>,
        preference: &UserPreference,
    ) -> RecommendationResult {
        let category = self.categorizer.categorize(trail);
        let estimated_completion_hours = self.estimator.estimate_hours(trail);
        let result = match stats {
            Ok(summary) => {
                let outcome = self.matcher.evaluate(trail, summary, preference);
                RecommendationResult {
                    trail_id: trail.id().to_owned(),
                    trail_name: trail.name().to_owned(),
                    region: trail.region().to_owned(),
                    overall_score: outcome.score,
                    category,
                    estimated_completion_hours,
                    comfort: Some(summary.comfort_summary()),
                    sub_scores: Some(outcome.sub_scores),
                    matched: outcome.matched,
                    violations: outcome.violations,
                }
            }
            Err(StatisticsError::EmptyHistory { location }) => {
                let mut violations = self.matcher.violations(trail, preference);
                violations.push(ConstraintViolation::NoWeatherHistory {
                    location: location.clone(),
                });
                RecommendationResult {
                    trail_id: trail.id().to_owned(),
                    trail_name: trail.name().to_owned(),
                    region: trail.region().to_owned(),
                    overall_score: 0.0,
                    category,
                    estimated_completion_hours,
                    comfort: None,
                    sub_scores: None,
                    matched: false,
                    violations,
                }
            }
        };
        debug!(
            "trail {} scored {:.1} (matched: {}, category: {})",
            result.trail_id, result.overall_score, result.matched, result.category
        );
        result
    }

    fn statistics_by_location<F>(&self, trails: &[TrailRecord], compute: F) -> StatisticsByLocation
    where
        F: Fn(&str) -> Result<WeatherStatistics, StatisticsError>,
    {
        let mut stats = StatisticsByLocation::new();
        for trail in trails {
            if stats.contains_key(trail.region()) {
                continue;
            }
            let outcome = compute(trail.region());
            if let Err(err) = &outcome {
                warn!("{err}; its trails will be ranked as unmatched");
            }
            stats.insert(trail.region().to_owned(), outcome);
        }
        stats
    }

    fn rank_trails(
        &self,
        trails: &[TrailRecord],
        stats: &StatisticsByLocation,
        preference: &UserPreference,
        top_n: Option<usize>,
    ) -> Vec<RecommendationResult> {
        let mut results = self.score_all(trails, stats, preference);
        let matched = results.iter().filter(|r| r.matched).count();
        ranking::rank(&mut results, top_n);
        info!(
            "ranked {} trails ({matched} matched), returning {}",
            trails.len(),
            results.len()
        );
        results
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all(
        &self,
        trails: &[TrailRecord],
        stats: &StatisticsByLocation,
        preference: &UserPreference,
    ) -> Vec<RecommendationResult> {
        trails
            .iter()
            .map(|trail| self.assess_with(trail, stats, preference))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn score_all(
        &self,
        trails: &[TrailRecord],
        stats: &StatisticsByLocation,
        preference: &UserPreference,
    ) -> Vec<RecommendationResult> {
        use rayon::prelude::*;

        trails
            .par_iter()
            .map(|trail| self.assess_with(trail, stats, preference))
            .collect()
    }

    fn assess_with(
        &self,
        trail: &TrailRecord,
        stats: &StatisticsByLocation,
        preference: &UserPreference,
    ) -> RecommendationResult {
        match stats.get(trail.region()) {
            Some(outcome) => self.assess(trail, outcome.as_ref(), preference),
            None => self.assess(
                trail,
                Err(&StatisticsError::EmptyHistory {
                    location: trail.region().to_owned(),
                }),
                preference,
            ),
        }
    }
}
