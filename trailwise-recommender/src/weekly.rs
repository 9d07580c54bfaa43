//! Seven-day plans built from single-day recommendations.

use chrono::{Days, NaiveDate};
use log::info;
use trailwise_core::{DateWindow, RecommendationResult, TrailRecord, UserPreference, WeatherHistory};

use crate::{RecommendError, RouteRecommender};

/// Number of days in a weekly plan.
pub const WEEK_DAYS: u64 = 7;

/// Default number of trails suggested per day.
pub const DEFAULT_PER_DAY: usize = 3;

/// Ranked trails for one calendar day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailyRecommendation {
    /// Day the recommendations apply to.
    pub date: NaiveDate,
    /// Best trails for the day, in ranking order.
    pub recommendations: Vec<RecommendationResult>,
}

impl RouteRecommender {
    /// Recommend up to `per_day` trails for each of the seven days starting
    /// at `start`, using only that day's weather.
    ///
    /// Trails whose location has no record for a given day are unmatched on
    /// that day. `per_day` of zero keeps every trail.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidPreference`] when the preference fails
    /// validation and [`RecommendError::DateOutOfRange`] when the week would
    /// run past the last representable date.
    ///
    /// # Examples
    /// ```
    /// use trailwise_core::{UserPreference, WeatherArchive};
    /// use trailwise_core::test_support::{trail, weather_series, ymd};
    /// use trailwise_recommender::RouteRecommender;
    ///
    /// let trails = vec![trail("T1", "TATRY", 6.0, 2)];
    /// let archive = WeatherArchive::from_records(weather_series("TATRY", ymd(2023, 7, 1), 7, 21.0, 0.0));
    /// let plan = RouteRecommender::new()
    ///     .recommend_weekly(&trails, &archive, &UserPreference::default(), ymd(2023, 7, 1), 3)
    ///     .expect("valid preference");
    /// assert_eq!(plan.len(), 7);
    /// assert!(plan.iter().all(|day| day.recommendations[0].matched));
    /// ```
    pub fn recommend_weekly<H>(
        &self,
        trails: &[TrailRecord],
        weather: &H,
        preference: &UserPreference,
        start: NaiveDate,
        per_day: usize,
    ) -> Result<Vec<DailyRecommendation>, RecommendError>
    where
        H: WeatherHistory + ?Sized,
    {
        preference.validate()?;
        let week = start
            .checked_add_days(Days::new(WEEK_DAYS.saturating_sub(1)))
            .and_then(|end| DateWindow::new(start, end).ok())
            .ok_or(RecommendError::DateOutOfRange { start })?;

        let plan = week
            .days()
            .map(|date| {
                self.recommend_in_window(
                    trails,
                    weather,
                    preference,
                    DateWindow::single_day(date),
                    Some(per_day),
                )
                .map(|recommendations| DailyRecommendation {
                    date,
                    recommendations,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        info!("built weekly plan starting {start} for {} trails", trails.len());
        Ok(plan)
    }
}
