//! Aggregate weather statistics for one location.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use log::debug;
use trailwise_core::{
    BestPeriod, ComfortSummary, DateWindow, WeatherConditions, WeatherHistory, WeatherRecord,
};

use crate::{ComfortIndexCalculator, StatisticsError};

/// Summary of a location's weather history.
///
/// Temperatures are °C, precipitation millimetres and cloud cover percent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeatherStatistics {
    /// Location key the statistics describe.
    pub location: String,
    /// Number of daily records aggregated.
    pub record_count: usize,
    /// Earliest observation date.
    pub first_date: NaiveDate,
    /// Latest observation date.
    pub last_date: NaiveDate,
    /// Mean of the daily average temperatures.
    pub mean_temperature_c: f64,
    /// Sum of daily precipitation.
    pub total_precipitation_mm: f64,
    /// Mean daily precipitation.
    pub mean_daily_precipitation_mm: f64,
    /// Mean daily sunshine hours.
    pub mean_sunshine_hours: f64,
    /// Mean daily cloud cover.
    pub mean_cloud_cover_pct: f64,
    /// Days classified as sunny.
    pub sunny_days: usize,
    /// Days classified as rainy.
    pub rainy_days: usize,
    /// Mean of the daily comfort indices.
    pub mean_comfort_index: f64,
    /// Calendar month with the highest mean comfort.
    pub best_period: BestPeriod,
}

#[derive(Default)]
struct Totals {
    count: usize,
    temperature: f64,
    precipitation: f64,
    sunshine: f64,
    cloud: f64,
    comfort: f64,
    sunny: usize,
    rainy: usize,
}

impl WeatherStatistics {
    /// Aggregate `records` for `location`.
    ///
    /// Records need not be sorted. The best period is the `(year, month)`
    /// with the highest mean comfort index; ties go to the earliest month.
    ///
    /// # Errors
    /// Returns [`StatisticsError::EmptyHistory`] when `records` is empty.
    ///
    /// # Examples
    /// ```
    /// use trailwise_core::test_support::{weather_series, ymd};
    /// use trailwise_scorer::{ComfortIndexCalculator, WeatherStatistics};
    ///
    /// let records = weather_series("TATRY", ymd(2023, 7, 1), 10, 22.0, 0.0);
    /// let stats = WeatherStatistics::compute("TATRY", &records, &ComfortIndexCalculator::default())
    ///     .expect("non-empty history");
    /// assert_eq!(stats.record_count, 10);
    /// assert_eq!(stats.mean_temperature_c, 22.0);
    /// assert_eq!((stats.best_period.year, stats.best_period.month), (2023, 7));
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "aggregation sums daily values"
    )]
    pub fn compute<'a, I>(
        location: &str,
        records: I,
        comfort: &ComfortIndexCalculator,
    ) -> Result<Self, StatisticsError>
    where
        I: IntoIterator<Item = &'a WeatherRecord>,
    {
        let mut totals = Totals::default();
        let mut months: BTreeMap<(i32, u32), (f64, usize)> = BTreeMap::new();
        let mut range: Option<(NaiveDate, NaiveDate)> = None;

        for record in records {
            let index = comfort.record_index(record);
            totals.count += 1;
            totals.temperature += record.avg_temp_c();
            totals.precipitation += record.precipitation_mm();
            totals.sunshine += record.sunshine_hours();
            totals.cloud += f64::from(record.cloud_cover_pct());
            totals.comfort += index;
            totals.sunny += usize::from(comfort.is_sunny_day(record));
            totals.rainy += usize::from(comfort.is_rainy_day(record));

            let date = record.date();
            let month = months.entry((date.year(), date.month())).or_default();
            month.0 += index;
            month.1 += 1;
            range = Some(range.map_or((date, date), |(lo, hi)| (lo.min(date), hi.max(date))));
        }

        let (Some((first_date, last_date)), Some(best_period)) = (range, best_month(&months))
        else {
            return Err(StatisticsError::EmptyHistory {
                location: location.to_owned(),
            });
        };

        let stats = Self {
            location: location.to_owned(),
            record_count: totals.count,
            first_date,
            last_date,
            mean_temperature_c: mean(totals.temperature, totals.count),
            total_precipitation_mm: totals.precipitation,
            mean_daily_precipitation_mm: mean(totals.precipitation, totals.count),
            mean_sunshine_hours: mean(totals.sunshine, totals.count),
            mean_cloud_cover_pct: mean(totals.cloud, totals.count),
            sunny_days: totals.sunny,
            rainy_days: totals.rainy,
            mean_comfort_index: mean(totals.comfort, totals.count),
            best_period,
        };
        debug!(
            "weather statistics for {location}: {} days, mean comfort {:.1}",
            stats.record_count, stats.mean_comfort_index
        );
        Ok(stats)
    }

    /// Aggregate every record `history` holds for `location`.
    ///
    /// # Errors
    /// Returns [`StatisticsError::EmptyHistory`] when the location has no
    /// records.
    pub fn for_location<H>(
        history: &H,
        location: &str,
        comfort: &ComfortIndexCalculator,
    ) -> Result<Self, StatisticsError>
    where
        H: WeatherHistory + ?Sized,
    {
        Self::compute(location, history.records_for(location), comfort)
    }

    /// Aggregate the records `history` holds for `location` inside `window`.
    ///
    /// # Errors
    /// Returns [`StatisticsError::EmptyHistory`] when no record falls inside
    /// the window.
    pub fn for_window<H>(
        history: &H,
        location: &str,
        window: DateWindow,
        comfort: &ComfortIndexCalculator,
    ) -> Result<Self, StatisticsError>
    where
        H: WeatherHistory + ?Sized,
    {
        Self::compute(
            location,
            history.records_within(location, window),
            comfort,
        )
    }

    /// Comfort figures for attaching to a recommendation.
    #[must_use]
    pub const fn comfort_summary(&self) -> ComfortSummary {
        ComfortSummary {
            mean_comfort_index: self.mean_comfort_index,
            sunny_days: self.sunny_days,
            rainy_days: self.rainy_days,
            best_period: self.best_period,
        }
    }

    /// Mean daily conditions over the history.
    #[must_use]
    pub const fn mean_conditions(&self) -> WeatherConditions {
        WeatherConditions {
            avg_temp_c: self.mean_temperature_c,
            precipitation_mm: self.mean_daily_precipitation_mm,
            cloud_cover_pct: self.mean_cloud_cover_pct,
            sunshine_hours: self.mean_sunshine_hours,
        }
    }
}

fn best_month(months: &BTreeMap<(i32, u32), (f64, usize)>) -> Option<BestPeriod> {
    let mut best: Option<BestPeriod> = None;
    for (&(year, month), &(sum, days)) in months {
        let candidate = BestPeriod {
            year,
            month,
            mean_comfort_index: mean(sum, days),
            days,
        };
        // Months iterate in calendar order, so only a strictly better mean
        // displaces the current best.
        if best.is_none_or(|b| candidate.mean_comfort_index > b.mean_comfort_index) {
            best = Some(candidate);
        }
    }
    best
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "means divide a sum by a day count far below 2^52"
)]
fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::collections::HashMap;
    use trailwise_core::WeatherArchive;
    use trailwise_core::test_support::{weather_day, weather_series, ymd};

    #[fixture]
    fn comfort() -> ComfortIndexCalculator {
        ComfortIndexCalculator::default()
    }

    #[rstest]
    fn empty_history_is_an_error(comfort: ComfortIndexCalculator) {
        let records: Vec<WeatherRecord> = Vec::new();
        let err = WeatherStatistics::compute("TATRY", &records, &comfort).expect_err("no records");
        assert_eq!(
            err,
            StatisticsError::EmptyHistory {
                location: "TATRY".into()
            }
        );
    }

    #[rstest]
    fn aggregates_daily_values(comfort: ComfortIndexCalculator) {
        let records = vec![
            weather_day("TATRY", ymd(2023, 7, 2), 20.0, 0.0),
            weather_day("TATRY", ymd(2023, 7, 1), 24.0, 3.0),
            weather_day("TATRY", ymd(2023, 7, 3), 16.0, 0.5),
        ];
        let stats = WeatherStatistics::compute("TATRY", &records, &comfort).expect("stats");
        assert_eq!(stats.record_count, 3);
        assert_eq!(stats.first_date, ymd(2023, 7, 1));
        assert_eq!(stats.last_date, ymd(2023, 7, 3));
        assert_eq!(stats.mean_temperature_c, 20.0);
        assert_eq!(stats.total_precipitation_mm, 3.5);
        assert_eq!(stats.rainy_days, 1);
        assert_eq!(stats.sunny_days, 3);
        assert_eq!(stats.mean_cloud_cover_pct, 20.0);
        assert_eq!(stats.mean_sunshine_hours, 8.0);
    }

    #[rstest]
    fn best_period_prefers_highest_mean_comfort(comfort: ComfortIndexCalculator) {
        let mut records = weather_series("TATRY", ymd(2023, 6, 1), 30, 10.0, 0.0);
        records.extend(weather_series("TATRY", ymd(2023, 7, 1), 31, 21.0, 0.0));
        records.extend(weather_series("TATRY", ymd(2023, 8, 1), 31, 28.0, 0.0));
        let stats = WeatherStatistics::compute("TATRY", &records, &comfort).expect("stats");
        assert_eq!((stats.best_period.year, stats.best_period.month), (2023, 7));
        assert_eq!(stats.best_period.days, 31);
    }

    #[rstest]
    fn best_period_ties_resolve_to_earliest_month(comfort: ComfortIndexCalculator) {
        let mut records = weather_series("TATRY", ymd(2022, 8, 1), 5, 21.0, 0.0);
        records.extend(weather_series("TATRY", ymd(2022, 7, 1), 5, 21.0, 0.0));
        let stats = WeatherStatistics::compute("TATRY", &records, &comfort).expect("stats");
        assert_eq!((stats.best_period.year, stats.best_period.month), (2022, 7));
    }

    #[rstest]
    fn window_restricts_records(comfort: ComfortIndexCalculator) {
        let archive = WeatherArchive::from_records(weather_series(
            "TATRY",
            ymd(2023, 7, 1),
            14,
            20.0,
            0.0,
        ));
        let window = DateWindow::new(ymd(2023, 7, 5), ymd(2023, 7, 11)).expect("window");
        let stats =
            WeatherStatistics::for_window(&archive, "TATRY", window, &comfort).expect("stats");
        assert_eq!(stats.record_count, 7);
        assert_eq!(stats.first_date, ymd(2023, 7, 5));

        let empty = DateWindow::single_day(ymd(2024, 1, 1));
        assert!(matches!(
            WeatherStatistics::for_window(&archive, "TATRY", empty, &comfort),
            Err(StatisticsError::EmptyHistory { .. })
        ));
    }

    #[rstest]
    fn reads_any_history(comfort: ComfortIndexCalculator) {
        let mut history = HashMap::new();
        history.insert(
            "MAZURY".to_owned(),
            weather_series("MAZURY", ymd(2023, 5, 1), 3, 15.0, 2.0),
        );
        let stats =
            WeatherStatistics::for_location(&history, "MAZURY", &comfort).expect("stats");
        assert_eq!(stats.rainy_days, 3);
        assert_eq!(stats.mean_daily_precipitation_mm, 2.0);
        let summary = stats.comfort_summary();
        assert_eq!(summary.rainy_days, 3);
        assert_eq!(summary.mean_comfort_index, stats.mean_comfort_index);
    }
}
