//! Read-only access to weather history grouped by location.
//!
//! The `WeatherHistory` trait is the seam between the engine and whatever
//! holds the weather records. [`WeatherArchive`] is the in-memory
//! implementation the loaders produce; plain maps of records implement the
//! trait too.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use chrono::NaiveDate;
use thiserror::Error;

use crate::WeatherRecord;

/// Look up weather records by location key.
///
/// Implementations must be pure lookups: repeated calls with the same key
/// return the same records in the same order.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use trailwise_core::{WeatherHistory, WeatherRecord};
///
/// let history: HashMap<String, Vec<WeatherRecord>> = HashMap::new();
/// assert!(history.records_for("TATRY").is_empty());
/// ```
pub trait WeatherHistory {
    /// Return every record for `location`, or an empty slice.
    fn records_for(&self, location: &str) -> &[WeatherRecord];

    /// Return the records for `location` that fall inside `window`.
    fn records_within(&self, location: &str, window: DateWindow) -> Vec<&WeatherRecord> {
        self.records_for(location)
            .iter()
            .filter(|record| window.contains(record.date()))
            .collect()
    }
}

impl<S: BuildHasher> WeatherHistory for HashMap<String, Vec<WeatherRecord>, S> {
    fn records_for(&self, location: &str) -> &[WeatherRecord] {
        self.get(location).map_or(&[], Vec::as_slice)
    }
}

impl WeatherHistory for BTreeMap<String, Vec<WeatherRecord>> {
    fn records_for(&self, location: &str) -> &[WeatherRecord] {
        self.get(location).map_or(&[], Vec::as_slice)
    }
}

/// Weather records grouped by location and sorted by date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trailwise_core::{WeatherArchive, WeatherDraft, WeatherHistory, WeatherRecord};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let day = |d| -> Result<WeatherRecord, Box<dyn std::error::Error>> {
///     Ok(WeatherRecord::new(WeatherDraft {
///         date: NaiveDate::from_ymd_opt(2023, 7, d).ok_or("invalid date")?,
///         location: "TATRY".into(),
///         avg_temp_c: 20.0,
///         min_temp_c: 12.0,
///         max_temp_c: 25.0,
///         precipitation_mm: 0.0,
///         sunshine_hours: 8.0,
///         cloud_cover_pct: 30,
///     })?)
/// };
/// let archive = WeatherArchive::from_records(vec![day(3)?, day(1)?]);
/// let dates: Vec<_> = archive.records_for("TATRY").iter().map(|r| r.date().to_string()).collect();
/// assert_eq!(dates, ["2023-07-01", "2023-07-03"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherArchive {
    by_location: BTreeMap<String, Vec<WeatherRecord>>,
}

impl WeatherArchive {
    /// Group records by location, sorting each series by date.
    #[must_use]
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = WeatherRecord>,
    {
        let mut by_location: BTreeMap<String, Vec<WeatherRecord>> = BTreeMap::new();
        for record in records {
            by_location
                .entry(record.location().to_owned())
                .or_default()
                .push(record);
        }
        for series in by_location.values_mut() {
            series.sort_by_key(WeatherRecord::date);
        }
        Self { by_location }
    }

    /// Location keys in ascending order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.by_location.keys().map(String::as_str)
    }

    /// Earliest and latest observation dates across all locations.
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self
            .by_location
            .values()
            .flat_map(|series| series.iter().map(WeatherRecord::date));
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), date| {
            (lo.min(date), hi.max(date))
        }))
    }

    /// Total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_location.values().map(Vec::len).sum()
    }

    /// Report whether the archive holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_location.values().all(Vec::is_empty)
    }
}

impl WeatherHistory for WeatherArchive {
    fn records_for(&self, location: &str) -> &[WeatherRecord] {
        self.by_location.get(location).map_or(&[], Vec::as_slice)
    }

    fn records_within(&self, location: &str, window: DateWindow) -> Vec<&WeatherRecord> {
        // Series are date-sorted, so the window is a contiguous slice.
        let series = self.records_for(location);
        let lo = series.partition_point(|r| r.date() < window.start());
        let hi = series.partition_point(|r| r.date() <= window.end());
        series.get(lo..hi).map_or_else(Vec::new, |s| s.iter().collect())
    }
}

impl FromIterator<WeatherRecord> for WeatherArchive {
    fn from_iter<I: IntoIterator<Item = WeatherRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

/// An inclusive range of calendar dates.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use trailwise_core::DateWindow;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let start = NaiveDate::from_ymd_opt(2023, 7, 1).ok_or("invalid date")?;
/// let end = NaiveDate::from_ymd_opt(2023, 7, 7).ok_or("invalid date")?;
/// let window = DateWindow::new(start, end)?;
/// assert_eq!(window.days().count(), 7);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

/// Errors returned by [`DateWindow::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateWindowError {
    /// The window ended before it started.
    #[error("date window ends ({end}) before it starts ({start})")]
    Inverted {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },
}

impl DateWindow {
    /// Build a window covering `start..=end`.
    ///
    /// # Errors
    /// Returns [`DateWindowError::Inverted`] when `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateWindowError> {
        if end < start {
            return Err(DateWindowError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// A window covering a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// First day of the window.
    #[must_use]
    pub const fn start(self) -> NaiveDate {
        self.start
    }

    /// Last day of the window.
    #[must_use]
    pub const fn end(self) -> NaiveDate {
        self.end
    }

    /// Report whether `date` lies inside the window.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterate over every day in the window.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WeatherDraft;
    use rstest::rstest;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, month, day).expect("valid date")
    }

    fn record(location: &str, on: NaiveDate) -> WeatherRecord {
        WeatherRecord::new(WeatherDraft {
            date: on,
            location: location.into(),
            avg_temp_c: 18.0,
            min_temp_c: 10.0,
            max_temp_c: 24.0,
            precipitation_mm: 0.0,
            sunshine_hours: 7.0,
            cloud_cover_pct: 40,
        })
        .expect("valid record")
    }

    #[rstest]
    fn archive_groups_and_sorts_by_date() {
        let archive = WeatherArchive::from_records(vec![
            record("TATRY", date(7, 3)),
            record("BIESZCZADY", date(7, 1)),
            record("TATRY", date(7, 1)),
        ]);
        assert_eq!(archive.len(), 2 + 1);
        assert_eq!(
            archive.locations().collect::<Vec<_>>(),
            vec!["BIESZCZADY", "TATRY"]
        );
        let tatry = archive.records_for("TATRY");
        assert_eq!(tatry.len(), 2);
        assert!(tatry.windows(2).all(|w| w[0].date() <= w[1].date()));
        assert!(archive.records_for("SUDETY").is_empty());
    }

    #[rstest]
    fn archive_reports_date_range() {
        let archive: WeatherArchive = vec![
            record("TATRY", date(7, 9)),
            record("BIESZCZADY", date(6, 30)),
        ]
        .into_iter()
        .collect();
        assert_eq!(archive.date_range(), Some((date(6, 30), date(7, 9))));
        assert_eq!(WeatherArchive::default().date_range(), None);
        assert!(WeatherArchive::default().is_empty());
    }

    #[rstest]
    fn windowed_lookup_is_inclusive() {
        let archive = WeatherArchive::from_records(
            (1..=10).map(|day| record("TATRY", date(7, day))),
        );
        let window = DateWindow::new(date(7, 3), date(7, 5)).expect("ordered window");
        let hits = archive.records_within("TATRY", window);
        assert_eq!(
            hits.iter().map(|r| r.date()).collect::<Vec<_>>(),
            vec![date(7, 3), date(7, 4), date(7, 5)]
        );
    }

    #[rstest]
    fn map_lookup_filters_window() {
        let mut map = HashMap::new();
        map.insert(
            "TATRY".to_owned(),
            vec![record("TATRY", date(7, 2)), record("TATRY", date(7, 8))],
        );
        let hits = map.records_within("TATRY", DateWindow::single_day(date(7, 8)));
        assert_eq!(hits.len(), 1);
    }

    #[rstest]
    fn window_rejects_inverted_bounds() {
        let err = DateWindow::new(date(7, 5), date(7, 1)).expect_err("inverted");
        assert!(matches!(err, DateWindowError::Inverted { .. }));
    }

    #[rstest]
    fn window_iterates_days() {
        let window = DateWindow::new(date(6, 29), date(7, 2)).expect("ordered window");
        assert_eq!(window.days().count(), 4);
        assert!(window.contains(date(7, 1)));
        assert!(!window.contains(date(7, 3)));
    }
}
