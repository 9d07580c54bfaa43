//! Fixture builders shared by unit and behaviour tests.
//!
//! These panic on invalid input, so they are only compiled for tests or with
//! the `test-support` feature.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use geo::Coord;

use crate::{TerrainType, TrailDraft, TrailRecord, WeatherDraft, WeatherRecord};

/// Build a mountain trail with no tags and 100 m of ascent per kilometre.
///
/// # Panics
/// Panics when the attributes fail validation.
#[expect(clippy::float_arithmetic, reason = "fixture derives ascent from length")]
#[must_use]
pub fn trail(id: &str, region: &str, length_km: f64, difficulty: u8) -> TrailRecord {
    build_trail(TrailDraft {
        elevation_gain_m: length_km * 100.0,
        ..base_draft(id, region, length_km, difficulty)
    })
}

/// Build a flat trail with an explicit terrain and tag list.
///
/// # Panics
/// Panics when the attributes fail validation.
#[must_use]
pub fn trail_with(
    id: &str,
    region: &str,
    length_km: f64,
    difficulty: u8,
    terrain: TerrainType,
    tags: &[&str],
) -> TrailRecord {
    build_trail(TrailDraft {
        terrain,
        tags: tags.iter().map(|t| (*t).to_owned()).collect::<BTreeSet<_>>(),
        ..base_draft(id, region, length_km, difficulty)
    })
}

/// Validate a draft, panicking on failure.
///
/// # Panics
/// Panics when the draft fails validation.
#[expect(clippy::expect_used, reason = "fixtures should fail loudly")]
#[must_use]
pub fn build_trail(draft: TrailDraft) -> TrailRecord {
    TrailRecord::new(draft).expect("fixture trail should be valid")
}

fn base_draft(id: &str, region: &str, length_km: f64, difficulty: u8) -> TrailDraft {
    TrailDraft {
        id: id.to_owned(),
        name: format!("Trail {id}"),
        region: region.to_owned(),
        start: Coord { x: 20.0, y: 49.2 },
        end: Coord { x: 20.05, y: 49.25 },
        length_km,
        elevation_gain_m: 0.0,
        difficulty,
        terrain: TerrainType::Mountain,
        tags: BTreeSet::new(),
    }
}

/// Return a draft carrying the same attributes as `record`.
#[must_use]
pub fn draft_of(record: &TrailRecord) -> TrailDraft {
    TrailDraft {
        id: record.id().to_owned(),
        name: record.name().to_owned(),
        region: record.region().to_owned(),
        start: record.start(),
        end: record.end(),
        length_km: record.length_km(),
        elevation_gain_m: record.elevation_gain_m(),
        difficulty: record.difficulty(),
        terrain: record.terrain(),
        tags: record.tags().clone(),
    }
}

/// Build a day with 8 h of sunshine and 20 % cloud cover.
///
/// Minimum and maximum temperatures sit 5 °C either side of `avg_temp_c`.
///
/// # Panics
/// Panics when the values fail validation.
#[expect(clippy::expect_used, reason = "fixtures should fail loudly")]
#[expect(clippy::float_arithmetic, reason = "fixture spreads min and max around the mean")]
#[must_use]
pub fn weather_day(
    location: &str,
    date: NaiveDate,
    avg_temp_c: f64,
    precipitation_mm: f64,
) -> WeatherRecord {
    WeatherRecord::new(WeatherDraft {
        date,
        location: location.to_owned(),
        avg_temp_c,
        min_temp_c: avg_temp_c - 5.0,
        max_temp_c: avg_temp_c + 5.0,
        precipitation_mm,
        sunshine_hours: 8.0,
        cloud_cover_pct: 20,
    })
    .expect("fixture weather should be valid")
}

/// Build `days` consecutive identical days starting at `start`.
///
/// # Panics
/// Panics when the values fail validation or the dates overflow.
#[expect(clippy::expect_used, reason = "fixtures should fail loudly")]
#[must_use]
pub fn weather_series(
    location: &str,
    start: NaiveDate,
    days: u64,
    avg_temp_c: f64,
    precipitation_mm: f64,
) -> Vec<WeatherRecord> {
    (0..days)
        .map(|offset| {
            let date = start
                .checked_add_days(Days::new(offset))
                .expect("fixture dates should not overflow");
            weather_day(location, date, avg_temp_c, precipitation_mm)
        })
        .collect()
}

/// Shorthand for a calendar date.
///
/// # Panics
/// Panics when the date does not exist.
#[expect(clippy::expect_used, reason = "fixtures should fail loudly")]
#[must_use]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date should exist")
}
