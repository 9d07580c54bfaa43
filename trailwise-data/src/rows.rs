//! Serialised row layouts shared by the CSV and JSON formats.
//!
//! Column names follow the files the loaders read: `start_lat`/`start_lon`
//! rather than coordinates, `location_id` for the weather location and
//! `terrain_type` as free text.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use geo::Coord;
use serde::{Deserialize, Serialize};
use trailwise_core::{TerrainType, TrailDraft, TrailRecord, WeatherDraft, WeatherRecord};

/// Tag encodings: a comma-joined string in CSV, an array in JSON.
pub(crate) trait TagList: Sized {
    fn into_tags(self) -> BTreeSet<String>;
    fn from_tags(tags: &BTreeSet<String>) -> Self;
}

impl TagList for String {
    fn into_tags(self) -> BTreeSet<String> {
        self.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect()
    }

    fn from_tags(tags: &BTreeSet<String>) -> Self {
        tags.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }
}

impl TagList for Vec<String> {
    fn into_tags(self) -> BTreeSet<String> {
        self.into_iter()
            .map(|tag| tag.trim().to_owned())
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    fn from_tags(tags: &BTreeSet<String>) -> Self {
        tags.iter().cloned().collect()
    }
}

/// One trail as written on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct TrailRow<T> {
    pub id: String,
    pub name: String,
    pub region: String,
    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,
    pub length_km: f64,
    pub elevation_gain: f64,
    pub difficulty: u8,
    pub terrain_type: String,
    #[serde(default)]
    pub tags: T,
}

impl<T: TagList> TrailRow<T> {
    /// Convert to a draft once the terrain text has been parsed.
    pub fn into_draft(self, terrain: TerrainType) -> TrailDraft {
        TrailDraft {
            id: self.id,
            name: self.name,
            region: self.region,
            start: Coord {
                x: self.start_lon,
                y: self.start_lat,
            },
            end: Coord {
                x: self.end_lon,
                y: self.end_lat,
            },
            length_km: self.length_km,
            elevation_gain_m: self.elevation_gain,
            difficulty: self.difficulty,
            terrain,
            tags: self.tags.into_tags(),
        }
    }
}

impl<T: TagList> From<&TrailRecord> for TrailRow<T> {
    fn from(trail: &TrailRecord) -> Self {
        Self {
            id: trail.id().to_owned(),
            name: trail.name().to_owned(),
            region: trail.region().to_owned(),
            start_lat: trail.start().y,
            start_lon: trail.start().x,
            end_lat: trail.end().y,
            end_lon: trail.end().x,
            length_km: trail.length_km(),
            elevation_gain: trail.elevation_gain_m(),
            difficulty: trail.difficulty(),
            terrain_type: trail.terrain().as_str().to_owned(),
            tags: T::from_tags(trail.tags()),
        }
    }
}

/// One day of weather as written on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct WeatherRow {
    pub date: NaiveDate,
    pub location_id: String,
    pub avg_temp: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub precipitation: f64,
    pub sunshine_hours: f64,
    pub cloud_cover: u8,
}

impl From<WeatherRow> for WeatherDraft {
    fn from(row: WeatherRow) -> Self {
        Self {
            date: row.date,
            location: row.location_id,
            avg_temp_c: row.avg_temp,
            min_temp_c: row.min_temp,
            max_temp_c: row.max_temp,
            precipitation_mm: row.precipitation,
            sunshine_hours: row.sunshine_hours,
            cloud_cover_pct: row.cloud_cover,
        }
    }
}

impl From<&WeatherRecord> for WeatherRow {
    fn from(record: &WeatherRecord) -> Self {
        Self {
            date: record.date(),
            location_id: record.location().to_owned(),
            avg_temp: record.avg_temp_c(),
            min_temp: record.min_temp_c(),
            max_temp: record.max_temp_c(),
            precipitation: record.precipitation_mm(),
            sunshine_hours: record.sunshine_hours(),
            cloud_cover: record.cloud_cover_pct(),
        }
    }
}

/// JSON wrapper for trail files.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TrailDocument<R> {
    #[serde(default)]
    pub trail_records: Vec<R>,
}

/// JSON wrapper for weather files.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct WeatherDocument<R> {
    #[serde(default)]
    pub weather_records: Vec<R>,
}
