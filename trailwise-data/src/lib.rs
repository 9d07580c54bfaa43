//! Loaders and writers for trail and weather data files.
//!
//! Responsibilities:
//! - Read trail and weather records from CSV or JSON, chosen by extension.
//! - Validate every record through `trailwise-core` before returning it.
//! - Write validated records back out in the same layouts.
//! - Read engine configuration files.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `trailwise-scorer`).
//! - Files are read whole; there is no streaming or network access.
//!
//! # Layouts
//!
//! Trail files carry `id`, `name`, `region`, `start_lat`, `start_lon`,
//! `end_lat`, `end_lon`, `length_km`, `elevation_gain`, `difficulty`,
//! `terrain_type` and `tags`. CSV joins tags with commas; JSON wraps the rows
//! as `{"trail_records": [...]}` with `tags` as an array.
//!
//! Weather files carry `date`, `location_id`, `avg_temp`, `min_temp`,
//! `max_temp`, `precipitation`, `sunshine_hours` and `cloud_cover`. JSON
//! wraps the rows as `{"weather_records": [...]}`.
#![forbid(unsafe_code)]

mod codec;
mod config;
mod error;
mod format;
mod fs;
mod rows;
mod trails;
mod weather;

pub use config::load_engine_config;
pub use error::{LoadError, SaveError};
pub use format::DataFormat;
pub use trails::{load_trail_catalog, load_trails, save_trails};
pub use weather::{load_weather, load_weather_archive, save_weather};
