//! Scoring components for Trailwise trail recommendations.
//!
//! The crate provides the stateless services the recommender composes:
//! - [`ComfortIndexCalculator`] turns daily or aggregate weather into a 0–100
//!   comfort index and classifies sunny and rainy days.
//! - [`TrailCategorizer`] assigns each trail a [`TrailCategory`].
//! - [`CompletionTimeEstimator`] predicts walking time from length, ascent,
//!   difficulty and terrain.
//! - [`WeatherStatistics`] aggregates a location's history.
//! - [`PreferenceMatcher`] combines hard constraints and weighted sub-scores.
//!
//! Every threshold and coefficient lives in [`EngineConfig`].
//!
//! [`TrailCategory`]: trailwise_core::TrailCategory
//!
//! # Examples
//!
//! ```
//! use trailwise_core::test_support::trail;
//! use trailwise_core::TrailCategory;
//! use trailwise_scorer::{CompletionTimeEstimator, TrailCategorizer};
//!
//! let t = trail("T1", "TATRY", 3.0, 1);
//! assert_eq!(TrailCategorizer::default().categorize(&t), TrailCategory::Family);
//! assert!(CompletionTimeEstimator::default().estimate_hours(&t) > 0.0);
//! ```

#![forbid(unsafe_code)]

mod category;
mod comfort;
mod config;
mod error;
mod matcher;
mod statistics;
mod timing;

pub use category::TrailCategorizer;
pub use comfort::{ComfortIndexCalculator, MAX_COMFORT, MIN_COMFORT};
pub use config::{
    CategoryConfig, ComfortConfig, EngineConfig, MatcherConfig, PaceConfig, TerrainMultipliers,
};
pub use error::{ConfigError, StatisticsError};
pub use matcher::{MatchOutcome, PreferenceMatcher};
pub use statistics::WeatherStatistics;
pub use timing::CompletionTimeEstimator;
