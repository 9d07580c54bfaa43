//! Facade crate for the Trailwise recommendation engine.
//!
//! This crate re-exports the domain types, the scoring components and the
//! recommender. File loaders for CSV and JSON inputs are exposed behind the
//! `data` feature.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use trailwise_engine::{RouteRecommender, UserPreference};
//! use trailwise_core::test_support::{trail, weather_series, ymd};
//!
//! let trails = vec![trail("T1", "TATRY", 7.8, 2)];
//! let mut weather = HashMap::new();
//! weather.insert("TATRY".to_owned(), weather_series("TATRY", ymd(2023, 7, 1), 10, 21.0, 0.5));
//!
//! let ranked = RouteRecommender::new()
//!     .recommend(&trails, &weather, &UserPreference::default(), Some(5))
//!     .expect("default preference is valid");
//! assert_eq!(ranked.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub use trailwise_core::{
    BestPeriod, CatalogError, ComfortSummary, ConstraintViolation, DateWindow, DateWindowError,
    FactorWeights, InvalidRecord, PreferenceError, RecommendationResult, SubScores, TerrainType,
    TrailCatalog, TrailCategory, TrailDraft, TrailFilter, TrailRecord, UserPreference,
    WeatherArchive, WeatherConditions, WeatherDraft, WeatherHistory, WeatherRecord,
};
pub use trailwise_recommender::{
    DEFAULT_PER_DAY, DailyRecommendation, RecommendError, RouteRecommender, WEEK_DAYS,
};
pub use trailwise_scorer::{
    CategoryConfig, ComfortConfig, ComfortIndexCalculator, CompletionTimeEstimator, ConfigError,
    EngineConfig, MAX_COMFORT, MIN_COMFORT, MatchOutcome, MatcherConfig, PaceConfig,
    PreferenceMatcher, StatisticsError, TerrainMultipliers, TrailCategorizer, WeatherStatistics,
};

#[cfg(feature = "data")]
pub use trailwise_data::{
    DataFormat, LoadError, SaveError, load_engine_config, load_trail_catalog, load_trails,
    load_weather, load_weather_archive, save_trails, save_weather,
};

#[cfg(feature = "test-support")]
pub use trailwise_core::test_support;
