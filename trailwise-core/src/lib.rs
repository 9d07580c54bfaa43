//! Core domain types for the Trailwise engine.
//!
//! Trails and weather observations are validated on construction and
//! immutable afterwards, so scoring code never re-checks their invariants.
//! Preferences validate on demand because callers edit them freely between
//! recommendation runs.

#![forbid(unsafe_code)]

mod catalog;
mod category;
mod error;
mod history;
mod preference;
mod recommendation;
mod terrain;
mod trail;
mod weather;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{CatalogError, TrailCatalog, TrailFilter};
pub use category::TrailCategory;
pub use error::InvalidRecord;
pub use history::{DateWindow, DateWindowError, WeatherArchive, WeatherHistory};
pub use preference::{FactorWeights, NormalisedWeights, PreferenceError, UserPreference};
pub use recommendation::{
    BestPeriod, ComfortSummary, ConstraintViolation, RecommendationResult, SubScores,
};
pub use terrain::TerrainType;
pub use trail::{MAX_DIFFICULTY, MIN_DIFFICULTY, TrailDraft, TrailRecord};
pub use weather::{WeatherConditions, WeatherDraft, WeatherRecord};
