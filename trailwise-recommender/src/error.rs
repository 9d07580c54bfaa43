//! Errors that abort a recommendation run.

use chrono::NaiveDate;
use thiserror::Error;
use trailwise_core::PreferenceError;

/// A recommendation call could not run.
///
/// Per-trail problems such as a missing weather history never surface here;
/// they mark the affected trail as unmatched instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// The preference snapshot failed validation.
    #[error("invalid preference")]
    InvalidPreference(#[from] PreferenceError),
    /// A weekly plan starting on `start` would run past the last
    /// representable date.
    #[error("a week starting on {start} exceeds the supported date range")]
    DateOutOfRange {
        /// Requested first day.
        start: NaiveDate,
    },
}
