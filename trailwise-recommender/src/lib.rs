//! Trail ranking for the Trailwise engine.
//!
//! [`RouteRecommender`] composes the scorers from `trailwise-scorer` into a
//! single deterministic pipeline: validate the preference, aggregate weather
//! per location, categorise and time each trail, score it against the
//! preference and sort. Trails without weather history degrade to unmatched
//! results rather than failing the batch.
//!
//! With the `parallel` feature, per-trail scoring fans out over a `rayon`
//! parallel iterator. Statistics are computed before the fan-out and the sort
//! runs once afterwards, so results are identical to a sequential run.

#![forbid(unsafe_code)]

mod error;
pub mod ranking;
mod recommender;
mod weekly;

pub use error::RecommendError;
pub use recommender::RouteRecommender;
pub use weekly::{DEFAULT_PER_DAY, DailyRecommendation, WEEK_DAYS};

#[cfg(test)]
mod tests;
