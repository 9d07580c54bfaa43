//! Deterministic ordering of recommendation results.

use std::cmp::Ordering;

use trailwise_core::RecommendationResult;

/// Compare two results in ranking order.
///
/// Matched results come first, then higher scores, then shorter completion
/// times, then identifiers in ascending order. Floats compare with
/// `total_cmp`, so the order is total.
#[must_use]
pub fn compare(a: &RecommendationResult, b: &RecommendationResult) -> Ordering {
    b.matched
        .cmp(&a.matched)
        .then_with(|| b.overall_score.total_cmp(&a.overall_score))
        .then_with(|| {
            a.estimated_completion_hours
                .total_cmp(&b.estimated_completion_hours)
        })
        .then_with(|| a.trail_id.cmp(&b.trail_id))
}

/// Sort `results` into ranking order and keep the first `top_n`.
///
/// `None` and `Some(0)` keep every result.
pub fn rank(results: &mut Vec<RecommendationResult>, top_n: Option<usize>) {
    results.sort_by(compare);
    if let Some(limit) = top_n.filter(|&n| n > 0) {
        results.truncate(limit);
    }
}
