//! Property-based tests for the recommendation pipeline.
//!
//! # Invariants tested
//!
//! - **Determinism:** identical inputs produce identical ordered output.
//! - **Matched first:** no unmatched result precedes a matched one.
//! - **Sorted scores:** within the matched and unmatched groups, scores never
//!   increase.
//! - **Top-n:** a limit returns a prefix of the unlimited ranking.

use std::collections::HashMap;

use proptest::prelude::*;
use trailwise_core::test_support::{trail, weather_series, ymd};
use trailwise_core::{RecommendationResult, TrailRecord, UserPreference, WeatherRecord};
use trailwise_recommender::RouteRecommender;

const REGIONS: [&str; 4] = ["TATRY", "BIESZCZADY", "SUDETY", "MAZURY"];

fn trails_strategy() -> impl Strategy<Value = Vec<TrailRecord>> {
    proptest::collection::vec((0_usize..REGIONS.len(), 0.5_f64..30.0, 1_u8..=5), 0..12).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(idx, (region, length_km, difficulty))| {
                    let region_name = REGIONS.get(region).copied().unwrap_or("TATRY");
                    trail(&format!("T{idx:02}"), region_name, length_km, difficulty)
                })
                .collect()
        },
    )
}

/// Weather for the first three regions; the last region has no history.
fn weather_strategy() -> impl Strategy<Value = HashMap<String, Vec<WeatherRecord>>> {
    proptest::collection::vec((5.0_f64..30.0, 0.0_f64..8.0), 3).prop_map(|climates| {
        REGIONS
            .iter()
            .zip(climates)
            .map(|(region, (temp, rain))| {
                (
                    (*region).to_owned(),
                    weather_series(region, ymd(2023, 6, 20), 20, temp, rain),
                )
            })
            .collect()
    })
}

fn preference_strategy() -> impl Strategy<Value = UserPreference> {
    (10.0_f64..25.0, 1_u8..=5, 2.0_f64..40.0).prop_map(|(temp, max_difficulty, max_len)| {
        UserPreference {
            preferred_temperature: temp,
            max_difficulty,
            max_length_km: max_len,
            ..UserPreference::default()
        }
    })
}

fn ids(results: &[RecommendationResult]) -> Vec<&str> {
    results.iter().map(|r| r.trail_id.as_str()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: repeated calls return identical rankings.
    #[test]
    fn recommend_is_deterministic(
        trails in trails_strategy(),
        weather in weather_strategy(),
        preference in preference_strategy(),
    ) {
        let recommender = RouteRecommender::new();
        let first = recommender
            .recommend(&trails, &weather, &preference, None)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let second = recommender
            .recommend(&trails, &weather, &preference, None)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(first, second);
    }

    /// Property: matched results precede unmatched ones and scores never rise
    /// within either group.
    #[test]
    fn ranking_respects_match_then_score(
        trails in trails_strategy(),
        weather in weather_strategy(),
        preference in preference_strategy(),
    ) {
        let ranked = RouteRecommender::new()
            .recommend(&trails, &weather, &preference, None)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(ranked.len(), trails.len());
        for pair in ranked.windows(2) {
            if let [earlier, later] = pair {
                prop_assert!(earlier.matched || !later.matched);
                if earlier.matched == later.matched {
                    prop_assert!(earlier.overall_score >= later.overall_score);
                }
            }
        }
        for result in &ranked {
            prop_assert!((0.0..=100.0).contains(&result.overall_score));
            prop_assert_eq!(result.matched, result.violations.is_empty());
        }
    }

    /// Property: `top_n` returns a prefix of the full ranking.
    #[test]
    fn top_n_is_a_prefix(
        trails in trails_strategy(),
        weather in weather_strategy(),
        preference in preference_strategy(),
        top_n in 1_usize..6,
    ) {
        let recommender = RouteRecommender::new();
        let full = recommender
            .recommend(&trails, &weather, &preference, None)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let limited = recommender
            .recommend(&trails, &weather, &preference, Some(top_n))
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let expected: Vec<_> = ids(&full).into_iter().take(top_n).collect();
        prop_assert_eq!(ids(&limited), expected);
    }
}
