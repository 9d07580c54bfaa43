//! Property-based tests for the scoring components.
//!
//! # Invariants tested
//!
//! - **Comfort bounds:** the comfort index stays within `0..=100` for any
//!   weather, including extremes.
//! - **Categorizer totality:** every valid trail receives a category and the
//!   same trail always receives the same one.
//! - **Estimator monotonicity:** completion time never decreases as length,
//!   ascent or difficulty grow.
//! - **Score bounds:** matcher scores stay within `0..=100`.

use std::collections::BTreeSet;

use geo::Coord;
use proptest::prelude::*;
use trailwise_core::test_support::{weather_series, ymd};
use trailwise_core::{
    FactorWeights, TerrainType, TrailDraft, TrailRecord, UserPreference, WeatherConditions,
};
use trailwise_scorer::{
    ComfortIndexCalculator, CompletionTimeEstimator, PreferenceMatcher, TrailCategorizer,
    WeatherStatistics,
};

fn terrain_strategy() -> impl Strategy<Value = TerrainType> {
    prop_oneof![
        Just(TerrainType::Mountain),
        Just(TerrainType::Lakeside),
        Just(TerrainType::Forest),
        Just(TerrainType::Urban),
        Just(TerrainType::Mixed),
    ]
}

fn tags_strategy() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set(
        prop_oneof![
            Just("lake".to_owned()),
            Just("Viewpoint".to_owned()),
            Just("forest".to_owned()),
            Just("castle".to_owned()),
        ],
        0..3,
    )
}

#[expect(clippy::expect_used, reason = "strategies only produce valid drafts")]
fn build(
    length_km: f64,
    elevation_gain_m: f64,
    difficulty: u8,
    terrain: TerrainType,
    tags: BTreeSet<String>,
) -> TrailRecord {
    TrailRecord::new(TrailDraft {
        id: "P1".into(),
        name: "Generated".into(),
        region: "TATRY".into(),
        start: Coord { x: 20.0, y: 49.2 },
        end: Coord { x: 20.1, y: 49.3 },
        length_km,
        elevation_gain_m,
        difficulty,
        terrain,
        tags,
    })
    .expect("generated trail should be valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the comfort index is always within `0..=100`.
    #[test]
    fn comfort_index_is_bounded(
        avg_temp_c in -60.0_f64..60.0,
        precipitation_mm in 0.0_f64..300.0,
        cloud_cover_pct in 0.0_f64..=100.0,
        sunshine_hours in 0.0_f64..=24.0,
    ) {
        let index = ComfortIndexCalculator::default().index(&WeatherConditions {
            avg_temp_c,
            precipitation_mm,
            cloud_cover_pct,
            sunshine_hours,
        });
        prop_assert!((0.0..=100.0).contains(&index), "index {index} out of bounds");
    }

    /// Property: categorisation is total and deterministic.
    #[test]
    fn categorizer_is_total_and_deterministic(
        length_km in 0.1_f64..60.0,
        elevation_gain_m in 0.0_f64..3000.0,
        difficulty in 1_u8..=5,
        terrain in terrain_strategy(),
        tags in tags_strategy(),
    ) {
        let trail = build(length_km, elevation_gain_m, difficulty, terrain, tags);
        let categorizer = TrailCategorizer::default();
        prop_assert_eq!(categorizer.categorize(&trail), categorizer.categorize(&trail));
    }

    /// Property: completion time is non-decreasing in length, ascent and
    /// difficulty.
    #[test]
    #[expect(clippy::float_arithmetic, reason = "property grows the inputs")]
    fn estimator_is_monotonic(
        length_km in 0.1_f64..60.0,
        extra_km in 0.0_f64..20.0,
        elevation_gain_m in 0.0_f64..3000.0,
        extra_gain_m in 0.0_f64..1000.0,
        difficulty in 1_u8..5,
        terrain in terrain_strategy(),
    ) {
        let estimator = CompletionTimeEstimator::default();
        let base = estimator.estimate_hours(
            &build(length_km, elevation_gain_m, difficulty, terrain, BTreeSet::new()),
        );
        let longer = estimator.estimate_hours(
            &build(length_km + extra_km, elevation_gain_m, difficulty, terrain, BTreeSet::new()),
        );
        let steeper = estimator.estimate_hours(
            &build(length_km, elevation_gain_m + extra_gain_m, difficulty, terrain, BTreeSet::new()),
        );
        let harder = estimator.estimate_hours(
            &build(length_km, elevation_gain_m, difficulty + 1, terrain, BTreeSet::new()),
        );
        prop_assert!(base > 0.0);
        prop_assert!(longer >= base);
        prop_assert!(steeper >= base);
        prop_assert!(harder >= base);
    }

    /// Property: matcher scores stay within `0..=100` for any weights.
    #[test]
    fn matcher_score_is_bounded(
        length_km in 0.1_f64..60.0,
        difficulty in 1_u8..=5,
        avg_temp_c in -20.0_f64..40.0,
        precipitation_mm in 0.0_f64..30.0,
        weather in 0.0_f64..10.0,
        comfort in 0.0_f64..10.0,
        length in 0.0_f64..10.0,
        difficulty_weight in 0.0_f64..10.0,
    ) {
        let history = weather_series("TATRY", ymd(2023, 7, 1), 5, avg_temp_c, precipitation_mm);
        let stats = WeatherStatistics::compute("TATRY", &history, &ComfortIndexCalculator::default())
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let preference = UserPreference {
            max_length_km: 20.0,
            max_difficulty: 3,
            factor_weights: FactorWeights { weather, difficulty: difficulty_weight, length, comfort },
            ..UserPreference::default()
        };
        let trail = build(length_km, 0.0, difficulty, TerrainType::Forest, BTreeSet::new());
        let outcome = PreferenceMatcher::default().evaluate(&trail, &stats, &preference);
        prop_assert!((0.0..=100.0).contains(&outcome.score));
        prop_assert_eq!(outcome.matched, outcome.violations.is_empty());
    }
}
