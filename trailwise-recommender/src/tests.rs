//! Unit tests for the recommendation pipeline.

use std::collections::HashMap;

use rstest::{fixture, rstest};
use trailwise_core::test_support::{trail, trail_with, weather_series, ymd};
use trailwise_core::{
    ConstraintViolation, DateWindow, PreferenceError, TerrainType, TrailCategory, TrailRecord,
    UserPreference, WeatherArchive, WeatherRecord,
};
use trailwise_scorer::{EngineConfig, PaceConfig};

use crate::{RecommendError, RouteRecommender};

#[fixture]
fn trails() -> Vec<TrailRecord> {
    vec![
        trail("T1", "TATRY", 7.8, 2),
        trail_with("T2", "BIESZCZADY", 15.5, 1, TerrainType::Forest, &[]),
    ]
}

#[fixture]
fn weather() -> HashMap<String, Vec<WeatherRecord>> {
    let mut weather = HashMap::new();
    weather.insert(
        "TATRY".to_owned(),
        weather_series("TATRY", ymd(2023, 7, 1), 31, 22.0, 0.0),
    );
    weather.insert(
        "BIESZCZADY".to_owned(),
        weather_series("BIESZCZADY", ymd(2023, 7, 1), 31, 20.0, 0.0),
    );
    weather
}

#[fixture]
fn preference() -> UserPreference {
    UserPreference {
        preferred_temperature: 20.0,
        max_precipitation: 5.0,
        max_difficulty: 3,
        max_length_km: 10.0,
        ..UserPreference::default()
    }
}

#[rstest]
fn ranks_matching_trail_first(
    trails: Vec<TrailRecord>,
    weather: HashMap<String, Vec<WeatherRecord>>,
    preference: UserPreference,
) {
    let ranked = RouteRecommender::new()
        .recommend(&trails, &weather, &preference, None)
        .expect("valid preference");
    let ids: Vec<_> = ranked.iter().map(|r| r.trail_id.as_str()).collect();
    assert_eq!(ids, vec!["T1", "T2"]);

    let first = ranked.first().expect("two results");
    assert!(first.matched);
    assert!(first.overall_score > 50.0);
    assert!(first.comfort.is_some());

    let second = ranked.get(1).expect("two results");
    assert!(!second.matched);
    assert_eq!(
        second.violations,
        vec![ConstraintViolation::LengthAboveMax {
            length_km: 15.5,
            max_km: 10.0
        }]
    );
}

#[rstest]
fn missing_history_is_unmatched_with_zero_score(
    trails: Vec<TrailRecord>,
    mut weather: HashMap<String, Vec<WeatherRecord>>,
    mut preference: UserPreference,
) {
    weather.remove("TATRY");
    preference.max_length_km = 50.0;
    let ranked = RouteRecommender::new()
        .recommend(&trails, &weather, &preference, None)
        .expect("valid preference");
    let tatry = ranked
        .iter()
        .find(|r| r.trail_id == "T1")
        .expect("T1 is ranked");
    assert!(!tatry.matched);
    assert_eq!(tatry.overall_score, 0.0);
    assert!(tatry.sub_scores.is_none());
    assert_eq!(
        tatry.violations,
        vec![ConstraintViolation::NoWeatherHistory {
            location: "TATRY".into()
        }]
    );
    assert_eq!(ranked.first().map(|r| r.trail_id.as_str()), Some("T2"));
}

#[rstest]
fn invalid_preference_aborts(
    trails: Vec<TrailRecord>,
    weather: HashMap<String, Vec<WeatherRecord>>,
    mut preference: UserPreference,
) {
    preference.max_length_km = -1.0;
    let err = RouteRecommender::new()
        .recommend(&trails, &weather, &preference, None)
        .expect_err("negative max length");
    assert!(matches!(
        err,
        RecommendError::InvalidPreference(PreferenceError::InvalidMaxLength { .. })
    ));
}

#[rstest]
fn empty_trail_list_yields_empty_ranking(
    weather: HashMap<String, Vec<WeatherRecord>>,
    preference: UserPreference,
) {
    let ranked = RouteRecommender::new()
        .recommend(&[], &weather, &preference, Some(5))
        .expect("valid preference");
    assert!(ranked.is_empty());
}

#[rstest]
fn top_n_limits_results(
    trails: Vec<TrailRecord>,
    weather: HashMap<String, Vec<WeatherRecord>>,
    preference: UserPreference,
) {
    let recommender = RouteRecommender::new();
    let one = recommender
        .recommend(&trails, &weather, &preference, Some(1))
        .expect("valid preference");
    assert_eq!(one.len(), 1);
    let all = recommender
        .recommend(&trails, &weather, &preference, Some(0))
        .expect("valid preference");
    assert_eq!(all.len(), 2);
}

#[rstest]
fn windowed_recommendation_uses_only_window_weather(
    trails: Vec<TrailRecord>,
    preference: UserPreference,
) {
    let mut records = weather_series("TATRY", ymd(2023, 7, 1), 5, 22.0, 0.0);
    records.extend(weather_series("BIESZCZADY", ymd(2023, 8, 1), 5, 20.0, 0.0));
    let archive = WeatherArchive::from_records(records);
    let window = DateWindow::new(ymd(2023, 7, 1), ymd(2023, 7, 31)).expect("window");
    let ranked = RouteRecommender::new()
        .recommend_in_window(&trails, &archive, &preference, window, None)
        .expect("valid preference");
    let bieszczady = ranked
        .iter()
        .find(|r| r.trail_id == "T2")
        .expect("T2 is ranked");
    assert!(bieszczady.comfort.is_none());
    let tatry = ranked.iter().find(|r| r.trail_id == "T1").expect("T1 is ranked");
    assert_eq!(tatry.comfort.map(|c| c.best_period.days), Some(5));
}

#[rstest]
fn reports_category_and_completion_time(
    trails: Vec<TrailRecord>,
    weather: HashMap<String, Vec<WeatherRecord>>,
    preference: UserPreference,
) {
    let ranked = RouteRecommender::new()
        .recommend(&trails, &weather, &preference, None)
        .expect("valid preference");
    let long = ranked.iter().find(|r| r.trail_id == "T2").expect("T2 is ranked");
    assert_eq!(long.category, TrailCategory::Sporty);
    assert!(long.estimated_completion_hours > 0.0);
}

#[rstest]
fn custom_config_changes_estimates(trails: Vec<TrailRecord>) {
    let fast = RouteRecommender::with_config(EngineConfig {
        pace: PaceConfig {
            base_speed_kmh: 8.0,
            ..PaceConfig::default()
        },
        ..EngineConfig::default()
    })
    .expect("valid config");
    let default = RouteRecommender::new();
    let trail = trails.first().expect("fixture trail");
    assert!(fast.estimator().estimate_hours(trail) < default.estimator().estimate_hours(trail));
}

#[rstest]
fn rejects_invalid_config() {
    let result = RouteRecommender::with_config(EngineConfig {
        pace: PaceConfig {
            base_speed_kmh: 0.0,
            ..PaceConfig::default()
        },
        ..EngineConfig::default()
    });
    assert!(result.is_err());
}

#[rstest]
fn weekly_plan_covers_seven_days(trails: Vec<TrailRecord>, preference: UserPreference) {
    let mut records = weather_series("TATRY", ymd(2023, 7, 1), 7, 22.0, 0.0);
    records.extend(weather_series("BIESZCZADY", ymd(2023, 7, 4), 2, 20.0, 0.0));
    let archive = WeatherArchive::from_records(records);
    let plan = RouteRecommender::new()
        .recommend_weekly(&trails, &archive, &preference, ymd(2023, 7, 1), 1)
        .expect("valid preference");
    assert_eq!(plan.len(), 7);
    assert_eq!(plan.first().map(|d| d.date), Some(ymd(2023, 7, 1)));
    assert_eq!(plan.last().map(|d| d.date), Some(ymd(2023, 7, 7)));
    for day in &plan {
        assert_eq!(day.recommendations.len(), 1);
        assert_eq!(
            day.recommendations.first().map(|r| r.trail_id.as_str()),
            Some("T1")
        );
    }
}

#[rstest]
fn weekly_plan_rejects_overflowing_start(trails: Vec<TrailRecord>, preference: UserPreference) {
    let archive = WeatherArchive::default();
    let err = RouteRecommender::new()
        .recommend_weekly(&trails, &archive, &preference, chrono::NaiveDate::MAX, 3)
        .expect_err("week past the end of the calendar");
    assert!(matches!(err, RecommendError::DateOutOfRange { .. }));
}
