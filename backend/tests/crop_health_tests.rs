//! Crop health analyzer tests
//!
//! Property tests over the pure analysis pipeline with a pinned clock,
//! so every run is reproducible.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use shared::{
    analyze_crop_health, known_crops, profile_for, OverallStatus, WeatherObservation,
};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 15, 9, 0, 0).unwrap()
}

fn observation(temp: f64, humidity: f64, rainfall: f64, wind_speed: f64) -> WeatherObservation {
    WeatherObservation {
        temp,
        humidity,
        rainfall,
        wind_speed,
        condition: "Clear".to_string(),
        description: "clear sky".to_string(),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_missing_planting_date_starts_at_day_zero() {
    let analysis =
        analyze_crop_health("rice", None, &observation(28.0, 70.0, 5.0, 4.0), fixed_now());

    assert_eq!(analysis.growth_stage.days_from_planting, 0);
    assert_eq!(analysis.growth_stage.stage, "Germination");
    assert!(!analysis.harvest_readiness.is_ready);
}

#[test]
fn test_unknown_crop_uses_fallback_profile() {
    let weather = observation(24.0, 62.0, 3.0, 4.0);
    let named = analyze_crop_health("durian", None, &weather, fixed_now());
    let blank = analyze_crop_health("jackfruit", None, &weather, fixed_now());

    assert_eq!(named, blank);
}

// ============================================================================
// Property Tests
// ============================================================================

fn crop_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(known_crops()).prop_map(str::to_string),
        "[a-z]{1,12}",
    ]
}

fn temperature_strategy() -> impl Strategy<Value = f64> {
    -20.0f64..=55.0
}

fn humidity_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=100.0
}

fn rainfall_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=120.0
}

fn wind_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=40.0
}

prop_compose! {
    fn observation_strategy()(
        temp in temperature_strategy(),
        humidity in humidity_strategy(),
        rainfall in rainfall_strategy(),
        wind_speed in wind_strategy(),
    ) -> WeatherObservation {
        observation(temp, humidity, rainfall, wind_speed)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Both numeric scores stay inside 0-100 for any input
    #[test]
    fn prop_scores_stay_in_range(
        crop in crop_strategy(),
        weather in observation_strategy(),
        days_ago in 0i64..400,
    ) {
        let planted = fixed_now().date_naive() - Duration::days(days_ago);
        let analysis = analyze_crop_health(&crop, Some(planted), &weather, fixed_now());

        prop_assert!((0.0..=100.0).contains(&analysis.weather_suitability.score));
        prop_assert!((0.0..=100.0).contains(&analysis.disease_risk.score));
    }

    /// The aggregate status is the balanced mean of weather suitability
    /// and inverted disease risk
    #[test]
    fn prop_overall_status_matches_component_scores(
        crop in crop_strategy(),
        weather in observation_strategy(),
    ) {
        let analysis = analyze_crop_health(&crop, None, &weather, fixed_now());
        let expected = OverallStatus::from_score(
            (analysis.weather_suitability.score + (100.0 - analysis.disease_risk.score)) / 2.0,
        );
        prop_assert_eq!(analysis.overall_status, expected);
    }

    /// Growth tracking never reports a negative day count, the reported
    /// stage always belongs to the crop's profile, and a planting date in
    /// the future clamps to day zero
    #[test]
    fn prop_growth_stage_is_well_formed(
        crop in crop_strategy(),
        weather in observation_strategy(),
        days_offset in -30i64..400,
    ) {
        let planted = fixed_now().date_naive() - Duration::days(days_offset);
        let analysis = analyze_crop_health(&crop, Some(planted), &weather, fixed_now());
        let growth = &analysis.growth_stage;

        prop_assert!(growth.days_from_planting >= 0);
        prop_assert!(growth.days_to_next_milestone >= 0);

        let profile = profile_for(&crop);
        prop_assert!(profile.stages.iter().any(|s| s.name == growth.stage));
        prop_assert!(profile.stages.iter().any(|s| s.name == growth.next_milestone));
    }

    /// The harvest estimate is always the pinned date plus the remaining
    /// days, and readiness implies the 90% cutoff was reached
    #[test]
    fn prop_harvest_estimate_is_consistent(
        crop in crop_strategy(),
        weather in observation_strategy(),
        days_ago in 0i64..400,
    ) {
        let planted = fixed_now().date_naive() - Duration::days(days_ago);
        let analysis = analyze_crop_health(&crop, Some(planted), &weather, fixed_now());
        let harvest = &analysis.harvest_readiness;

        prop_assert!(harvest.days_to_harvest >= 0);
        prop_assert_eq!(
            harvest.estimated_date,
            fixed_now().date_naive() + Duration::days(harvest.days_to_harvest)
        );

        let profile = profile_for(&crop);
        let cutoff = profile.growth_days as f64 * 0.9;
        prop_assert_eq!(harvest.is_ready, days_ago as f64 >= cutoff);
    }

    /// The analyzer always produces at least one recommendation
    #[test]
    fn prop_recommendations_never_empty(
        crop in crop_strategy(),
        weather in observation_strategy(),
    ) {
        let analysis = analyze_crop_health(&crop, None, &weather, fixed_now());
        prop_assert!(!analysis.recommendations.is_empty());
    }

    /// With the clock pinned the analysis is a pure function of its inputs
    #[test]
    fn prop_analysis_deterministic(
        crop in crop_strategy(),
        weather in observation_strategy(),
        days_ago in 0i64..400,
    ) {
        let planted = fixed_now().date_naive() - Duration::days(days_ago);
        let first = analyze_crop_health(&crop, Some(planted), &weather, fixed_now());
        let second = analyze_crop_health(&crop, Some(planted), &weather, fixed_now());
        prop_assert_eq!(first, second);
    }
}
