//! Weather alert generation tests
//!
//! Property tests for the rule-based alert generator and the
//! predictive-alert merge.

use proptest::prelude::*;

use shared::{
    combine_alerts, generate_alerts, should_send_alert, AlertSeverity, PredictiveAlert,
    WeatherAlertType, WeatherObservation,
};

fn observation(temp: f64, humidity: f64, rainfall: f64, wind_speed: f64) -> WeatherObservation {
    WeatherObservation {
        temp,
        humidity,
        rainfall,
        wind_speed,
        condition: "Clouds".to_string(),
        description: "scattered clouds".to_string(),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_storm_conditions_generate_multiple_alerts() {
    let weather = observation(25.0, 95.0, 60.0, 30.0);
    let alerts = generate_alerts(&weather);

    assert_eq!(alerts.len(), 3);
    assert!(should_send_alert(&alerts));

    let critical = alerts
        .iter()
        .filter(|a| a.severity == AlertSeverity::Critical)
        .count();
    assert_eq!(critical, 2); // rain > 50 and wind > 25
}

#[test]
fn test_mild_weather_generates_nothing() {
    let weather = observation(25.0, 60.0, 0.5, 3.0);
    let alerts = generate_alerts(&weather);
    assert!(alerts.is_empty());
    assert!(!should_send_alert(&alerts));
}

#[test]
fn test_combined_alerts_sorted_by_severity() {
    let weather = observation(42.0, 92.0, 30.0, 5.0);
    let basic = generate_alerts(&weather);
    let combined = combine_alerts(&basic, Vec::new());

    for pair in combined.windows(2) {
        assert!(pair[0].severity >= pair[1].severity);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

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

    /// At most one alert per rule family, and rain rules never overlap
    #[test]
    fn prop_at_most_one_alert_per_family(weather in observation_strategy()) {
        let alerts = generate_alerts(&weather);

        for family in [
            WeatherAlertType::Rain,
            WeatherAlertType::Storm,
            WeatherAlertType::ExtremeTemp,
            WeatherAlertType::HighHumidity,
            WeatherAlertType::Drought,
        ] {
            let count = alerts.iter().filter(|a| a.alert_type == family).count();
            prop_assert!(count <= 1);
        }
    }

    /// The generator never emits a low-severity alert, so any non-empty
    /// batch warrants a notification
    #[test]
    fn prop_generated_alerts_always_notify(weather in observation_strategy()) {
        let alerts = generate_alerts(&weather);
        prop_assert_eq!(should_send_alert(&alerts), !alerts.is_empty());
    }

    /// Alert generation is deterministic
    #[test]
    fn prop_alert_generation_deterministic(weather in observation_strategy()) {
        prop_assert_eq!(generate_alerts(&weather), generate_alerts(&weather));
    }

    /// Rainfall above 20mm always produces a rain alert of at least
    /// high severity
    #[test]
    fn prop_heavy_rain_always_alerts(
        temp in temperature_strategy(),
        humidity in humidity_strategy(),
        rainfall in 20.01f64..=120.0,
        wind in wind_strategy(),
    ) {
        let alerts = generate_alerts(&observation(temp, humidity, rainfall, wind));
        let rain = alerts.iter().find(|a| a.alert_type == WeatherAlertType::Rain);
        prop_assert!(rain.is_some());
        prop_assert!(rain.unwrap().severity >= AlertSeverity::High);
    }

    /// The drought rule requires all three of its conditions
    #[test]
    fn prop_drought_requires_dry_hot_rainless(weather in observation_strategy()) {
        let alerts = generate_alerts(&weather);
        let has_drought = alerts
            .iter()
            .any(|a| a.alert_type == WeatherAlertType::Drought);
        let expected =
            weather.rainfall == 0.0 && weather.temp > 30.0 && weather.humidity < 40.0;
        prop_assert_eq!(has_drought, expected);
    }

    /// Merging preserves every rule-based alert and sorts by severity
    /// descending, then confidence descending
    #[test]
    fn prop_combine_preserves_basic_alerts(weather in observation_strategy()) {
        let basic = generate_alerts(&weather);
        let combined = combine_alerts(&basic, Vec::new());

        prop_assert_eq!(combined.len(), basic.len());
        for alert in &basic {
            prop_assert!(combined
                .iter()
                .any(|c| c.alert_type == alert.alert_type && c.message == alert.message));
        }
        for pair in combined.windows(2) {
            prop_assert!(
                pair[0].severity > pair[1].severity
                    || (pair[0].severity == pair[1].severity
                        && pair[0].confidence >= pair[1].confidence)
            );
        }
    }

    /// Predictive alerts that duplicate a rule-based alert are dropped
    #[test]
    fn prop_combine_deduplicates(weather in observation_strategy()) {
        let basic = generate_alerts(&weather);
        let duplicates: Vec<PredictiveAlert> = basic
            .iter()
            .map(|a| PredictiveAlert {
                alert_type: a.alert_type,
                severity: a.severity,
                message: a.message.clone(),
                crop_impact: a.crop_impact.clone(),
                predicted_risk: a.severity,
                time_window: "next 6 hours".to_string(),
                recommended_actions: Vec::new(),
                confidence: 0.95,
            })
            .collect();

        let combined = combine_alerts(&basic, duplicates);
        prop_assert_eq!(combined.len(), basic.len());
    }
}
