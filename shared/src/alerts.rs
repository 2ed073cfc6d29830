//! Rule-based weather alert generation
//!
//! A fixed rule set turns one weather observation into zero or more
//! severity-graded alerts, each with a message and crop-impact wording
//! suitable for sending to farmers directly. Alert order is deterministic:
//! rain, temperature, humidity, wind, drought.

use crate::models::{
    AlertSeverity, PredictiveAlert, WeatherAlert, WeatherAlertType, WeatherObservation,
};

/// Evaluate the alert rules against one observation.
///
/// At most one alert per rule family is emitted. An empty result means
/// conditions are benign.
pub fn generate_alerts(weather: &WeatherObservation) -> Vec<WeatherAlert> {
    let mut alerts = Vec::new();

    if weather.rainfall > 20.0 {
        alerts.push(WeatherAlert {
            alert_type: WeatherAlertType::Rain,
            severity: if weather.rainfall > 50.0 {
                AlertSeverity::Critical
            } else {
                AlertSeverity::High
            },
            message: format!("Heavy rainfall expected: {:.1}mm", weather.rainfall),
            crop_impact: "Risk of waterlogging, fungal diseases, and crop damage. Ensure proper drainage.".to_string(),
        });
    } else if weather.rainfall > 10.0 {
        alerts.push(WeatherAlert {
            alert_type: WeatherAlertType::Rain,
            severity: AlertSeverity::Moderate,
            message: format!("Moderate rainfall expected: {:.1}mm", weather.rainfall),
            crop_impact: "Monitor for waterlogging. Good for irrigation but watch for fungal diseases.".to_string(),
        });
    }

    if weather.temp > 40.0 {
        alerts.push(WeatherAlert {
            alert_type: WeatherAlertType::ExtremeTemp,
            severity: AlertSeverity::High,
            message: format!("Extreme heat: {:.1}°C", weather.temp),
            crop_impact: "High risk of heat stress, wilting, and reduced yield. Increase irrigation frequency.".to_string(),
        });
    } else if weather.temp < 5.0 {
        alerts.push(WeatherAlert {
            alert_type: WeatherAlertType::ExtremeTemp,
            severity: AlertSeverity::High,
            message: format!("Freezing temperature: {:.1}°C", weather.temp),
            crop_impact: "Risk of frost damage. Cover sensitive crops or move them indoors.".to_string(),
        });
    }

    // High humidity promotes fungal diseases
    if weather.humidity > 80.0 {
        alerts.push(WeatherAlert {
            alert_type: WeatherAlertType::HighHumidity,
            severity: if weather.humidity > 90.0 {
                AlertSeverity::High
            } else {
                AlertSeverity::Moderate
            },
            message: format!("High humidity: {}%", weather.humidity),
            crop_impact: "Increased risk of fungal diseases (powdery mildew, blight). Apply preventive fungicides.".to_string(),
        });
    }

    if weather.wind_speed > 15.0 {
        alerts.push(WeatherAlert {
            alert_type: WeatherAlertType::Storm,
            severity: if weather.wind_speed > 25.0 {
                AlertSeverity::Critical
            } else {
                AlertSeverity::Moderate
            },
            message: format!("Strong winds: {:.1} m/s", weather.wind_speed),
            crop_impact: "Risk of physical damage to crops. Secure structures and protect young plants.".to_string(),
        });
    }

    // Simplified drought heuristic; a real drought signal needs historical data
    if weather.rainfall == 0.0 && weather.temp > 30.0 && weather.humidity < 40.0 {
        alerts.push(WeatherAlert {
            alert_type: WeatherAlertType::Drought,
            severity: AlertSeverity::Moderate,
            message: "Dry conditions detected".to_string(),
            crop_impact: "Low moisture levels. Increase irrigation to prevent crop stress.".to_string(),
        });
    }

    alerts
}

/// Whether a batch of alerts warrants sending a notification.
///
/// Low-severity alerts alone never trigger a send.
pub fn should_send_alert(alerts: &[WeatherAlert]) -> bool {
    alerts
        .iter()
        .any(|alert| alert.severity >= AlertSeverity::Moderate)
}

/// Merge rule-based alerts with externally produced predictive alerts.
///
/// Rule-based alerts are lifted to predictive form with default metadata.
/// Predictive alerts that duplicate a lifted alert (same type and message)
/// are dropped. The result is sorted by severity descending, then
/// confidence descending.
pub fn combine_alerts(
    basic: &[WeatherAlert],
    predictive: Vec<PredictiveAlert>,
) -> Vec<PredictiveAlert> {
    let mut combined: Vec<PredictiveAlert> = basic
        .iter()
        .map(|alert| PredictiveAlert {
            alert_type: alert.alert_type,
            severity: alert.severity,
            message: alert.message.clone(),
            crop_impact: alert.crop_impact.clone(),
            predicted_risk: alert.severity,
            time_window: "next 24 hours".to_string(),
            recommended_actions: default_actions(alert.alert_type),
            confidence: 0.7,
        })
        .collect();

    for alert in predictive {
        let exists = combined
            .iter()
            .any(|a| a.alert_type == alert.alert_type && a.message == alert.message);
        if !exists {
            combined.push(alert);
        }
    }

    combined.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| b.confidence.total_cmp(&a.confidence))
    });

    combined
}

fn default_actions(alert_type: WeatherAlertType) -> Vec<String> {
    let actions: &[&str] = match alert_type {
        WeatherAlertType::Rain => &[
            "Ensure proper drainage in fields",
            "Monitor for waterlogging",
            "Apply preventive fungicides if humidity is high",
        ],
        WeatherAlertType::Storm => &[
            "Secure farm structures",
            "Protect young plants",
            "Harvest mature crops if possible",
        ],
        WeatherAlertType::ExtremeTemp => &[
            "Increase irrigation frequency",
            "Provide shade for sensitive crops",
            "Monitor for heat stress symptoms",
        ],
        WeatherAlertType::HighHumidity => &[
            "Apply preventive fungicides",
            "Improve air circulation",
            "Avoid overhead watering",
        ],
        WeatherAlertType::Drought => &[
            "Increase irrigation",
            "Apply mulch to retain moisture",
            "Monitor soil moisture levels",
        ],
    };
    actions.iter().map(|s| s.to_string()).collect()
}
