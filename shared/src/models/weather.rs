//! Weather observation and alert models

use serde::{Deserialize, Serialize};

/// A weather observation for a location: current conditions plus rainfall
/// accumulated over the next 24-hour forecast horizon.
///
/// Constructed fresh per request by the weather collaborator; carries no
/// identity and is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature in °C
    pub temp: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Accumulated rainfall over the forecast horizon in mm
    pub rainfall: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Coarse condition label (e.g. "Rain", "Clear")
    pub condition: String,
    /// Human-readable description
    pub description: String,
}

/// Types of weather alerts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherAlertType {
    Rain,
    Storm,
    ExtremeTemp,
    HighHumidity,
    Drought,
}

/// Alert severity, totally ordered from Low up to Critical
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Moderate,
    High,
    Critical,
}

/// A severity-graded weather alert with crop-impact wording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub alert_type: WeatherAlertType,
    pub severity: AlertSeverity,
    pub message: String,
    pub crop_impact: String,
}

/// A weather alert enriched with predictive metadata, either lifted from a
/// rule-based [`WeatherAlert`] or produced by the AI advice collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictiveAlert {
    pub alert_type: WeatherAlertType,
    pub severity: AlertSeverity,
    pub message: String,
    pub crop_impact: String,
    pub predicted_risk: AlertSeverity,
    /// e.g. "next 3 hours", "next 24 hours"
    pub time_window: String,
    pub recommended_actions: Vec<String>,
    /// Confidence in the prediction, 0.0-1.0
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(AlertSeverity::Low < AlertSeverity::Moderate);
        assert!(AlertSeverity::Moderate < AlertSeverity::High);
        assert!(AlertSeverity::High < AlertSeverity::Critical);
    }

    #[test]
    fn test_alert_type_serialization() {
        let json = serde_json::to_string(&WeatherAlertType::ExtremeTemp).unwrap();
        assert_eq!(json, "\"extreme_temp\"");
        let json = serde_json::to_string(&AlertSeverity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
