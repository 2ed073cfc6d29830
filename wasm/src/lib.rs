//! WebAssembly module for the CropSense Advisory Platform
//!
//! Provides client-side computation for:
//! - Crop health analysis
//! - Weather alert generation
//! - Soil health classification
//! - Offline data validation

use chrono::{DateTime, NaiveDate};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_observation(weather_json: &str) -> Result<WeatherObservation, JsValue> {
    serde_json::from_str(weather_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weather JSON: {}", e)))
}

/// Run the full crop health analysis offline.
///
/// `planting_date` is an ISO date ("2024-06-01") or empty; `now_ms` is the
/// client clock as milliseconds since the epoch (i.e. `Date.now()`).
#[wasm_bindgen]
pub fn analyze_crop_health_json(
    crop_name: &str,
    planting_date: &str,
    weather_json: &str,
    now_ms: f64,
) -> Result<String, JsValue> {
    let weather = parse_observation(weather_json)?;

    let planted = if planting_date.is_empty() {
        None
    } else {
        Some(
            NaiveDate::parse_from_str(planting_date, "%Y-%m-%d")
                .map_err(|e| JsValue::from_str(&format!("Invalid planting date: {}", e)))?,
        )
    };

    let now = DateTime::from_timestamp_millis(now_ms as i64)
        .ok_or_else(|| JsValue::from_str("Invalid timestamp"))?;

    let analysis = shared::analyze_crop_health(crop_name, planted, &weather, now);
    serde_json::to_string(&analysis)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Generate rule-based weather alerts for an observation
#[wasm_bindgen]
pub fn generate_weather_alerts_json(weather_json: &str) -> Result<String, JsValue> {
    let weather = parse_observation(weather_json)?;
    let alerts = shared::generate_alerts(&weather);
    serde_json::to_string(&alerts)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Whether a batch of generated alerts warrants a notification
#[wasm_bindgen]
pub fn should_send_weather_alert(alerts_json: &str) -> Result<bool, JsValue> {
    let alerts: Vec<WeatherAlert> = serde_json::from_str(alerts_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid alerts JSON: {}", e)))?;
    Ok(shared::should_send_alert(&alerts))
}

/// Classify soil health from pH and optional nutrient readings (kg/ha)
#[wasm_bindgen]
pub fn classify_soil_health(
    ph: f64,
    nitrogen: Option<f64>,
    phosphorus: Option<f64>,
    potassium: Option<f64>,
) -> String {
    let status = shared::soil_health_status(
        ph,
        &SoilNutrients {
            nitrogen,
            phosphorus,
            potassium,
        },
    );
    match status {
        SoilHealthStatus::Excellent => "excellent",
        SoilHealthStatus::Good => "good",
        SoilHealthStatus::Fair => "fair",
        SoilHealthStatus::Poor => "poor",
    }
    .to_string()
}

/// Crop names with dedicated parameter profiles, as a JSON array
#[wasm_bindgen]
pub fn known_crop_names() -> String {
    serde_json::to_string(&shared::known_crops()).unwrap_or_else(|_| "[]".to_string())
}

/// Validate a weather observation before submitting it
#[wasm_bindgen]
pub fn validate_weather_observation(weather_json: &str) -> Result<(), JsValue> {
    let weather = parse_observation(weather_json)?;
    validate_observation(&weather).map_err(JsValue::from_str)
}
