//! Soil test models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Macro-nutrient readings from a soil test, in kg/ha
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilNutrients {
    pub nitrogen: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
}

/// Measured values from a soil test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilTestValues {
    pub ph: f64,
    pub nutrients: SoilNutrients,
    /// Organic matter percentage
    pub organic_matter: Option<Decimal>,
    /// Moisture percentage
    pub moisture: Option<Decimal>,
    /// e.g. "loamy", "clay", "sandy"
    pub texture: Option<String>,
}

/// Rule-based soil health classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SoilHealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}
