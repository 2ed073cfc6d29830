//! Rule-based soil health scoring

use crate::models::{SoilHealthStatus, SoilNutrients};

/// Score a soil test into a coarse health status.
///
/// pH contributes 1-3 points (optimal band 6.0-7.5 scores 3, the slightly
/// acidic or alkaline shoulders score 2, anything else 1). Each sufficient
/// macro-nutrient adds one point; missing readings add nothing.
pub fn soil_health_status(ph: f64, nutrients: &SoilNutrients) -> SoilHealthStatus {
    let mut score = 0u8;

    if (6.0..=7.5).contains(&ph) {
        score += 3;
    } else if (5.5..6.0).contains(&ph) || (ph > 7.5 && ph <= 8.0) {
        score += 2;
    } else {
        score += 1;
    }

    if nutrients.nitrogen.is_some_and(|n| n >= 250.0) {
        score += 1;
    }
    if nutrients.phosphorus.is_some_and(|p| p >= 25.0) {
        score += 1;
    }
    if nutrients.potassium.is_some_and(|k| k >= 150.0) {
        score += 1;
    }

    match score {
        5.. => SoilHealthStatus::Excellent,
        4 => SoilHealthStatus::Good,
        2..=3 => SoilHealthStatus::Fair,
        _ => SoilHealthStatus::Poor,
    }
}
