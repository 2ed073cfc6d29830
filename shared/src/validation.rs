//! Validation utilities for the CropSense advisory platform
//!
//! Input checks applied at the API boundary before scoring. Scoring itself
//! is total; these guard against readings that indicate a broken sensor or
//! malformed request rather than unusual weather.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{SoilTestValues, WeatherObservation};
use crate::types::GpsCoordinates;

// ============================================================================
// Weather Validations
// ============================================================================

/// Validate a weather observation carries physically plausible readings
pub fn validate_observation(weather: &WeatherObservation) -> Result<(), &'static str> {
    if !(-60.0..=60.0).contains(&weather.temp) {
        return Err("Temperature out of plausible range (-60 to 60 °C)");
    }
    if !(0.0..=100.0).contains(&weather.humidity) {
        return Err("Humidity must be between 0 and 100%");
    }
    if weather.rainfall < 0.0 {
        return Err("Rainfall cannot be negative");
    }
    if weather.wind_speed < 0.0 {
        return Err("Wind speed cannot be negative");
    }
    Ok(())
}

/// Validate GPS coordinates are on the globe
pub fn validate_coordinates(coords: &GpsCoordinates) -> Result<(), &'static str> {
    let ninety = Decimal::from(90);
    let one_eighty = Decimal::from(180);
    if coords.latitude < -ninety || coords.latitude > ninety {
        return Err("Latitude must be between -90 and 90");
    }
    if coords.longitude < -one_eighty || coords.longitude > one_eighty {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

// ============================================================================
// Crop Validations
// ============================================================================

/// Validate a crop name is non-empty after trimming
pub fn validate_crop_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Crop name cannot be empty");
    }
    if name.len() > 100 {
        return Err("Crop name must be at most 100 characters");
    }
    Ok(())
}

/// Validate a planting date is not in the future
pub fn validate_planting_date(planted: NaiveDate, today: NaiveDate) -> Result<(), &'static str> {
    if planted > today {
        return Err("Planting date cannot be in the future");
    }
    Ok(())
}

// ============================================================================
// Soil Validations
// ============================================================================

/// Validate a soil test carries plausible measurements
pub fn validate_soil_test(values: &SoilTestValues) -> Result<(), &'static str> {
    if !(0.0..=14.0).contains(&values.ph) {
        return Err("Soil pH must be between 0 and 14");
    }
    for reading in [
        values.nutrients.nitrogen,
        values.nutrients.phosphorus,
        values.nutrients.potassium,
    ]
    .into_iter()
    .flatten()
    {
        if reading < 0.0 {
            return Err("Nutrient readings cannot be negative");
        }
    }
    let hundred = Decimal::from(100);
    if let Some(om) = values.organic_matter {
        if om < Decimal::ZERO || om > hundred {
            return Err("Organic matter must be between 0 and 100%");
        }
    }
    if let Some(moisture) = values.moisture {
        if moisture < Decimal::ZERO || moisture > hundred {
            return Err("Moisture must be between 0 and 100%");
        }
    }
    Ok(())
}
