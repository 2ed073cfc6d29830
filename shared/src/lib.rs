//! Shared types and scoring logic for the CropSense advisory platform
//!
//! This crate contains the pure agronomic core shared between the backend
//! and the browser (via WASM): crop parameter profiles, the weather-alert
//! generator, the crop health analyzer, and soil scoring. Everything here is
//! synchronous, deterministic, and free of I/O; the wall clock is always an
//! explicit parameter.

pub mod alerts;
pub mod analyzer;
pub mod models;
pub mod profiles;
pub mod soil;
pub mod types;
pub mod validation;

pub use alerts::{combine_alerts, generate_alerts, should_send_alert};
pub use analyzer::{analyze_crop_health, analyze_crop_health_now};
pub use models::*;
pub use profiles::{known_crops, profile_for};
pub use soil::soil_health_status;
pub use types::*;
