//! Business logic services

pub mod crop_health;
pub mod soil;
pub mod weather;
