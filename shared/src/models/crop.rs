//! Crop profile reference data models

use serde::{Deserialize, Serialize};

/// Inclusive optimal band for a weather dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalRange {
    pub min: f64,
    pub max: f64,
}

impl OptimalRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A named growth-stage milestone reached a fixed number of days after planting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthMilestone {
    pub name: String,
    pub days_from_planting: i64,
}

/// Weather conditions under which a disease becomes likely for a crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseTrigger {
    pub name: String,
    /// Relative humidity at or above which the disease thrives
    pub humidity: f64,
    /// Temperature around which the disease thrives
    pub temp: f64,
}

/// Seasons used for pest activity classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Monsoon,
    Summer,
    Winter,
    All,
}

impl Season {
    /// Season for a calendar month (1-12).
    ///
    /// June falls in both the monsoon (June-October) and summer (March-June)
    /// ranges; monsoon is checked first, so June classifies as monsoon.
    pub fn from_month(month: u32) -> Season {
        if (6..=10).contains(&month) {
            Season::Monsoon
        } else if (3..=6).contains(&month) {
            Season::Summer
        } else {
            Season::Winter
        }
    }
}

/// A pest associated with a crop, active in a given season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestProfile {
    pub name: String,
    pub season: Season,
    /// Free-text description of favorable conditions
    pub conditions: String,
}

/// Static per-species parameters driving all scoring.
///
/// Invariant: `stages` is non-empty and strictly increasing in
/// `days_from_planting`, with the first stage at day 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub optimal_temp: OptimalRange,
    pub optimal_humidity: OptimalRange,
    /// Maximum tolerable rainfall in mm over the forecast horizon
    pub max_rainfall: f64,
    /// Total growth-cycle length in days
    pub growth_days: i64,
    pub stages: Vec<GrowthMilestone>,
    pub diseases: Vec<DiseaseTrigger>,
    pub pests: Vec<PestProfile>,
}
