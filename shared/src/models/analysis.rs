//! Crop health analysis output models
//!
//! Every classification here is derived from a numeric score through a fixed
//! ladder of (lower bound, label) pairs evaluated top-down. The ladders are
//! declared next to their enums so the breakpoints stay testable
//! independently of the scoring arithmetic that produces the input score.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classify a score against an ordered ladder of lower bounds.
///
/// The final entry must use `f64::NEG_INFINITY` as its bound so the ladder
/// is total.
pub(crate) fn classify<T: Copy>(score: f64, ladder: &[(f64, T)]) -> T {
    for (bound, label) in ladder {
        if score >= *bound {
            return *label;
        }
    }
    unreachable!("classification ladder must terminate with a catch-all bound")
}

/// How well current weather suits the crop's optimal bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityStatus {
    Ideal,
    Favorable,
    Moderate,
    Unfavorable,
    Critical,
}

impl SuitabilityStatus {
    pub fn from_score(score: f64) -> Self {
        classify(
            score,
            &[
                (80.0, SuitabilityStatus::Ideal),
                (60.0, SuitabilityStatus::Favorable),
                (40.0, SuitabilityStatus::Moderate),
                (20.0, SuitabilityStatus::Unfavorable),
                (f64::NEG_INFINITY, SuitabilityStatus::Critical),
            ],
        )
    }
}

/// Disease outbreak risk level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DiseaseRiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl DiseaseRiskLevel {
    pub fn from_score(score: f64) -> Self {
        classify(
            score,
            &[
                (70.0, DiseaseRiskLevel::Critical),
                (50.0, DiseaseRiskLevel::High),
                (25.0, DiseaseRiskLevel::Moderate),
                (f64::NEG_INFINITY, DiseaseRiskLevel::Low),
            ],
        )
    }
}

/// Crop moisture deficit level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum WaterStressLevel {
    None,
    Low,
    Moderate,
    High,
    Severe,
}

/// Pest activity risk level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PestRiskLevel {
    Low,
    Moderate,
    High,
}

/// Aggregate crop health classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Excellent,
    Good,
    Moderate,
    Poor,
    Critical,
}

impl OverallStatus {
    pub fn from_score(score: f64) -> Self {
        classify(
            score,
            &[
                (80.0, OverallStatus::Excellent),
                (60.0, OverallStatus::Good),
                (40.0, OverallStatus::Moderate),
                (20.0, OverallStatus::Poor),
                (f64::NEG_INFINITY, OverallStatus::Critical),
            ],
        )
    }
}

/// Weather suitability section of a health analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSuitability {
    pub status: SuitabilityStatus,
    /// Penalty-based score, clamped to 0-100
    pub score: f64,
    pub message: String,
}

/// Disease risk section of a health analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRisk {
    pub level: DiseaseRiskLevel,
    /// Accumulated risk score, clamped to 0-100
    pub score: f64,
    pub factors: Vec<String>,
    pub recommendation: String,
}

/// Water stress section of a health analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterStress {
    pub level: WaterStressLevel,
    pub indicator: String,
    pub action: String,
}

/// Pest risk section of a health analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestRisk {
    pub level: PestRiskLevel,
    pub pests: Vec<String>,
    pub prevention: String,
}

/// Growth stage section of a health analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthStage {
    pub stage: String,
    /// Whole days since planting; 0 when no planting date was supplied
    pub days_from_planting: i64,
    pub next_milestone: String,
    /// Days until the next milestone, clamped to >= 0
    pub days_to_next_milestone: i64,
}

/// Harvest readiness section of a health analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestReadiness {
    pub is_ready: bool,
    /// Days remaining to the end of the growth cycle, clamped to >= 0
    pub days_to_harvest: i64,
    pub estimated_date: NaiveDate,
}

/// Alert kinds attached to a health analysis (distinct from weather alerts)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisAlertType {
    Warning,
    Danger,
    Info,
}

/// An alert attached to a health analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisAlert {
    pub alert_type: AnalysisAlertType,
    pub message: String,
}

/// The full multi-dimensional health assessment for one crop under one
/// weather observation. A pure function result: fully determined by crop
/// name, planting date, observation, and the injected clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropHealthAnalysis {
    pub overall_status: OverallStatus,
    pub weather_suitability: WeatherSuitability,
    pub disease_risk: DiseaseRisk,
    pub water_stress: WaterStress,
    pub pest_risk: PestRisk,
    pub growth_stage: GrowthStage,
    pub harvest_readiness: HarvestReadiness,
    /// Ordered action list; never empty
    pub recommendations: Vec<String>,
    /// May be empty under benign conditions
    pub alerts: Vec<AnalysisAlert>,
}
