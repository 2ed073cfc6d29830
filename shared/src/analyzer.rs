//! Multi-dimensional crop health analysis
//!
//! Pure scoring over one weather observation and a crop profile. The entry
//! point takes the current time as a parameter so results are reproducible;
//! use [`analyze_crop_health_now`] when the ambient clock is fine.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{
    AnalysisAlert, AnalysisAlertType, CropHealthAnalysis, CropProfile, DiseaseRisk,
    DiseaseRiskLevel, GrowthStage, HarvestReadiness, OverallStatus, PestRisk, PestRiskLevel,
    Season, SuitabilityStatus, WaterStress, WaterStressLevel, WeatherObservation,
    WeatherSuitability,
};
use crate::profiles::profile_for;

/// Analyze crop health for a crop under one weather observation.
///
/// Unknown crop names fall back to the default profile. A missing planting
/// date is treated as day 0 of the growth cycle. Planting dates in the
/// future also clamp to day 0.
pub fn analyze_crop_health(
    crop_name: &str,
    planting_date: Option<NaiveDate>,
    weather: &WeatherObservation,
    now: DateTime<Utc>,
) -> CropHealthAnalysis {
    let profile = profile_for(crop_name);

    let days_from_planting = planting_date
        .map(|planted| (now.date_naive() - planted).num_days().max(0))
        .unwrap_or(0);

    let weather_suitability = weather_suitability(weather, profile);
    let disease_risk = disease_risk(weather, profile);
    let water_stress = water_stress(weather, profile);
    let pest_risk = pest_risk(weather, profile, now);
    let growth_stage = growth_stage(days_from_planting, profile);
    let harvest_readiness = harvest_readiness(days_from_planting, profile, now);

    let recommendations = recommendations(
        weather,
        profile,
        disease_risk.level,
        water_stress.level,
    );
    let alerts = analysis_alerts(weather, &disease_risk, &water_stress, &harvest_readiness);

    let overall_status = overall_status(weather_suitability.score, disease_risk.score);

    CropHealthAnalysis {
        overall_status,
        weather_suitability,
        disease_risk,
        water_stress,
        pest_risk,
        growth_stage,
        harvest_readiness,
        recommendations,
        alerts,
    }
}

/// [`analyze_crop_health`] against the current system clock.
pub fn analyze_crop_health_now(
    crop_name: &str,
    planting_date: Option<NaiveDate>,
    weather: &WeatherObservation,
) -> CropHealthAnalysis {
    analyze_crop_health(crop_name, planting_date, weather, Utc::now())
}

/// Penalty-based suitability score. Starts at 100; each dimension outside
/// its optimal band deducts a capped penalty.
fn weather_suitability(weather: &WeatherObservation, profile: &CropProfile) -> WeatherSuitability {
    let mut score: f64 = 100.0;
    let mut issues: Vec<String> = Vec::new();

    if weather.temp < profile.optimal_temp.min {
        let diff = profile.optimal_temp.min - weather.temp;
        score -= (diff * 5.0).min(40.0);
        issues.push(format!("Temperature too low ({}°C)", weather.temp));
    } else if weather.temp > profile.optimal_temp.max {
        let diff = weather.temp - profile.optimal_temp.max;
        score -= (diff * 5.0).min(40.0);
        issues.push(format!("Temperature too high ({}°C)", weather.temp));
    }

    if weather.humidity < profile.optimal_humidity.min {
        let diff = profile.optimal_humidity.min - weather.humidity;
        score -= (diff * 0.5).min(20.0);
        issues.push(format!("Humidity too low ({}%)", weather.humidity));
    } else if weather.humidity > profile.optimal_humidity.max {
        let diff = weather.humidity - profile.optimal_humidity.max;
        score -= (diff * 0.5).min(20.0);
        issues.push(format!("Humidity too high ({}%)", weather.humidity));
    }

    if weather.rainfall > profile.max_rainfall {
        score -= ((weather.rainfall - profile.max_rainfall) * 2.0).min(30.0);
        issues.push(format!("Excessive rainfall ({}mm)", weather.rainfall));
    }

    if weather.wind_speed > 15.0 {
        score -= ((weather.wind_speed - 15.0) * 2.0).min(20.0);
        issues.push(format!("Strong winds ({} m/s)", weather.wind_speed));
    }

    let score = score.max(0.0);

    let message = if issues.is_empty() {
        "Weather conditions are ideal for your crop!".to_string()
    } else {
        format!("Current conditions: {}", issues.join(", "))
    };

    WeatherSuitability {
        status: SuitabilityStatus::from_score(score),
        score,
        message,
    }
}

/// Additive disease score. Each trigger with both conditions matched adds 35
/// and names the disease; a single matched condition adds 15 anonymously.
fn disease_risk(weather: &WeatherObservation, profile: &CropProfile) -> DiseaseRisk {
    let mut score: f64 = 0.0;
    let mut factors: Vec<String> = Vec::new();
    let mut risky_diseases: Vec<&str> = Vec::new();

    for disease in &profile.diseases {
        let humidity_match = weather.humidity >= disease.humidity - 10.0;
        let temp_match = (weather.temp - disease.temp).abs() <= 5.0;

        if humidity_match && temp_match {
            score += 35.0;
            risky_diseases.push(&disease.name);
        } else if humidity_match || temp_match {
            score += 15.0;
        }
    }

    if weather.humidity > 85.0 {
        score += 20.0;
        factors.push("High humidity promotes fungal growth".to_string());
    }

    if weather.rainfall > 10.0 {
        score += 15.0;
        factors.push("Rain can spread pathogens".to_string());
    }

    let score = score.min(100.0);
    let level = DiseaseRiskLevel::from_score(score);

    if !risky_diseases.is_empty() {
        factors.insert(0, format!("Risk of: {}", risky_diseases.join(", ")));
    }

    let recommendation = match level {
        DiseaseRiskLevel::Low => "Continue regular monitoring",
        DiseaseRiskLevel::Moderate => "Monitor closely and apply preventive measures",
        _ => "Apply preventive fungicide and increase monitoring frequency",
    }
    .to_string();

    DiseaseRisk {
        level,
        score,
        factors,
        recommendation,
    }
}

/// Decision tree over three boolean indicators: hot, dry, and no rain.
fn water_stress(weather: &WeatherObservation, profile: &CropProfile) -> WaterStress {
    let is_hot = weather.temp > profile.optimal_temp.max;
    let is_dry = weather.humidity < profile.optimal_humidity.min;
    let no_rain = weather.rainfall < 2.0;

    let (level, indicator, action) = if is_hot && is_dry && no_rain {
        (
            WaterStressLevel::Severe,
            "High temperature, low humidity, no rainfall - severe water stress conditions",
            "Irrigate immediately. Consider mulching to retain moisture. Water early morning or evening.",
        )
    } else if (is_hot && is_dry) || (is_hot && no_rain) {
        (
            WaterStressLevel::High,
            "Hot conditions with insufficient moisture",
            "Increase irrigation frequency. Monitor for wilting.",
        )
    } else if is_hot || (is_dry && no_rain) {
        (
            WaterStressLevel::Moderate,
            "Moderate stress conditions detected",
            "Maintain regular irrigation schedule. Check soil moisture.",
        )
    } else if is_dry {
        (
            WaterStressLevel::Low,
            "Slightly dry conditions",
            "Continue normal watering. Monitor soil moisture levels.",
        )
    } else {
        (
            WaterStressLevel::None,
            "Adequate moisture levels",
            "No additional irrigation needed at this time.",
        )
    };

    WaterStress {
        level,
        indicator: indicator.to_string(),
        action: action.to_string(),
    }
}

/// Pest risk from current-season pests gated by humidity and temperature.
fn pest_risk(weather: &WeatherObservation, profile: &CropProfile, now: DateTime<Utc>) -> PestRisk {
    use chrono::Datelike;

    let current_season = Season::from_month(now.month());
    let active_pests: Vec<&str> = profile
        .pests
        .iter()
        .filter(|pest| pest.season == Season::All || pest.season == current_season)
        .map(|pest| pest.name.as_str())
        .collect();

    let level = if weather.humidity > 75.0 && weather.temp > 25.0 {
        if active_pests.len() > 1 {
            PestRiskLevel::High
        } else {
            PestRiskLevel::Moderate
        }
    } else if weather.humidity > 60.0 && weather.temp > 20.0 {
        if active_pests.is_empty() {
            PestRiskLevel::Low
        } else {
            PestRiskLevel::Moderate
        }
    } else {
        PestRiskLevel::Low
    };

    let prevention = match level {
        PestRiskLevel::High => {
            "Set up pheromone traps. Consider applying neem-based pesticides preventively."
        }
        PestRiskLevel::Moderate => {
            "Regular scouting recommended. Keep field clean of crop residues."
        }
        PestRiskLevel::Low => "Maintain field hygiene. Monitor occasionally.",
    }
    .to_string();

    PestRisk {
        level,
        pests: active_pests.into_iter().map(String::from).collect(),
        prevention,
    }
}

/// Latest milestone at or before the current day; at the final milestone the
/// next milestone is itself and the countdown clamps to 0.
fn growth_stage(days_from_planting: i64, profile: &CropProfile) -> GrowthStage {
    let mut current = &profile.stages[0];
    let mut next = profile.stages.get(1).unwrap_or(current);

    for (i, stage) in profile.stages.iter().enumerate() {
        if days_from_planting >= stage.days_from_planting {
            current = stage;
            next = profile.stages.get(i + 1).unwrap_or(stage);
        }
    }

    GrowthStage {
        stage: current.name.clone(),
        days_from_planting,
        next_milestone: next.name.clone(),
        days_to_next_milestone: (next.days_from_planting - days_from_planting).max(0),
    }
}

fn harvest_readiness(
    days_from_planting: i64,
    profile: &CropProfile,
    now: DateTime<Utc>,
) -> HarvestReadiness {
    let days_to_harvest = (profile.growth_days - days_from_planting).max(0);
    let is_ready = days_from_planting as f64 >= profile.growth_days as f64 * 0.9;

    HarvestReadiness {
        is_ready,
        days_to_harvest,
        estimated_date: now.date_naive() + Duration::days(days_to_harvest),
    }
}

fn recommendations(
    weather: &WeatherObservation,
    profile: &CropProfile,
    disease_level: DiseaseRiskLevel,
    water_level: WaterStressLevel,
) -> Vec<String> {
    let mut recommendations: Vec<&str> = Vec::new();

    if weather.temp > profile.optimal_temp.max {
        recommendations.push("Provide shade or use shade nets to protect from heat stress");
    }
    if weather.temp < profile.optimal_temp.min {
        recommendations.push("Use mulching or row covers to protect from cold");
    }

    if disease_level >= DiseaseRiskLevel::High {
        recommendations.push("Apply preventive fungicide spray");
        recommendations.push("Ensure proper spacing between plants for air circulation");
    }

    if water_level >= WaterStressLevel::High {
        recommendations.push("Irrigate immediately - use drip irrigation if available");
        recommendations.push("Apply organic mulch to conserve soil moisture");
    }

    if weather.humidity > 90.0 {
        recommendations.push("Avoid overhead irrigation to reduce fungal spread");
        recommendations.push("Improve field drainage if possible");
    }

    if weather.wind_speed > 15.0 {
        recommendations.push("Provide windbreaks or support for tall plants");
    }

    if weather.rainfall > 20.0 {
        recommendations.push("Check drainage systems to prevent waterlogging");
        recommendations.push("Postpone fertilizer application until rain subsides");
    }

    if recommendations.is_empty() {
        recommendations.push("Continue regular crop management practices");
        recommendations.push("Monitor crop health daily during critical growth stages");
    }

    recommendations.into_iter().map(String::from).collect()
}

fn analysis_alerts(
    weather: &WeatherObservation,
    disease_risk: &DiseaseRisk,
    water_stress: &WaterStress,
    harvest_readiness: &HarvestReadiness,
) -> Vec<AnalysisAlert> {
    let mut alerts = Vec::new();

    let danger = |message: String| AnalysisAlert {
        alert_type: AnalysisAlertType::Danger,
        message,
    };
    let warning = |message: String| AnalysisAlert {
        alert_type: AnalysisAlertType::Warning,
        message,
    };
    let info = |message: String| AnalysisAlert {
        alert_type: AnalysisAlertType::Info,
        message,
    };

    if weather.temp > 40.0 {
        alerts.push(danger(
            "Extreme heat warning! Immediate protective action needed.".to_string(),
        ));
    }
    if weather.temp < 5.0 {
        alerts.push(danger(
            "Frost risk! Cover sensitive plants immediately.".to_string(),
        ));
    }
    if weather.rainfall > 50.0 {
        alerts.push(danger(
            "Heavy rainfall alert! Check for waterlogging.".to_string(),
        ));
    }

    match disease_risk.level {
        DiseaseRiskLevel::Critical => {
            let factor = disease_risk
                .factors
                .first()
                .map(String::as_str)
                .unwrap_or_default();
            alerts.push(danger(format!("Critical disease risk: {factor}")));
        }
        DiseaseRiskLevel::High => {
            alerts.push(warning(format!(
                "High disease risk detected. {}",
                disease_risk.recommendation
            )));
        }
        _ => {}
    }

    match water_stress.level {
        WaterStressLevel::Severe => {
            alerts.push(danger("Severe water stress! Irrigate immediately.".to_string()));
        }
        WaterStressLevel::High => {
            alerts.push(warning(water_stress.indicator.clone()));
        }
        _ => {}
    }

    if harvest_readiness.is_ready {
        alerts.push(info(format!(
            "Crop is ready for harvest! Estimated date: {}",
            harvest_readiness.estimated_date.format("%-d %b %Y")
        )));
    } else if (1..=7).contains(&harvest_readiness.days_to_harvest) {
        alerts.push(info(format!(
            "Harvest approaching in {} days",
            harvest_readiness.days_to_harvest
        )));
    }

    alerts
}

/// Mean of the suitability score and the inverted disease score.
fn overall_status(weather_score: f64, disease_score: f64) -> OverallStatus {
    OverallStatus::from_score((weather_score + (100.0 - disease_score)) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn observation(temp: f64, humidity: f64, rainfall: f64, wind_speed: f64) -> WeatherObservation {
        WeatherObservation {
            temp,
            humidity,
            rainfall,
            wind_speed,
            condition: "Clouds".to_string(),
            description: "scattered clouds".to_string(),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        // A monsoon-season instant
        Utc.with_ymd_and_hms(2024, 7, 15, 9, 0, 0).unwrap()
    }

    fn planted_days_ago(days: i64, now: DateTime<Utc>) -> NaiveDate {
        now.date_naive() - Duration::days(days)
    }

    #[test]
    fn test_tomato_under_monsoon_stress() {
        let now = fixed_now();
        let weather = observation(32.0, 88.0, 15.0, 5.0);
        let planted = planted_days_ago(45, now);

        let analysis = analyze_crop_health("tomato", Some(planted), &weather, now);

        // Leaf Curl Virus fully matches (35); the two blights half-match on
        // humidity (15 each); humidity over 85 adds 20 and rain adds 15
        assert_eq!(analysis.disease_risk.score, 100.0);
        assert_eq!(analysis.disease_risk.level, DiseaseRiskLevel::Critical);
        assert_eq!(analysis.disease_risk.factors[0], "Risk of: Leaf Curl Virus");
        assert_eq!(
            analysis.disease_risk.factors[1],
            "High humidity promotes fungal growth"
        );
        assert_eq!(analysis.disease_risk.factors[2], "Rain can spread pathogens");

        // Temp over by 2 (-10), humidity over by 18 (-9), rainfall over by 5 (-10)
        assert_eq!(analysis.weather_suitability.score, 71.0);
        assert_eq!(
            analysis.weather_suitability.status,
            SuitabilityStatus::Favorable
        );

        assert_eq!(analysis.growth_stage.stage, "Flowering");
        assert_eq!(analysis.growth_stage.next_milestone, "Fruiting");
        assert_eq!(analysis.growth_stage.days_to_next_milestone, 15);

        assert!(!analysis.harvest_readiness.is_ready);
        assert_eq!(analysis.harvest_readiness.days_to_harvest, 45);

        // (71 + 0) / 2 = 35.5
        assert_eq!(analysis.overall_status, OverallStatus::Moderate);

        let danger_count = analysis
            .alerts
            .iter()
            .filter(|a| a.alert_type == AnalysisAlertType::Danger)
            .count();
        assert_eq!(danger_count, 1);
        assert!(analysis.alerts[0].message.starts_with("Critical disease risk:"));
    }

    #[test]
    fn test_unknown_crop_in_mild_weather() {
        let now = fixed_now();
        let weather = observation(22.0, 55.0, 1.0, 3.0);

        let analysis = analyze_crop_health("durian", None, &weather, now);

        assert_eq!(analysis.weather_suitability.score, 100.0);
        assert_eq!(analysis.weather_suitability.status, SuitabilityStatus::Ideal);
        assert_eq!(
            analysis.weather_suitability.message,
            "Weather conditions are ideal for your crop!"
        );

        assert_eq!(analysis.water_stress.level, WaterStressLevel::None);
        assert_eq!(analysis.growth_stage.stage, "Germination");
        assert_eq!(analysis.growth_stage.days_from_planting, 0);
        assert!(!analysis.harvest_readiness.is_ready);
        assert_eq!(analysis.harvest_readiness.days_to_harvest, 100);

        // Fungal Infection half-matches on temperature alone
        assert_eq!(analysis.disease_risk.score, 15.0);
        assert_eq!(analysis.disease_risk.level, DiseaseRiskLevel::Low);
        assert!(analysis.disease_risk.factors.is_empty());
        // (100 + 85) / 2 = 92.5
        assert_eq!(analysis.overall_status, OverallStatus::Excellent);

        assert_eq!(
            analysis.recommendations,
            vec![
                "Continue regular crop management practices",
                "Monitor crop health daily during critical growth stages",
            ]
        );
        assert!(analysis.alerts.is_empty());
    }

    #[test]
    fn test_future_planting_date_clamps_to_day_zero() {
        let now = fixed_now();
        let weather = observation(25.0, 60.0, 0.0, 5.0);
        let future = now.date_naive() + Duration::days(30);

        let analysis = analyze_crop_health("rice", Some(future), &weather, now);
        assert_eq!(analysis.growth_stage.days_from_planting, 0);
        assert_eq!(analysis.growth_stage.stage, "Germination");
    }

    #[test]
    fn test_growth_stage_at_final_milestone() {
        let now = fixed_now();
        let weather = observation(25.0, 60.0, 0.0, 5.0);
        let planted = planted_days_ago(150, now);

        let analysis = analyze_crop_health("rice", Some(planted), &weather, now);
        assert_eq!(analysis.growth_stage.stage, "Maturity");
        assert_eq!(analysis.growth_stage.next_milestone, "Maturity");
        assert_eq!(analysis.growth_stage.days_to_next_milestone, 0);
        assert!(analysis.harvest_readiness.is_ready);
        assert_eq!(analysis.harvest_readiness.days_to_harvest, 0);
        assert_eq!(analysis.harvest_readiness.estimated_date, now.date_naive());
    }

    #[test]
    fn test_harvest_ready_at_ninety_percent() {
        let now = fixed_now();
        let weather = observation(25.0, 60.0, 0.0, 5.0);

        // Tomato growth cycle is 90 days; ready from day 81
        let analysis =
            analyze_crop_health("tomato", Some(planted_days_ago(81, now)), &weather, now);
        assert!(analysis.harvest_readiness.is_ready);

        let analysis =
            analyze_crop_health("tomato", Some(planted_days_ago(80, now)), &weather, now);
        assert!(!analysis.harvest_readiness.is_ready);
        // 10 days out, no harvest alert yet
        assert!(!analysis
            .alerts
            .iter()
            .any(|a| a.alert_type == AnalysisAlertType::Info));

        let analysis =
            analyze_crop_health("tomato", Some(planted_days_ago(83, now)), &weather, now);
        assert!(analysis
            .alerts
            .iter()
            .any(|a| a.message.starts_with("Crop is ready for harvest!")));
    }

    #[test]
    fn test_harvest_ready_alert_carries_estimated_date() {
        let now = fixed_now();
        let weather = observation(25.0, 60.0, 0.0, 5.0);

        let analysis =
            analyze_crop_health("wheat", Some(planted_days_ago(134, now)), &weather, now);
        assert!(analysis.harvest_readiness.is_ready);
        assert_eq!(analysis.harvest_readiness.days_to_harvest, 6);
        assert_eq!(
            analysis.harvest_readiness.estimated_date,
            now.date_naive() + Duration::days(6)
        );

        let ready_alert = analysis
            .alerts
            .iter()
            .find(|a| a.alert_type == AnalysisAlertType::Info);
        assert!(ready_alert
            .map(|a| a.message.starts_with("Crop is ready for harvest!"))
            .unwrap_or(false));
    }

    #[test]
    fn test_water_stress_decision_tree() {
        let now = fixed_now();
        let cases = [
            // hot + dry + no rain
            (observation(35.0, 30.0, 0.0, 5.0), WaterStressLevel::Severe),
            // hot + dry, rain present
            (observation(35.0, 30.0, 5.0, 5.0), WaterStressLevel::High),
            // hot + no rain, humid
            (observation(35.0, 60.0, 0.0, 5.0), WaterStressLevel::High),
            // hot only
            (observation(35.0, 60.0, 5.0, 5.0), WaterStressLevel::Moderate),
            // dry + no rain, cool
            (observation(20.0, 30.0, 0.0, 5.0), WaterStressLevel::Moderate),
            // dry only
            (observation(20.0, 30.0, 5.0, 5.0), WaterStressLevel::Low),
            // comfortable
            (observation(25.0, 60.0, 5.0, 5.0), WaterStressLevel::None),
        ];

        for (weather, expected) in cases {
            let analysis = analyze_crop_health("durian", None, &weather, now);
            assert_eq!(analysis.water_stress.level, expected);
        }
    }

    #[test]
    fn test_pest_risk_uses_monsoon_season() {
        let now = fixed_now();
        // Rice has two monsoon pests; hot and humid activates both
        let weather = observation(28.0, 80.0, 5.0, 5.0);
        let analysis = analyze_crop_health("rice", None, &weather, now);
        assert_eq!(analysis.pest_risk.level, PestRiskLevel::High);
        assert_eq!(
            analysis.pest_risk.pests,
            vec!["Stem Borer", "Brown Planthopper"]
        );

        // Same weather in winter: no active rice pests
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let analysis = analyze_crop_health("rice", None, &weather, winter);
        assert!(analysis.pest_risk.pests.is_empty());
        assert_eq!(analysis.pest_risk.level, PestRiskLevel::Moderate);
    }

    #[test]
    fn test_suitability_penalties_are_capped() {
        let now = fixed_now();
        // Far outside every band: 40 + 20 + 30 + 20 = 110 of penalty, floor 0
        let weather = observation(60.0, 100.0, 200.0, 40.0);
        let analysis = analyze_crop_health("wheat", None, &weather, now);
        assert_eq!(analysis.weather_suitability.score, 0.0);
        assert_eq!(
            analysis.weather_suitability.status,
            SuitabilityStatus::Critical
        );
        assert!(analysis
            .weather_suitability
            .message
            .starts_with("Current conditions: "));
    }

    #[test]
    fn test_recommendation_order_is_stable() {
        let now = fixed_now();
        // Hot, very humid, rainy, windy: triggers most recommendation rules
        let weather = observation(38.0, 95.0, 25.0, 18.0);
        let analysis = analyze_crop_health("tomato", None, &weather, now);

        let recs = &analysis.recommendations;
        assert_eq!(
            recs[0],
            "Provide shade or use shade nets to protect from heat stress"
        );
        assert!(recs.contains(&"Avoid overhead irrigation to reduce fungal spread".to_string()));
        assert!(recs.contains(&"Provide windbreaks or support for tall plants".to_string()));
        assert_eq!(
            recs.last().unwrap(),
            "Postpone fertilizer application until rain subsides"
        );
    }

    #[test]
    fn test_analysis_is_deterministic_with_fixed_clock() {
        let now = fixed_now();
        let weather = observation(31.0, 82.0, 12.0, 9.0);
        let planted = planted_days_ago(60, now);

        let a = analyze_crop_health("maize", Some(planted), &weather, now);
        let b = analyze_crop_health("maize", Some(planted), &weather, now);
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }
}
