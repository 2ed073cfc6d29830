//! AI advice client
//!
//! Client for the hosted generative advice service used for predictive
//! weather alerts and soil recommendations. The service returns free text;
//! the JSON payload is extracted from the first brace to the last.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{Language, PredictiveAlert, SoilTestValues, WeatherObservation};

use crate::error::{AppError, AppResult};

/// Client for the AI advice service
#[derive(Clone)]
pub struct AdviceClient {
    client: Client,
    api_endpoint: String,
    api_key: String,
    model: String,
}

/// Request to the generation endpoint
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
}

/// Response from the generation endpoint
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    text: String,
}

/// Alert list wrapper the prompt asks the model to produce
#[derive(Debug, Deserialize)]
struct PredictiveAlertsPayload {
    #[serde(default)]
    alerts: Vec<PredictiveAlert>,
}

/// A crop suggestion in a soil advice report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop: String,
    pub suitability: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_yield: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planting_season: Option<String>,
}

/// A soil improvement step in a soil advice report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilImprovement {
    pub action: String,
    pub priority: String,
    pub description: String,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

/// Model-generated soil advice report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilAdvice {
    pub overall_health: String,
    #[serde(default)]
    pub recommendations: Vec<CropRecommendation>,
    #[serde(default)]
    pub improvements: Vec<SoilImprovement>,
    pub summary: String,
}

impl AdviceClient {
    /// Create a new AdviceClient
    pub fn new(api_endpoint: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_endpoint,
            api_key,
            model,
        }
    }

    /// Ask the model for predictive disease and weather risk alerts.
    pub async fn predictive_alerts(
        &self,
        weather: &WeatherObservation,
        crops: &[String],
        language: Language,
    ) -> AppResult<Vec<PredictiveAlert>> {
        let crop_list = if crops.is_empty() {
            "Unknown".to_string()
        } else {
            crops.join(", ")
        };

        let prompt = format!(
            "You are an expert agricultural meteorologist and plant pathologist. \
             Analyze the following weather data to predict potential crop disease \
             risks in the next 3-24 hours.\n\n\
             Current Weather:\n\
             - Temperature: {}°C\n\
             - Humidity: {}%\n\
             - Rainfall (next 24h): {}mm\n\
             - Wind Speed: {} m/s\n\
             - Condition: {}\n\n\
             Crops Being Grown: {}\n\n\
             Provide your analysis in {} as JSON with an \"alerts\" array; each \
             alert has alert_type, severity, predicted_risk, message, crop_impact, \
             time_window, recommended_actions, and confidence fields. Focus on \
             actionable, time-sensitive predictions farmers can act upon \
             immediately.",
            weather.temp,
            weather.humidity,
            weather.rainfall,
            weather.wind_speed,
            weather.condition,
            crop_list,
            language.name(),
        );

        let payload: PredictiveAlertsPayload = self.generate(prompt).await?;
        Ok(payload.alerts)
    }

    /// Ask the model for a soil health report with crop recommendations.
    pub async fn soil_advice(
        &self,
        values: &SoilTestValues,
        language: Language,
    ) -> AppResult<SoilAdvice> {
        let fmt_opt = |v: Option<f64>| {
            v.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
        };

        let prompt = format!(
            "You are an expert agricultural soil scientist and agronomist. \
             Analyze the following soil test results and provide comprehensive \
             recommendations.\n\n\
             Soil Test Results:\n\
             - pH: {}\n\
             - Nitrogen: {} kg/ha\n\
             - Phosphorus: {} kg/ha\n\
             - Potassium: {} kg/ha\n\
             - Organic Matter: {}%\n\
             - Moisture: {}%\n\
             - Texture: {}\n\n\
             Provide your analysis in {} as JSON with overall_health, \
             recommendations (crop, suitability, reason, expected_yield, \
             planting_season), improvements (action, priority, description, \
             materials, timeline), and summary fields. Consider crop rotation \
             benefits, local farming practices in India, and cost-effective \
             solutions for smallholder farmers.",
            values.ph,
            fmt_opt(values.nutrients.nitrogen),
            fmt_opt(values.nutrients.phosphorus),
            fmt_opt(values.nutrients.potassium),
            values
                .organic_matter
                .map(|v| v.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            values
                .moisture
                .map(|v| v.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            values.texture.as_deref().unwrap_or("N/A"),
            language.name(),
        );

        self.generate(prompt).await
    }

    /// Send a prompt and parse the JSON object embedded in the reply text.
    async fn generate<T: serde::de::DeserializeOwned>(&self, prompt: String) -> AppResult<T> {
        let url = format!("{}/v1/generate", self.api_endpoint);
        let request = GenerateRequest {
            model: &self.model,
            prompt,
        };

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::AdviceServiceError(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::AdviceServiceError(format!(
                "{} - {}",
                status, body
            )));
        }

        let data: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::AdviceServiceError(format!("malformed response: {}", e)))?;

        let json = extract_json_object(&data.text).ok_or_else(|| {
            AppError::AdviceServiceError("no JSON object in model reply".to_string())
        })?;

        serde_json::from_str(json)
            .map_err(|e| AppError::AdviceServiceError(format!("unparseable model JSON: {}", e)))
    }
}

/// Slice out the outermost brace-delimited object from model prose
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
