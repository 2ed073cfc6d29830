//! HTTP handlers for crop health endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::{known_crops, CropHealthAnalysis, WeatherObservation};

use crate::error::AppResult;
use crate::services::crop_health::{CropHealthCheck, CropHealthService, HealthCheckInput};
use crate::AppState;

/// Result of running a health check
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub check_id: Uuid,
    pub weather: WeatherObservation,
    pub analysis: CropHealthAnalysis,
}

/// Run a crop health check for a location and persist the result
pub async fn run_health_check(
    State(state): State<AppState>,
    Json(input): Json<HealthCheckInput>,
) -> AppResult<Json<HealthCheckResponse>> {
    let weather_service = state.weather_service();
    let weather = weather_service
        .fetch_observation(input.latitude, input.longitude)
        .await?;

    let service = CropHealthService::new(state.db);
    let (analysis, record) = service.run_check(&input, &weather, Utc::now()).await?;

    Ok(Json(HealthCheckResponse {
        check_id: record.id,
        weather,
        analysis,
    }))
}

/// Get a stored health check by ID
pub async fn get_health_check(
    State(state): State<AppState>,
    Path(check_id): Path<Uuid>,
) -> AppResult<Json<CropHealthCheck>> {
    let service = CropHealthService::new(state.db);
    let record = service.get_check(check_id).await?;
    Ok(Json(record))
}

/// Query parameters for health check history
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub crop: Option<String>,
    pub limit: Option<i64>,
}

/// List recent health checks
pub async fn get_health_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<CropHealthCheck>>> {
    let service = CropHealthService::new(state.db);
    let limit = query.limit.unwrap_or(20).clamp(1, 100);
    let records = service.history(query.crop.as_deref(), limit).await?;
    Ok(Json(records))
}

/// List crops with explicit parameter profiles
pub async fn list_known_crops() -> Json<Vec<&'static str>> {
    Json(known_crops())
}
