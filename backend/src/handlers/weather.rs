//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::{should_send_alert, Language, PredictiveAlert, WeatherAlert, WeatherObservation};

use crate::error::AppResult;
use crate::services::weather::{WeatherService, WeatherSnapshot};
use crate::AppState;

/// Query parameters for a location
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Current weather with rule-based alerts
#[derive(Debug, Serialize)]
pub struct CurrentWeatherResponse {
    pub weather: WeatherObservation,
    pub alerts: Vec<WeatherAlert>,
    pub should_notify: bool,
}

/// Fetch current weather for a location, generating alerts and recording
/// a snapshot.
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<CurrentWeatherResponse>> {
    let service = state.weather_service();
    let (weather, alerts) = service
        .fetch_and_store(query.latitude, query.longitude)
        .await?;
    let should_notify = should_send_alert(&alerts);

    Ok(Json(CurrentWeatherResponse {
        weather,
        alerts,
        should_notify,
    }))
}

/// Query parameters for predictive alerts
#[derive(Debug, Deserialize)]
pub struct PredictiveQuery {
    pub latitude: Decimal,
    pub longitude: Decimal,
    /// Comma-separated crop names
    pub crops: Option<String>,
    pub language: Option<Language>,
}

/// Rule-based alerts merged with model predictions for a location
pub async fn get_predictive_alerts(
    State(state): State<AppState>,
    Query(query): Query<PredictiveQuery>,
) -> AppResult<Json<Vec<PredictiveAlert>>> {
    let crops: Vec<String> = query
        .crops
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    let language = query.language.unwrap_or_default();

    let service = state.weather_service();
    let weather = service
        .fetch_observation(query.latitude, query.longitude)
        .await?;
    let alerts = service.predictive_alerts(&weather, &crops, language).await?;

    Ok(Json(alerts))
}

/// Query parameters for snapshots by date range
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Get stored weather snapshots for a date range
pub async fn get_weather_snapshots(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<Vec<WeatherSnapshot>>> {
    let service = WeatherService::new(state.db);
    let snapshots = service
        .get_snapshots_for_range(query.start_date, query.end_date)
        .await?;
    Ok(Json(snapshots))
}
