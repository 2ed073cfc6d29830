//! Route definitions for the CropSense advisory backend

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/weather", weather_routes())
        .nest("/crops", crop_routes())
        .nest("/soil", soil_routes())
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::get_current_weather))
        .route("/predictive", get(handlers::get_predictive_alerts))
        .route("/snapshots", get(handlers::get_weather_snapshots))
}

/// Crop health routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_known_crops))
        .route(
            "/health-checks",
            get(handlers::get_health_history).post(handlers::run_health_check),
        )
        .route("/health-checks/:check_id", get(handlers::get_health_check))
}

/// Soil routes
fn soil_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tests",
            get(handlers::list_soil_tests).post(handlers::record_soil_test),
        )
        .route("/recommendations", get(handlers::get_soil_recommendations))
}
