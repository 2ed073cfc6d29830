//! HTTP handlers for soil endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use shared::Language;

use crate::error::{AppError, AppResult};
use crate::external::advice::SoilAdvice;
use crate::services::soil::{SoilService, SoilTest, SoilTestInput};
use crate::AppState;

/// Record a soil test and classify its health
pub async fn record_soil_test(
    State(state): State<AppState>,
    Json(input): Json<SoilTestInput>,
) -> AppResult<Json<SoilTest>> {
    let service = SoilService::new(state.db);
    let record = service.record_test(&input).await?;
    Ok(Json(record))
}

/// Query parameters for listing soil tests
#[derive(Debug, Deserialize)]
pub struct SoilListQuery {
    pub limit: Option<i64>,
}

/// List recent soil tests
pub async fn list_soil_tests(
    State(state): State<AppState>,
    Query(query): Query<SoilListQuery>,
) -> AppResult<Json<Vec<SoilTest>>> {
    let service = SoilService::new(state.db);
    let limit = query.limit.unwrap_or(20).clamp(1, 100);
    let records = service.list_tests(limit).await?;
    Ok(Json(records))
}

/// Query parameters for soil recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub language: Option<Language>,
}

/// Model-generated recommendations based on the latest soil test
pub async fn get_soil_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<SoilAdvice>> {
    let service = SoilService::new(state.db.clone());
    let latest = service
        .latest_test()
        .await?
        .ok_or_else(|| AppError::NotFound("Soil test".to_string()))?;

    let values = shared::SoilTestValues {
        ph: latest.ph,
        nutrients: shared::SoilNutrients {
            nitrogen: latest.nitrogen,
            phosphorus: latest.phosphorus,
            potassium: latest.potassium,
        },
        organic_matter: latest.organic_matter,
        moisture: latest.moisture,
        texture: latest.texture.clone(),
    };

    let advice = state
        .advice_client()
        .soil_advice(&values, query.language.unwrap_or_default())
        .await?;

    Ok(Json(advice))
}
