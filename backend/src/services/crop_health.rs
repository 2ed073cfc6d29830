//! Crop health check service

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::{analyze_crop_health, validation, CropHealthAnalysis, WeatherObservation};

use crate::error::{AppError, AppResult};

/// Service for running and recording crop health checks
#[derive(Clone)]
pub struct CropHealthService {
    db: PgPool,
}

/// Input for a crop health check
#[derive(Debug, Deserialize)]
pub struct HealthCheckInput {
    pub crop_name: String,
    pub planting_date: Option<NaiveDate>,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Stored crop health check record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CropHealthCheck {
    pub id: Uuid,
    pub crop_name: String,
    pub planting_date: Option<NaiveDate>,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub observation: serde_json::Value,
    pub analysis: serde_json::Value,
    pub overall_status: String,
    pub created_at: DateTime<Utc>,
}

impl CropHealthService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Run the analysis for a crop under the given observation and persist
    /// the result alongside its inputs.
    pub async fn run_check(
        &self,
        input: &HealthCheckInput,
        weather: &WeatherObservation,
        now: DateTime<Utc>,
    ) -> AppResult<(CropHealthAnalysis, CropHealthCheck)> {
        validation::validate_crop_name(&input.crop_name)
            .map_err(|msg| AppError::invalid("crop_name", msg))?;
        if let Some(planted) = input.planting_date {
            validation::validate_planting_date(planted, now.date_naive())
                .map_err(|msg| AppError::invalid("planting_date", msg))?;
        }
        validation::validate_observation(weather)
            .map_err(|msg| AppError::invalid("observation", msg))?;

        let analysis = analyze_crop_health(&input.crop_name, input.planting_date, weather, now);

        let observation_json = serde_json::to_value(weather)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let analysis_json = serde_json::to_value(&analysis)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let overall_status = serde_json::to_value(analysis.overall_status)
            .map_err(|e| AppError::Internal(e.to_string()))?
            .as_str()
            .unwrap_or("moderate")
            .to_string();

        let record = sqlx::query_as::<_, CropHealthCheck>(
            r#"
            INSERT INTO crop_health_checks (
                crop_name, planting_date, latitude, longitude,
                observation, analysis, overall_status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, crop_name, planting_date, latitude, longitude,
                      observation, analysis, overall_status, created_at
            "#,
        )
        .bind(input.crop_name.trim().to_lowercase())
        .bind(input.planting_date)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(&observation_json)
        .bind(&analysis_json)
        .bind(&overall_status)
        .fetch_one(&self.db)
        .await?;

        Ok((analysis, record))
    }

    /// Get a stored health check by ID
    pub async fn get_check(&self, check_id: Uuid) -> AppResult<CropHealthCheck> {
        let record = sqlx::query_as::<_, CropHealthCheck>(
            r#"
            SELECT id, crop_name, planting_date, latitude, longitude,
                   observation, analysis, overall_status, created_at
            FROM crop_health_checks
            WHERE id = $1
            "#,
        )
        .bind(check_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Health check".to_string()))?;

        Ok(record)
    }

    /// List recent health checks, optionally filtered by crop
    pub async fn history(
        &self,
        crop_name: Option<&str>,
        limit: i64,
    ) -> AppResult<Vec<CropHealthCheck>> {
        let records = match crop_name {
            Some(crop) => {
                sqlx::query_as::<_, CropHealthCheck>(
                    r#"
                    SELECT id, crop_name, planting_date, latitude, longitude,
                           observation, analysis, overall_status, created_at
                    FROM crop_health_checks
                    WHERE crop_name = $1
                    ORDER BY created_at DESC
                    LIMIT $2
                    "#,
                )
                .bind(crop.trim().to_lowercase())
                .bind(limit)
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, CropHealthCheck>(
                    r#"
                    SELECT id, crop_name, planting_date, latitude, longitude,
                           observation, analysis, overall_status, created_at
                    FROM crop_health_checks
                    ORDER BY created_at DESC
                    LIMIT $1
                    "#,
                )
                .bind(limit)
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(records)
    }
}
