//! Soil test service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::{soil_health_status, validation, SoilHealthStatus, SoilTestValues};

use crate::error::{AppError, AppResult};

/// Service for recording soil tests and their health classification
#[derive(Clone)]
pub struct SoilService {
    db: PgPool,
}

/// Input for recording a soil test
#[derive(Debug, Deserialize)]
pub struct SoilTestInput {
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    #[serde(flatten)]
    pub values: SoilTestValues,
}

/// Stored soil test record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SoilTest {
    pub id: Uuid,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub ph: f64,
    pub nitrogen: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
    pub organic_matter: Option<Decimal>,
    pub moisture: Option<Decimal>,
    pub texture: Option<String>,
    pub health_status: String,
    pub created_at: DateTime<Utc>,
}

impl SoilService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a soil test, classifying its health on the way in
    pub async fn record_test(&self, input: &SoilTestInput) -> AppResult<SoilTest> {
        validation::validate_soil_test(&input.values)
            .map_err(|msg| AppError::invalid("values", msg))?;

        let status = soil_health_status(input.values.ph, &input.values.nutrients);

        let record = sqlx::query_as::<_, SoilTest>(
            r#"
            INSERT INTO soil_tests (
                latitude, longitude, ph, nitrogen, phosphorus, potassium,
                organic_matter, moisture, texture, health_status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, latitude, longitude, ph, nitrogen, phosphorus, potassium,
                      organic_matter, moisture, texture, health_status, created_at
            "#,
        )
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(input.values.ph)
        .bind(input.values.nutrients.nitrogen)
        .bind(input.values.nutrients.phosphorus)
        .bind(input.values.nutrients.potassium)
        .bind(input.values.organic_matter)
        .bind(input.values.moisture)
        .bind(&input.values.texture)
        .bind(status_label(status))
        .fetch_one(&self.db)
        .await?;

        Ok(record)
    }

    /// List recent soil tests
    pub async fn list_tests(&self, limit: i64) -> AppResult<Vec<SoilTest>> {
        let records = sqlx::query_as::<_, SoilTest>(
            r#"
            SELECT id, latitude, longitude, ph, nitrogen, phosphorus, potassium,
                   organic_matter, moisture, texture, health_status, created_at
            FROM soil_tests
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }

    /// Latest recorded soil test, if any
    pub async fn latest_test(&self) -> AppResult<Option<SoilTest>> {
        let record = sqlx::query_as::<_, SoilTest>(
            r#"
            SELECT id, latitude, longitude, ph, nitrogen, phosphorus, potassium,
                   organic_matter, moisture, texture, health_status, created_at
            FROM soil_tests
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.db)
        .await?;

        Ok(record)
    }
}

fn status_label(status: SoilHealthStatus) -> &'static str {
    match status {
        SoilHealthStatus::Excellent => "excellent",
        SoilHealthStatus::Good => "good",
        SoilHealthStatus::Fair => "fair",
        SoilHealthStatus::Poor => "poor",
    }
}
