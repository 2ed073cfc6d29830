//! Weather service: observations, snapshots, and alert generation

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::{
    combine_alerts, generate_alerts, Language, PredictiveAlert, WeatherAlert, WeatherObservation,
};

use crate::error::{AppError, AppResult};
use crate::external::{AdviceClient, WeatherClient};

/// Weather service for fetching observations and managing snapshots
#[derive(Clone)]
pub struct WeatherService {
    db: PgPool,
    weather_client: Option<WeatherClient>,
    advice_client: Option<AdviceClient>,
}

/// Stored weather snapshot record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WeatherSnapshot {
    pub id: Uuid,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub temp: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub wind_speed: f64,
    pub condition: String,
    pub description: String,
    pub alert_count: i32,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl WeatherService {
    /// Create a service without external clients (persistence only)
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            weather_client: None,
            advice_client: None,
        }
    }

    /// Create a service backed by the weather and advice APIs
    pub fn with_clients(
        db: PgPool,
        weather_client: WeatherClient,
        advice_client: AdviceClient,
    ) -> Self {
        Self {
            db,
            weather_client: Some(weather_client),
            advice_client: Some(advice_client),
        }
    }

    /// Fetch a fresh observation for the given coordinates
    pub async fn fetch_observation(
        &self,
        latitude: Decimal,
        longitude: Decimal,
    ) -> AppResult<WeatherObservation> {
        let client = self
            .weather_client
            .as_ref()
            .ok_or_else(|| AppError::Configuration("weather API client not configured".into()))?;

        client.get_observation(latitude, longitude).await
    }

    /// Store an observation as a snapshot row
    pub async fn store_snapshot(
        &self,
        latitude: Decimal,
        longitude: Decimal,
        weather: &WeatherObservation,
        alerts: &[WeatherAlert],
    ) -> AppResult<WeatherSnapshot> {
        let snapshot = sqlx::query_as::<_, WeatherSnapshot>(
            r#"
            INSERT INTO weather_snapshots (
                latitude, longitude, temp, humidity, rainfall, wind_speed,
                condition, description, alert_count, recorded_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, latitude, longitude, temp, humidity, rainfall, wind_speed,
                      condition, description, alert_count, recorded_at, created_at
            "#,
        )
        .bind(latitude)
        .bind(longitude)
        .bind(weather.temp)
        .bind(weather.humidity)
        .bind(weather.rainfall)
        .bind(weather.wind_speed)
        .bind(&weather.condition)
        .bind(&weather.description)
        .bind(alerts.len() as i32)
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await?;

        Ok(snapshot)
    }

    /// Get stored snapshots for a date range
    pub async fn get_snapshots_for_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Vec<WeatherSnapshot>> {
        let snapshots = sqlx::query_as::<_, WeatherSnapshot>(
            r#"
            SELECT id, latitude, longitude, temp, humidity, rainfall, wind_speed,
                   condition, description, alert_count, recorded_at, created_at
            FROM weather_snapshots
            WHERE recorded_at >= $1::date
              AND recorded_at < ($2::date + INTERVAL '1 day')
            ORDER BY recorded_at DESC
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.db)
        .await?;

        Ok(snapshots)
    }

    /// Fetch an observation, generate alerts, and record a snapshot
    pub async fn fetch_and_store(
        &self,
        latitude: Decimal,
        longitude: Decimal,
    ) -> AppResult<(WeatherObservation, Vec<WeatherAlert>)> {
        let weather = self.fetch_observation(latitude, longitude).await?;
        let alerts = generate_alerts(&weather);
        self.store_snapshot(latitude, longitude, &weather, &alerts)
            .await?;
        Ok((weather, alerts))
    }

    /// Rule-based alerts merged with model predictions.
    ///
    /// The advice service is best-effort: on failure the rule-based alerts
    /// are still returned, lifted to predictive form.
    pub async fn predictive_alerts(
        &self,
        weather: &WeatherObservation,
        crops: &[String],
        language: Language,
    ) -> AppResult<Vec<PredictiveAlert>> {
        let basic = generate_alerts(weather);

        let predicted = match &self.advice_client {
            Some(client) => match client.predictive_alerts(weather, crops, language).await {
                Ok(alerts) => alerts,
                Err(e) => {
                    tracing::warn!("Predictive alert generation failed: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(combine_alerts(&basic, predicted))
    }
}
