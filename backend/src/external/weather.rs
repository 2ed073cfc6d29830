//! Weather API client
//!
//! Integrates with OpenWeatherMap for current conditions and the short-range
//! forecast. The two calls are folded into one [`WeatherObservation`]: current
//! readings plus rainfall summed over the next eight 3-hour forecast slots.

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::WeatherObservation;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    weather: Vec<OwmWeather>,
    main: OwmMain,
    wind: Option<OwmWind>,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch an observation for GPS coordinates: current conditions plus
    /// rainfall accumulated over the next 24 hours of forecast.
    pub async fn get_observation(
        &self,
        latitude: Decimal,
        longitude: Decimal,
    ) -> AppResult<WeatherObservation> {
        let current = self.fetch_current(latitude, longitude).await?;
        let rainfall = self.fetch_forecast_rainfall(latitude, longitude).await?;

        let weather = current.weather.first();

        Ok(WeatherObservation {
            temp: current.main.temp,
            humidity: current.main.humidity,
            rainfall,
            wind_speed: current.wind.map(|w| w.speed).unwrap_or(0.0),
            condition: weather.map(|w| w.main.clone()).unwrap_or_default(),
            description: weather.map(|w| w.description.clone()).unwrap_or_default(),
        })
    }

    async fn fetch_current(
        &self,
        latitude: Decimal,
        longitude: Decimal,
    ) -> AppResult<OwmCurrentResponse> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, latitude, longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| AppError::WeatherServiceUnavailable)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather API error: {} - {}", status, body);
            return Err(AppError::WeatherServiceUnavailable);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse weather response: {}", e)))
    }

    /// Sum forecast rainfall over the next eight 3-hour slots (24 hours)
    async fn fetch_forecast_rainfall(
        &self,
        latitude: Decimal,
        longitude: Decimal,
    ) -> AppResult<f64> {
        let url = format!(
            "{}/forecast?lat={}&lon={}&appid={}&units=metric&cnt=8",
            self.base_url, latitude, longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| AppError::WeatherServiceUnavailable)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather forecast API error: {} - {}", status, body);
            return Err(AppError::WeatherServiceUnavailable);
        }

        let data: OwmForecastResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse forecast response: {}", e)))?;

        Ok(data
            .list
            .iter()
            .filter_map(|item| item.rain.as_ref().and_then(|r| r.three_hour))
            .sum())
    }
}
