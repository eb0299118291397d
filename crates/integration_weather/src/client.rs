//! OpenWeatherMap forecast client
//!
//! HTTP client for the OpenWeatherMap 5-day/3-hour forecast API.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{DailyWeather, ForecastResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The API key is missing or empty
    #[error("API key is not set; provide a non-empty OpenWeatherMap API key")]
    MissingApiKey,

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The API key was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Failed to parse response from the weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
///
/// The API key is required and validated when the client is constructed;
/// there is no post-construction mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwmConfig {
    /// OpenWeatherMap API key (required, non-empty)
    pub api_key: String,

    /// API base URL (default: <http://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Measurement units (default: metric, i.e. Celsius)
    #[serde(default = "default_units")]
    pub units: String,

    /// Response language for condition descriptions (default: kr)
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_base_url() -> String {
    "http://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_lang() -> String {
    "kr".to_string()
}

impl OwmConfig {
    /// Create a configuration with defaults and the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            units: default_units(),
            lang: default_lang(),
        }
    }
}

/// Weather client trait for fetching forecast data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch the raw 5-day/3-hour forecast for a location
    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherError>;

    /// Fetch and aggregate the forecast for one calendar day
    ///
    /// Returns `Ok(None)` when the forecast window does not cover `date`.
    async fn daily_weather(
        &self,
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
    ) -> Result<Option<DailyWeather>, WeatherError> {
        let response = self.forecast(latitude, longitude).await?;
        Ok(response.summarize(date))
    }
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: OwmConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when the configured key is empty, or
    /// `ConnectionFailed` if the HTTP client cannot be initialized.
    pub fn new(config: OwmConfig) -> Result<Self, WeatherError> {
        if config.api_key.trim().is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!("{}/forecast", self.config.base_url);
        debug!("Fetching forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.config.api_key.clone()),
                ("units", self.config.units.clone()),
                ("lang", self.config.lang.clone()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(WeatherError::Unauthorized(format!("HTTP {status}")));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}
