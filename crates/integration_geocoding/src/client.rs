//! Nominatim search client
//!
//! One GET per lookup against the `/search` endpoint, `limit=1`. Nominatim
//! requires an identifying `User-Agent` on every request.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Geocoding client errors
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the geocoding service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the geocoding service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Geocoding service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Nominatim base URL (default: <https://nominatim.openstreetmap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Identifying User-Agent, mandatory per Nominatim usage policy
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Connection timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    "nalssi".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
        }
    }
}

/// A geocoded place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// The display name the service returned
    pub display_name: String,
}

/// Raw search result entry; Nominatim serializes coordinates as strings
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

/// Geocoding client trait for place-name lookups
#[async_trait]
pub trait GeocodeClient: Send + Sync {
    /// Look up a place name
    ///
    /// Returns `Ok(None)` when the service answered with no match.
    async fn lookup(&self, place: &str) -> Result<Option<Place>, GeocodingError>;
}

/// Nominatim HTTP client implementation
#[derive(Debug)]
pub struct NominatimClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailed` if the HTTP client cannot be initialized.
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailed` if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, GeocodingError> {
        Self::new(NominatimConfig::default())
    }

    fn parse_result(result: &SearchResult) -> Result<Place, GeocodingError> {
        let latitude: f64 = result
            .lat
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid latitude: {}", result.lat)))?;
        let longitude: f64 = result.lon.parse().map_err(|_| {
            GeocodingError::ParseError(format!("Invalid longitude: {}", result.lon))
        })?;

        Ok(Place {
            latitude,
            longitude,
            display_name: result.display_name.clone(),
        })
    }
}

#[async_trait]
impl GeocodeClient for NominatimClient {
    #[instrument(skip(self))]
    async fn lookup(&self, place: &str) -> Result<Option<Place>, GeocodingError> {
        let url = format!("{}/search", self.config.base_url);
        debug!("Geocoding place name");

        let response = self
            .client
            .get(&url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| GeocodingError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(GeocodingError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let results: Vec<SearchResult> = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        match results.first() {
            Some(result) => Self::parse_result(result).map(Some),
            None => Ok(None),
        }
    }
}
