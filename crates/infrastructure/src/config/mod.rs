//! Application configuration
//!
//! Loaded from a TOML file with `NALSSI__`-prefixed environment variable
//! overrides (e.g. `NALSSI__WEATHER__API_KEY`). Required fields are
//! validated at load time; configuration problems are the only errors
//! allowed to propagate out of startup.

use std::path::Path;

use application::ApplicationError;
use integration_geocoding::NominatimConfig;
use integration_weather::OwmConfig;
use serde::{Deserialize, Serialize};

/// Recognizer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Custom place-name patterns registered at recognizer construction,
    /// whitelisting foreign locations the built-in lexicon lacks
    #[serde(default = "default_extra_locations")]
    pub extra_locations: Vec<String>,
}

fn default_extra_locations() -> Vec<String> {
    vec!["하와이".to_string(), "LA".to_string(), "뉴욕".to_string()]
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            extra_locations: default_extra_locations(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenWeatherMap client settings (API key is required)
    pub weather: OwmConfig,

    /// Nominatim client settings
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Entity recognizer settings
    #[serde(default)]
    pub recognizer: RecognizerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` when the file cannot be
    /// read, the contents do not deserialize, or validation fails.
    pub fn load(path: &Path) -> Result<Self, ApplicationError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix("NALSSI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        let app_config: Self = settings
            .try_deserialize()
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        app_config.validate()?;
        Ok(app_config)
    }

    /// Validate required fields
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` when the weather API key
    /// is missing or empty.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.weather.api_key.trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "weather.api_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
