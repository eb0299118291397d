//! Weather adapter - Implements WeatherPort using integration_weather

use application::{ApplicationError, DailySummary, WeatherPort};
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::GeoLocation;
use integration_weather::{
    DailyWeather, OpenWeatherMapClient, OwmConfig, WeatherClient, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for forecast retrieval using the OpenWeatherMap API
#[derive(Debug)]
pub struct WeatherAdapter {
    client: OpenWeatherMapClient,
}

impl WeatherAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the API key is missing or the
    /// HTTP client fails to initialize.
    pub fn new(config: OwmConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::MissingApiKey | WeatherError::Unauthorized(_) => {
                ApplicationError::Configuration(err.to_string())
            }
            WeatherError::InvalidCoordinates => {
                ApplicationError::Domain(domain::DomainError::InvalidCoordinates)
            }
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert the integration daily aggregate to the port type
    fn map_daily(daily: DailyWeather) -> DailySummary {
        DailySummary {
            date: daily.date,
            condition: daily.description,
            temperature_max: daily.temperature_max,
            temperature_min: daily.temperature_min,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude(), date = %date))]
    async fn daily_summary(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
    ) -> Result<Option<DailySummary>, ApplicationError> {
        let result = self
            .client
            .daily_weather(location.latitude(), location.longitude(), date)
            .await
            .map_err(Self::map_error)?;

        match result {
            Some(daily) => {
                debug!(condition = %daily.description, "Retrieved daily forecast");
                Ok(Some(Self::map_daily(daily)))
            }
            None => {
                debug!("Forecast window does not cover the date");
                Ok(None)
            }
        }
    }
}
