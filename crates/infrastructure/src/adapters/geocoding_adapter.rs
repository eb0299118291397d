//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use application::{ApplicationError, GeocodingPort};
use async_trait::async_trait;
use domain::GeoLocation;
use integration_geocoding::{
    GeocodeClient, GeocodingError, NominatimClient, NominatimConfig, Place,
};
use tracing::{debug, instrument};

/// Adapter for geocoding lookups using the Nominatim API
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: NominatimClient,
}

impl GeocodingAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration geocoding error to application error
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::ConnectionFailed(e)
            | GeocodingError::RequestFailed(e)
            | GeocodingError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            GeocodingError::ParseError(e) => ApplicationError::Internal(e),
            GeocodingError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert a geocoded place to a validated `GeoLocation`
    fn map_place(place: &Place) -> Result<GeoLocation, ApplicationError> {
        GeoLocation::new(place.latitude, place.longitude).map_err(ApplicationError::from)
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, place: &str) -> Result<Option<GeoLocation>, ApplicationError> {
        let result = self.client.lookup(place).await.map_err(Self::map_error)?;

        match result {
            Some(found) => {
                debug!(place = %place, display_name = %found.display_name, "Geocoded place");
                Self::map_place(&found).map(Some)
            }
            None => {
                debug!(place = %place, "No geocoding match");
                Ok(None)
            }
        }
    }
}
