//! Geocoding port
//!
//! Defines the interface for resolving a place name to coordinates.

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place name to coordinates
    ///
    /// Returns `Ok(None)` when the service answered but found no match.
    /// Transport and service failures are returned as errors; the caller
    /// (`LocationResolver`) decides how to absorb them.
    async fn geocode(&self, place: &str) -> Result<Option<GeoLocation>, ApplicationError>;
}
