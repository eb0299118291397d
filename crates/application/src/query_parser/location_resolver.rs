//! Candidate location validation against the geocoding capability

use std::sync::Arc;

use domain::GeoLocation;
use tracing::{debug, warn};

use crate::ports::GeocodingPort;

/// Validates a candidate location string by geocoding it
///
/// Exactly one external call per `resolve` invocation; no retry, no
/// caching. A failed lookup is never an error for the caller, only
/// absence.
pub struct LocationResolver {
    geocoder: Arc<dyn GeocodingPort>,
}

impl std::fmt::Debug for LocationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationResolver").finish_non_exhaustive()
    }
}

impl LocationResolver {
    /// Create a resolver over a geocoding port
    pub fn new(geocoder: Arc<dyn GeocodingPort>) -> Self {
        Self { geocoder }
    }

    /// Resolve a candidate location name to coordinates
    ///
    /// Lookup errors and no-match results are absorbed to `None`.
    pub async fn resolve(&self, candidate: &str) -> Option<GeoLocation> {
        match self.geocoder.geocode(candidate).await {
            Ok(Some(location)) => {
                debug!(candidate = %candidate, location = %location, "Geocoded location");
                Some(location)
            }
            Ok(None) => {
                debug!(candidate = %candidate, "Geocoder found no match");
                None
            }
            Err(e) => {
                warn!(candidate = %candidate, error = %e, "Geocoding failed");
                None
            }
        }
    }
}
