//! Query parser - Turn free text into a (date, location, coordinates) triple
//!
//! This module is split into focused sub-modules:
//! - [`date_extractor`]: relative-date keywords and DATE entity spans
//! - [`location_extractor`]: location entities plus city keyword fallback
//! - [`location_resolver`]: geocoding validation of the primary candidate

pub mod date_extractor;
pub mod location_extractor;
mod location_resolver;

use std::sync::Arc;

use domain::ParsedQuery;
use tracing::{instrument, warn};

pub use location_resolver::LocationResolver;

use crate::ports::{EntityRecognizerPort, GeocodingPort};

/// Parses one query into a [`ParsedQuery`]
///
/// Stateless across calls apart from the shared read-only keyword tables
/// and the process-wide recognizer and geocoder handles. No error escapes
/// [`QueryParser::parse`]; every failure mode degrades to an absent field.
pub struct QueryParser {
    recognizer: Arc<dyn EntityRecognizerPort>,
    resolver: LocationResolver,
}

impl std::fmt::Debug for QueryParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryParser").finish_non_exhaustive()
    }
}

impl QueryParser {
    /// Create a parser over a recognizer and a geocoder
    pub fn new(
        recognizer: Arc<dyn EntityRecognizerPort>,
        geocoder: Arc<dyn GeocodingPort>,
    ) -> Self {
        Self {
            recognizer,
            resolver: LocationResolver::new(geocoder),
        }
    }

    /// Parse a query into date, raw location text, and coordinates
    ///
    /// Entity recognition runs once and feeds both extractors. When the
    /// location extractor yields candidates, the first becomes the raw
    /// location and is handed to the resolver; otherwise both location
    /// fields stay absent.
    #[instrument(skip(self))]
    pub async fn parse(&self, query: &str) -> ParsedQuery {
        let entities = match self.recognizer.recognize(query) {
            Ok(entities) => entities,
            Err(e) => {
                warn!(error = %e, "Entity recognition failed, continuing without entities");
                Vec::new()
            }
        };

        let date = date_extractor::extract_date(query, &entities);

        let raw_location = location_extractor::extract_locations(&entities, query)
            .and_then(|candidates| candidates.into_iter().next());

        let coordinates = match &raw_location {
            Some(candidate) => self.resolver.resolve(candidate).await,
            None => None,
        };

        ParsedQuery {
            date,
            raw_location,
            coordinates,
        }
    }
}
