//! Parse result for one weather query

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// The outcome of parsing one natural-language weather query.
///
/// Constructed fresh per query and never mutated afterward. Every field is
/// optional: absence means the corresponding extraction or resolution step
/// found nothing, never that an error occurred.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// The target date, normalized to a calendar day
    pub date: Option<NaiveDate>,
    /// The location text as it was extracted from the query
    pub raw_location: Option<String>,
    /// Coordinates resolved from `raw_location`, when geocoding succeeded
    pub coordinates: Option<GeoLocation>,
}

impl ParsedQuery {
    /// Whether a usable (date-independent) location was resolved
    #[must_use]
    pub const fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }
}
