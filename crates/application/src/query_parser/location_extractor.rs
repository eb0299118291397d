//! Location-entity extraction from Korean weather queries
//!
//! Collects location-tagged entity spans, falling back to a fixed
//! allow-list of domestic cities when the recognizer tags nothing. The
//! recognizer is unreliable on informal short text; the keyword fallback
//! guarantees recall for a known closed set of cities at the cost of
//! missing unlisted ones.

use domain::RecognizedEntity;
use tracing::debug;

/// Fallback allow-list of domestic city names
const LOCATION_KEYWORDS: [&str; 9] = [
    "서울", "부산", "인천", "대구", "광주", "대전", "울산", "세종", "제주",
];

/// Extract candidate location names from entities and query tokens
///
/// Returns `None` when neither the recognizer nor the keyword fallback
/// finds anything; otherwise an ordered list whose first element is the
/// primary candidate.
pub fn extract_locations(entities: &[RecognizedEntity], query: &str) -> Option<Vec<String>> {
    let mut locations: Vec<String> = entities
        .iter()
        .filter(|e| e.label.is_location())
        .map(|e| e.text.clone())
        .collect();

    if locations.is_empty() {
        // Korean particles attach directly to nouns ("서울의", "제주도"),
        // so a token matches a known city when it starts with the city
        // name. The city name itself is collected, not the raw token.
        for token in query.split_whitespace() {
            if let Some(city) = LOCATION_KEYWORDS.iter().find(|c| token.starts_with(*c)) {
                debug!(token = %token, city = %city, "Location matched via keyword fallback");
                locations.push((*city).to_string());
            }
        }
    }

    if locations.is_empty() {
        None
    } else {
        Some(locations)
    }
}
