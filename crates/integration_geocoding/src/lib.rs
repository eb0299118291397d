//! Nominatim geocoding integration
//!
//! HTTP client for the OpenStreetMap Nominatim search API, used to resolve
//! free-form place names to coordinates.

mod client;

pub use client::{GeocodeClient, GeocodingError, NominatimClient, NominatimConfig, Place};
