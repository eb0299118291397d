//! Port definitions - Interfaces for external capabilities
//!
//! Implemented by adapters in the infrastructure layer, mocked in tests.

mod geocoding_port;
mod recognizer_port;
mod weather_port;

pub use geocoding_port::GeocodingPort;
pub use recognizer_port::EntityRecognizerPort;
pub use weather_port::{DailySummary, WeatherPort};

#[cfg(test)]
pub(crate) use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub(crate) use recognizer_port::MockEntityRecognizerPort;
#[cfg(test)]
pub(crate) use weather_port::MockWeatherPort;
