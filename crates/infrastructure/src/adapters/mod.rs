//! Adapters implementing the application ports

mod geocoding_adapter;
mod recognizer;
mod weather_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use recognizer::RuleRecognizer;
pub use weather_adapter::WeatherAdapter;
