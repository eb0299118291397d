//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer over the
//! integration clients, and loads the application configuration.

pub mod adapters;
pub mod config;

pub use adapters::{GeocodingAdapter, RuleRecognizer, WeatherAdapter};
pub use config::AppConfig;
