//! Application layer - Query understanding and orchestration
//!
//! Contains the query-parsing core (date extraction, location extraction,
//! location resolution), the port definitions for external capabilities,
//! and the service that orchestrates parsing, forecast fetching, and
//! response rendering.

pub mod error;
pub mod ports;
pub mod query_parser;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use query_parser::QueryParser;
pub use services::WeatherQueryService;
