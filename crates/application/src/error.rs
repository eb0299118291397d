//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Per-query extraction and resolution failures are not errors: they are
/// absorbed into absent `ParsedQuery` fields. This type covers the
/// remaining failure modes, mostly construction-time configuration
/// problems and external service faults surfaced by the adapters.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error (geocoding, weather API)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error (missing API key, unusable client)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
