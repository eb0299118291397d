//! Entity recognizer port
//!
//! Defines the interface for named-entity recognition over a query string.
//! The recognizer is a pre-trained external capability; the core only
//! consumes its (label, span) output. Custom literal patterns (foreign
//! place names the trained vocabulary lacks) are registered on the
//! production adapter at construction time, not through this trait.

use domain::RecognizedEntity;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for named-entity recognition
///
/// Recognition is local and CPU-bound, so the trait is synchronous.
/// Implementations must be safe for concurrent read-only use: no state
/// may be mutated after construction.
#[cfg_attr(test, automock)]
pub trait EntityRecognizerPort: Send + Sync {
    /// Run entity recognition over a query
    ///
    /// Returns recognized entities in query order. An empty vector is a
    /// normal outcome for text the recognizer cannot tag.
    fn recognize(&self, query: &str) -> Result<Vec<RecognizedEntity>, ApplicationError>;
}
