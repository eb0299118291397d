//! Recognized entity produced by entity recognition over a query

use serde::{Deserialize, Serialize};

/// Semantic label assigned to a recognized text span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    /// A date expression ("내일", "주말")
    Date,
    /// A place name ("서울", "하와이")
    Location,
    /// Any other label the recognizer emits
    Other(String),
}

impl EntityLabel {
    /// Whether this label marks a date expression
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date)
    }

    /// Whether this label marks a place name
    #[must_use]
    pub const fn is_location(&self) -> bool {
        matches!(self, Self::Location)
    }
}

/// A (label, text span) pair produced by running entity recognition
/// over one query. Ephemeral, derived per query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedEntity {
    /// Semantic label of the span
    pub label: EntityLabel,
    /// The matched text, exactly as it appears in the query
    pub text: String,
    /// Byte offset of the span start within the query
    pub offset: usize,
}

impl RecognizedEntity {
    /// Create an entity with the given label
    pub fn new(label: EntityLabel, text: impl Into<String>, offset: usize) -> Self {
        Self {
            label,
            text: text.into(),
            offset,
        }
    }

    /// Convenience constructor for a date entity
    pub fn date(text: impl Into<String>, offset: usize) -> Self {
        Self::new(EntityLabel::Date, text, offset)
    }

    /// Convenience constructor for a location entity
    pub fn location(text: impl Into<String>, offset: usize) -> Self {
        Self::new(EntityLabel::Location, text, offset)
    }
}
