//! Domain layer for nalssi
//!
//! Contains core business objects, value objects, and domain errors for the
//! Korean weather-query assistant. This layer has no I/O dependencies and
//! defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
