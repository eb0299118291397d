//! Domain entities - Per-query objects produced by the parsing pipeline

mod parsed_query;
mod recognized_entity;

pub use parsed_query::ParsedQuery;
pub use recognized_entity::{EntityLabel, RecognizedEntity};
