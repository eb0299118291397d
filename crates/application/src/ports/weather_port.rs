//! Weather service port
//!
//! Defines the interface for forecast retrieval used by the orchestrator.

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Aggregated forecast for a single calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// The date the summary covers
    pub date: NaiveDate,
    /// Localized condition description ("맑음", "흐림")
    pub condition: String,
    /// Maximum temperature in Celsius
    pub temperature_max: f64,
    /// Minimum temperature in Celsius
    pub temperature_min: f64,
}

/// Port for weather forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get the aggregated forecast for one day at a location
    ///
    /// Returns `Ok(None)` when the provider's forecast window does not
    /// cover the requested date.
    async fn daily_summary(
        &self,
        location: &GeoLocation,
        date: NaiveDate,
    ) -> Result<Option<DailySummary>, ApplicationError>;
}
