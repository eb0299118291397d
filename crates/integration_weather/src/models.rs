//! OpenWeatherMap API response models and daily aggregation

use std::collections::HashMap;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Top-level response of the 5-day/3-hour forecast endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// 3-hourly forecast slots, chronological
    pub list: Vec<ForecastSlot>,
}

/// One 3-hour forecast slot
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSlot {
    /// Forecast time, Unix seconds UTC
    pub dt: i64,
    /// Temperature block
    pub main: SlotMain,
    /// Condition descriptions; the API localizes `description` via `lang`
    pub weather: Vec<SlotConditions>,
}

/// Temperature block of a forecast slot
#[derive(Debug, Clone, Deserialize)]
pub struct SlotMain {
    /// Maximum temperature within the slot, Celsius when `units=metric`
    pub temp_max: f64,
    /// Minimum temperature within the slot
    pub temp_min: f64,
}

/// Condition entry of a forecast slot
#[derive(Debug, Clone, Deserialize)]
pub struct SlotConditions {
    /// Localized condition description ("맑음")
    pub description: String,
}

/// Aggregated forecast for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWeather {
    /// The local calendar day the aggregation covers
    pub date: NaiveDate,
    /// Most frequent condition description across the day's slots
    pub description: String,
    /// Maximum of the slots' `temp_max`
    pub temperature_max: f64,
    /// Minimum of the slots' `temp_min`
    pub temperature_min: f64,
}

impl ForecastResponse {
    /// Aggregate the 3-hourly slots of one calendar day
    ///
    /// Slot timestamps are converted to local time before bucketing, so
    /// `date` means the same local calendar day the query parser works
    /// in. Returns `None` when no slot falls on `date`, i.e. the date is
    /// outside the provider's forecast window.
    #[must_use]
    pub fn summarize(&self, date: NaiveDate) -> Option<DailyWeather> {
        let mut temperature_max = f64::NEG_INFINITY;
        let mut temperature_min = f64::INFINITY;
        let mut descriptions: Vec<&str> = Vec::new();

        for slot in &self.list {
            let slot_date = DateTime::from_timestamp(slot.dt, 0)?
                .with_timezone(&Local)
                .date_naive();
            if slot_date != date {
                continue;
            }
            temperature_max = temperature_max.max(slot.main.temp_max);
            temperature_min = temperature_min.min(slot.main.temp_min);
            if let Some(condition) = slot.weather.first() {
                descriptions.push(&condition.description);
            }
        }

        let description = most_frequent(&descriptions)?;
        Some(DailyWeather {
            date,
            description: description.to_string(),
            temperature_max,
            temperature_min,
        })
    }
}

/// Most frequent entry; ties resolve to the earliest first occurrence
fn most_frequent<'a>(values: &[&'a str]) -> Option<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let best = counts.values().copied().max()?;
    values
        .iter()
        .copied()
        .find(|value| counts.get(value).copied() == Some(best))
}
