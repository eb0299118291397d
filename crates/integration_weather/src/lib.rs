//! OpenWeatherMap forecast integration
//!
//! HTTP client for the OpenWeatherMap 5-day/3-hour forecast API, plus the
//! per-day aggregation that turns 3-hourly slots into one daily summary.

mod client;
mod models;

pub use client::{OpenWeatherMapClient, OwmConfig, WeatherClient, WeatherError};
pub use models::{DailyWeather, ForecastResponse, ForecastSlot, SlotConditions, SlotMain};
