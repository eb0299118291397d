//! Application services

pub mod response;
mod weather_query_service;

pub use weather_query_service::WeatherQueryService;
