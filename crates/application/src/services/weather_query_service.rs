//! Weather query orchestration
//!
//! Calls the query parser, then the weather port, then the response
//! templates. Reads absent `ParsedQuery` fields and substitutes the fixed
//! fallback strings; no per-query failure surfaces as an error.

use std::sync::Arc;

use chrono::Local;
use domain::ParsedQuery;
use tracing::{instrument, warn};

use crate::ports::WeatherPort;
use crate::query_parser::QueryParser;
use crate::services::response;

/// Orchestrates parse → fetch → render for one query
pub struct WeatherQueryService {
    parser: QueryParser,
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for WeatherQueryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherQueryService").finish_non_exhaustive()
    }
}

impl WeatherQueryService {
    /// Create a service over a parser and a weather port
    pub fn new(parser: QueryParser, weather: Arc<dyn WeatherPort>) -> Self {
        Self { parser, weather }
    }

    /// Parse a query without fetching weather (debugging aid)
    pub async fn parse(&self, query: &str) -> ParsedQuery {
        self.parser.parse(query).await
    }

    /// Answer a natural-language weather query with a rendered sentence
    ///
    /// A query without a resolvable location short-circuits to the
    /// location fallback string. A missing date defaults to today.
    #[instrument(skip(self))]
    pub async fn answer(&self, query: &str) -> String {
        let parsed = self.parser.parse(query).await;

        let Some(coordinates) = parsed.coordinates else {
            return response::LOCATION_NOT_FOUND.to_string();
        };
        // Coordinates only exist when a raw location was extracted
        let location = parsed.raw_location.unwrap_or_default();
        let date = parsed.date.unwrap_or_else(|| Local::now().date_naive());

        match self.weather.daily_summary(&coordinates, date).await {
            Ok(Some(summary)) => response::render_answer(&location, &summary),
            Ok(None) => response::FORECAST_UNAVAILABLE.to_string(),
            Err(e) => {
                warn!(error = %e, location = %location, "Weather fetch failed");
                response::FETCH_FAILED.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::{GeoLocation, RecognizedEntity};

    use crate::error::ApplicationError;
    use crate::ports::{
        DailySummary, MockEntityRecognizerPort, MockGeocodingPort, MockWeatherPort,
    };

    use super::*;

    fn service(
        recognizer: MockEntityRecognizerPort,
        geocoder: MockGeocodingPort,
        weather: MockWeatherPort,
    ) -> WeatherQueryService {
        let parser = QueryParser::new(Arc::new(recognizer), Arc::new(geocoder));
        WeatherQueryService::new(parser, Arc::new(weather))
    }

    fn seoul_recognizer() -> MockEntityRecognizerPort {
        let mut recognizer = MockEntityRecognizerPort::new();
        recognizer
            .expect_recognize()
            .returning(|_| Ok(vec![RecognizedEntity::location("서울", 3)]));
        recognizer
    }

    fn seoul_geocoder() -> MockGeocodingPort {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_geocode()
            .returning(|_| Ok(Some(GeoLocation::seoul())));
        geocoder
    }

    #[tokio::test]
    async fn answer_with_valid_data_mentions_location_and_condition() {
        let mut weather = MockWeatherPort::new();
        weather.expect_daily_summary().returning(|_, date| {
            Ok(Some(DailySummary {
                date,
                condition: "맑음".into(),
                temperature_max: 25.0,
                temperature_min: 15.0,
            }))
        });

        let svc = service(seoul_recognizer(), seoul_geocoder(), weather);
        let answer = svc.answer("내일 서울의 날씨는 어때").await;
        assert!(answer.contains("서울"));
        assert!(answer.contains("맑음"));
    }

    #[tokio::test]
    async fn answer_without_location_is_fixed_fallback() {
        let mut recognizer = MockEntityRecognizerPort::new();
        recognizer.expect_recognize().returning(|_| Ok(Vec::new()));
        let mut geocoder = MockGeocodingPort::new();
        geocoder.expect_geocode().times(0);
        let mut weather = MockWeatherPort::new();
        weather.expect_daily_summary().times(0);

        let svc = service(recognizer, geocoder, weather);
        let answer = svc.answer("알 수 없는 장소의 날씨는 어때").await;
        assert_eq!(answer, "위치 정보를 추출할 수 없습니다.");
    }

    #[tokio::test]
    async fn fetch_error_renders_error_string() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_daily_summary()
            .returning(|_, _| Err(ApplicationError::ExternalService("HTTP 500".into())));

        let svc = service(seoul_recognizer(), seoul_geocoder(), weather);
        let answer = svc.answer("내일 서울 날씨").await;
        assert_eq!(answer, "날씨 정보를 가져오는데 실패했습니다.");
    }

    #[tokio::test]
    async fn date_outside_forecast_window_renders_unavailable() {
        let mut weather = MockWeatherPort::new();
        weather.expect_daily_summary().returning(|_, _| Ok(None));

        let svc = service(seoul_recognizer(), seoul_geocoder(), weather);
        let answer = svc.answer("글피 서울 날씨").await;
        assert_eq!(answer, "해당 날짜의 날씨 정보를 찾을 수 없습니다.");
    }

    #[tokio::test]
    async fn missing_date_defaults_to_today() {
        let today = Local::now().date_naive();
        let mut weather = MockWeatherPort::new();
        weather
            .expect_daily_summary()
            .withf(move |_, date| *date == today)
            .returning(|_, date| {
                Ok(Some(DailySummary {
                    date,
                    condition: "흐림".into(),
                    temperature_max: 20.0,
                    temperature_min: 12.0,
                }))
            });

        // No date keyword in the query
        let svc = service(seoul_recognizer(), seoul_geocoder(), weather);
        let answer = svc.answer("서울 날씨 알려줘").await;
        assert!(answer.contains("흐림"));
    }

    #[tokio::test]
    async fn parse_is_exposed_for_inspection() {
        let mut weather = MockWeatherPort::new();
        weather.expect_daily_summary().times(0);

        let svc = service(seoul_recognizer(), seoul_geocoder(), weather);
        let parsed = svc.parse("내일 서울 날씨").await;
        assert_eq!(parsed.raw_location.as_deref(), Some("서울"));
        assert_eq!(
            parsed.date,
            Some(Local::now().date_naive() + chrono::Duration::days(1))
        );
        assert_eq!(parsed.coordinates, Some(GeoLocation::seoul()));
    }
}
