//! Korean response templates
//!
//! Pure string formatting for the user-facing answer. The orchestrator
//! maps absent `ParsedQuery` fields and fetch failures to these fixed
//! fallback strings.

use crate::ports::DailySummary;

/// Shown when no location could be extracted from the query
pub const LOCATION_NOT_FOUND: &str = "위치 정보를 추출할 수 없습니다.";

/// Shown when the forecast window does not cover the requested date
pub const FORECAST_UNAVAILABLE: &str = "해당 날짜의 날씨 정보를 찾을 수 없습니다.";

/// Shown when the weather fetch itself failed
pub const FETCH_FAILED: &str = "날씨 정보를 가져오는데 실패했습니다.";

/// Render the answer sentence for a resolved forecast
#[must_use]
pub fn render_answer(location: &str, summary: &DailySummary) -> String {
    format!(
        "{} {location}의 날씨는 {}, 최고기온 {:.1}°C, 최저기온 {:.1}°C입니다.",
        summary.date.format("%Y-%m-%d"),
        summary.condition,
        summary.temperature_max,
        summary.temperature_min,
    )
}
