//! Date-phrase extraction from Korean weather queries
//!
//! Maps relative-date keywords and DATE-tagged entity spans to concrete
//! calendar dates. Absence is signaled by `None`, never by an error.

use chrono::{Datelike, Duration, Local, NaiveDate};
use domain::RecognizedEntity;
use tracing::debug;

const TODAY: &str = "오늘";
const TOMORROW: &str = "내일";
const DAY_AFTER_TOMORROW: &str = "모레";
const IN_THREE_DAYS: &str = "글피";
const WEEKEND: &str = "주말";

/// Resolution rule for one date keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateKeyword {
    /// Fixed day offset from today
    Offset(i64),
    /// Next occurrence of Saturday (today when today is Saturday)
    Weekend,
}

/// Exact-match lookup in the static keyword table
fn lookup_keyword(token: &str) -> Option<DateKeyword> {
    match token {
        TODAY => Some(DateKeyword::Offset(0)),
        TOMORROW => Some(DateKeyword::Offset(1)),
        DAY_AFTER_TOMORROW => Some(DateKeyword::Offset(2)),
        IN_THREE_DAYS => Some(DateKeyword::Offset(3)),
        WEEKEND => Some(DateKeyword::Weekend),
        _ => None,
    }
}

/// Extract a target date from a query and its recognized entities
///
/// Priority order: DATE-tagged entity spans first, then an exact-match
/// scan over the query tokens. Returns `None` when nothing matches; the
/// caller decides the default.
pub fn extract_date(query: &str, entities: &[RecognizedEntity]) -> Option<NaiveDate> {
    extract_date_from(query, entities, Local::now().date_naive())
}

/// Deterministic variant with an injected reference date
pub fn extract_date_from(
    query: &str,
    entities: &[RecognizedEntity],
    today: NaiveDate,
) -> Option<NaiveDate> {
    for entity in entities.iter().filter(|e| e.label.is_date()) {
        if let Some(date) = resolve_span(&entity.text, query, today) {
            debug!(span = %entity.text, date = %date, "Resolved date from entity");
            return Some(date);
        }
    }

    for token in query.split_whitespace() {
        if let Some(keyword) = lookup_keyword(token) {
            // Same combination override as the entity path, so a
            // degraded parse (no entities) answers identically
            let date = if token == TOMORROW && query.contains(DAY_AFTER_TOMORROW) {
                today + Duration::days(2)
            } else {
                apply(keyword, today)
            };
            debug!(token = %token, date = %date, "Resolved date from token scan");
            return Some(date);
        }
    }

    debug!(query = %query, "No date keyword found");
    None
}

/// Map a DATE entity span to a date using whole-query context
///
/// The recognizer tags single tokens, so a span reading "내일" inside a
/// query that also carries "모레" ("내일 모레 ...") actually means two
/// days out. The span tag is corrected before the containment checks.
fn resolve_span(span: &str, query: &str, today: NaiveDate) -> Option<NaiveDate> {
    if span.contains(TOMORROW)
        && !span.contains(DAY_AFTER_TOMORROW)
        && query.contains(DAY_AFTER_TOMORROW)
    {
        return Some(today + Duration::days(2));
    }

    // Longest-offset keywords first so "내일 모레" spans resolve to +2
    for keyword in [IN_THREE_DAYS, DAY_AFTER_TOMORROW, TOMORROW, TODAY, WEEKEND] {
        if span.contains(keyword) {
            return lookup_keyword(keyword).map(|k| apply(k, today));
        }
    }

    None
}

fn apply(keyword: DateKeyword, today: NaiveDate) -> NaiveDate {
    match keyword {
        DateKeyword::Offset(days) => today + Duration::days(days),
        DateKeyword::Weekend => upcoming_saturday(today),
    }
}

/// Upcoming Saturday, computed as `today + (5 - weekday + 7) % 7` days
/// with Monday = 0. On a Saturday this yields today, not next week.
fn upcoming_saturday(today: NaiveDate) -> NaiveDate {
    let weekday = i64::from(today.weekday().num_days_from_monday());
    today + Duration::days((5 - weekday).rem_euclid(7))
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use domain::RecognizedEntity;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn tomorrow_token_is_plus_one() {
        let today = date(2026, 8, 24);
        let result = extract_date_from("내일 서울 날씨 어때", &[], today);
        assert_eq!(result, Some(today + Duration::days(1)));
    }

    #[test]
    fn today_token_is_today() {
        let today = date(2026, 8, 24);
        assert_eq!(extract_date_from("오늘 날씨 어때", &[], today), Some(today));
    }

    #[test]
    fn in_three_days_token() {
        let today = date(2026, 8, 24);
        let result = extract_date_from("글피 부산 날씨", &[], today);
        assert_eq!(result, Some(today + Duration::days(3)));
    }

    #[test]
    fn tomorrow_entity_with_day_after_tomorrow_in_query_is_plus_two() {
        let today = date(2026, 8, 24);
        let entities = vec![RecognizedEntity::date("내일", 0)];
        let result = extract_date_from("내일 모레 하와이 날씨는 어떨거 같아", &entities, today);
        assert_eq!(result, Some(today + Duration::days(2)));
    }

    #[test]
    fn tomorrow_entity_without_day_after_tomorrow_is_plus_one() {
        let today = date(2026, 8, 24);
        let entities = vec![RecognizedEntity::date("내일", 0)];
        let result = extract_date_from("내일 서울의 날씨는 어때", &entities, today);
        assert_eq!(result, Some(today + Duration::days(1)));
    }

    #[test]
    fn token_scan_applies_combination_override() {
        // Without entities the token scan hits 내일 first; the whole-query
        // override must still land on +2, matching the entity path
        let today = date(2026, 8, 24);
        let result = extract_date_from("내일 모레 하와이 날씨는 어떨거 같아", &[], today);
        assert_eq!(result, Some(today + Duration::days(2)));
    }

    #[test]
    fn weekend_resolves_to_saturday() {
        // 2026-08-24 is a Monday
        let today = date(2026, 8, 24);
        let result = extract_date_from("주말 부산 날씨는 어떨거 같아", &[], today);
        let saturday = result.expect("weekend should resolve");
        assert_eq!(saturday.weekday(), Weekday::Sat);
        assert_eq!(saturday, date(2026, 8, 29));
    }

    #[test]
    fn weekend_on_saturday_is_same_day() {
        // 2026-08-29 is a Saturday; offset must be 0, never 7
        let saturday = date(2026, 8, 29);
        let result = extract_date_from("주말 날씨 좋아?", &[], saturday);
        assert_eq!(result, Some(saturday));
    }

    #[test]
    fn weekend_on_sunday_is_next_saturday() {
        let sunday = date(2026, 8, 30);
        let result = extract_date_from("주말 날씨", &[], sunday);
        assert_eq!(result, Some(date(2026, 9, 5)));
    }

    #[test]
    fn no_keyword_yields_none() {
        let today = date(2026, 8, 24);
        assert_eq!(extract_date_from("다음달 뉴욕 날씨 어떨까", &[], today), None);
    }

    #[test]
    fn entity_span_takes_priority_over_token_scan() {
        let today = date(2026, 8, 24);
        // Entity carries 모레 even though 내일 appears first in the text
        let entities = vec![RecognizedEntity::date("모레", 3)];
        let result = extract_date_from("내일 모레 날씨", &entities, today);
        assert_eq!(result, Some(today + Duration::days(2)));
    }

    #[test]
    fn unknown_entity_span_falls_back_to_token_scan() {
        let today = date(2026, 8, 24);
        let entities = vec![RecognizedEntity::date("다음달", 0)];
        let result = extract_date_from("다음달 말고 오늘 날씨", &entities, today);
        assert_eq!(result, Some(today));
    }

    #[test]
    fn in_three_days_combination_is_not_overridden() {
        // The combination override is deliberately limited to 내일+모레;
        // a 내일 span next to 글피 still resolves to +1. Unresolved edge
        // case, documenting current behavior rather than a requirement.
        let today = date(2026, 8, 24);
        let entities = vec![RecognizedEntity::date("내일", 0)];
        let result = extract_date_from("내일 글피 날씨", &entities, today);
        assert_eq!(result, Some(today + Duration::days(1)));
    }

    #[test]
    fn upcoming_saturday_every_weekday() {
        // Monday 2026-08-24 through Sunday 2026-08-30
        let expected_offsets = [5, 4, 3, 2, 1, 0, 6];
        for (i, expected) in expected_offsets.iter().enumerate() {
            let day = date(2026, 8, 24) + Duration::days(i as i64);
            assert_eq!(
                upcoming_saturday(day),
                day + Duration::days(*expected),
                "wrong Saturday for {day}"
            );
        }
    }

    #[test]
    fn public_wrapper_uses_current_date() {
        let today = Local::now().date_naive();
        assert_eq!(
            extract_date("오늘 날씨 어때", &[]),
            Some(today)
        );
    }
}
