//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{EntityLabel, GeoLocation, ParsedQuery, RecognizedEntity};
use proptest::prelude::*;

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn serialization_round_trips(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon).unwrap();
            let json = serde_json::to_string(&loc).unwrap();
            let back: GeoLocation = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(loc, back);
        }
    }
}

mod recognized_entity_tests {
    use super::*;

    proptest! {
        #[test]
        fn constructors_preserve_text_and_offset(
            text in "\\PC{1,20}",
            offset in 0usize..10_000
        ) {
            let date = RecognizedEntity::date(text.clone(), offset);
            prop_assert_eq!(date.label, EntityLabel::Date);
            prop_assert_eq!(date.offset, offset);

            let location = RecognizedEntity::location(text.clone(), offset);
            prop_assert_eq!(location.label, EntityLabel::Location);
            prop_assert_eq!(location.text, text);
        }
    }
}

mod parsed_query_tests {
    use super::*;

    proptest! {
        #[test]
        fn coordinates_flag_tracks_presence(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64,
            present in any::<bool>()
        ) {
            let parsed = ParsedQuery {
                date: None,
                raw_location: present.then(|| "서울".to_string()),
                coordinates: present.then(|| GeoLocation::new_unchecked(lat, lon)),
            };
            prop_assert_eq!(parsed.has_coordinates(), present);
        }
    }
}
