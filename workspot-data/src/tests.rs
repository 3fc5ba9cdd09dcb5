//! Unit coverage for place ingestion.
#![forbid(unsafe_code)]

use rstest::rstest;
use serde_json::{Value, json};
use workspot_core::{NoiseBucket, PowerTier};

use crate::{IngestError, IngestSummary, ingest_str, parse_places, places_from_value};

#[rstest]
fn decodes_a_fully_populated_record() {
    let places = parse_places(
        r#"[{
            "id": "abc",
            "title": "Bean There",
            "distance": "0.4",
            "download": 33,
            "wifi": "20",
            "power": "range3",
            "noise_level": "Quiet",
            "type": "coffee shop",
            "coffee": "1",
            "food": "0",
            "outdoor_seating": "1",
            "alcohol": ""
        }]"#,
    )
    .expect("payload should decode");

    let place = &places[0];
    assert_eq!(place.id.as_str(), "abc");
    assert_eq!(place.title.as_deref(), Some("Bean There"));
    assert_eq!(place.distance, Some(0.4));
    assert_eq!(place.download, Some(33.0));
    assert_eq!(place.wifi_speed, Some(20.0));
    assert!(!place.no_wifi);
    assert_eq!(place.power, PowerTier::Range3);
    assert_eq!(place.noise, NoiseBucket::Quiet);
    assert_eq!(place.kind.as_deref(), Some("coffee shop"));
    assert!(place.amenities.coffee);
    assert!(!place.amenities.food);
    assert!(place.amenities.outdoor_seating);
    assert!(!place.amenities.alcohol);
}

#[rstest]
fn empty_record_uses_defaults_and_position_id() {
    let places = parse_places(r#"[{"id": 1}, {}]"#).expect("payload should decode");

    let place = &places[1];
    assert_eq!(place.id.as_str(), "#1");
    assert_eq!(place.title, None);
    assert_eq!(place.download, None);
    assert_eq!(place.power, PowerTier::NoOutlets);
    assert_eq!(place.noise, NoiseBucket::Unknown);
    assert!(place.amenity_names().is_empty());
}

#[rstest]
fn name_and_noise_aliases_are_honoured() {
    let places = parse_places(r#"[{"name": "Library", "noise": "low hum", "outside": true}]"#)
        .expect("payload should decode");

    assert_eq!(places[0].title.as_deref(), Some("Library"));
    assert_eq!(places[0].noise, NoiseBucket::Quiet);
    assert!(places[0].amenities.outdoor_seating);
}

#[rstest]
#[case(r#"{"outdoor_seating": "yes"}"#, false)]
#[case(r#"{"outdoor_seating": 1}"#, true)]
#[case(r#"{"outdoor_seating": "0", "outside": "1"}"#, true)]
fn outdoor_seating_requires_exact_marker(#[case] record: &str, #[case] expected: bool) {
    let places = parse_places(&format!("[{record}]")).expect("payload should decode");
    assert_eq!(places[0].amenities.outdoor_seating, expected);
}

#[rstest]
#[case(json!("None"), PowerTier::Unknown)]
#[case(json!("none"), PowerTier::NoOutlets)]
#[case(json!(""), PowerTier::NoOutlets)]
#[case(json!(null), PowerTier::NoOutlets)]
#[case(json!("pretty good"), PowerTier::Plentiful)]
#[case(json!(3), PowerTier::Unknown)]
#[case(json!(false), PowerTier::Unknown)]
fn power_tokens_follow_classifier(#[case] raw: Value, #[case] expected: PowerTier) {
    let places = places_from_value(json!([{ "power": raw }])).expect("payload should decode");
    assert_eq!(places[0].power, expected);
}

#[rstest]
fn malformed_numbers_are_absent() {
    let places = places_from_value(json!([{ "download": "fast", "distance": [1] }]))
        .expect("payload should decode");
    assert_eq!(places[0].download, None);
    assert_eq!(places[0].distance, None);
}

#[rstest]
fn envelope_object_is_unwrapped() {
    let places = places_from_value(json!({ "places": [{ "id": "x" }], "total": 1 }))
        .expect("envelope should decode");
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].id.as_str(), "x");
}

#[rstest]
fn non_object_records_are_skipped_and_counted() {
    let ingested = ingest_str(r#"[{"id": "a"}, 3, null, {"id": "b"}]"#)
        .expect("payload should decode");

    let ids: Vec<&str> = ingested.places.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(
        ingested.summary,
        IngestSummary {
            records: 4,
            skipped: 2
        }
    );
}

#[rstest]
fn empty_list_decodes_to_no_places() {
    assert!(parse_places("[]").expect("payload should decode").is_empty());
}

#[rstest]
fn invalid_json_is_a_decode_error() {
    let err = parse_places("[{").expect_err("truncated JSON should fail");
    assert!(matches!(err, IngestError::Decode(_)));
}

#[rstest]
#[case(json!(42), "a number")]
#[case(json!("places"), "a string")]
#[case(json!({ "places": "none" }), "an object without a `places` array")]
#[case(json!({ "results": [] }), "an object without a `places` array")]
fn unexpected_shapes_are_rejected(#[case] value: serde_json::Value, #[case] found: &str) {
    let err = places_from_value(value).expect_err("shape should be rejected");
    match err {
        IngestError::UnexpectedShape { found: actual } => assert_eq!(actual, found),
        other => panic!("unexpected error: {other}"),
    }
}
