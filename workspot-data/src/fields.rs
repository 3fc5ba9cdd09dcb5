//! Lenient readers for loosely typed upstream fields.
//!
//! The places API stringifies numbers and encodes booleans as `"1"`/`"0"`.
//! These helpers normalise those encodings once, at the boundary. Unexpected
//! values read as absent, except for `power`, where they read as unknown.

use serde_json::{Map, Value};
use workspot_core::PowerTier;

pub(crate) type Record = Map<String, Value>;

/// Read a finite number from a JSON number or a numeric string.
pub(crate) fn number(record: &Record, key: &str) -> Option<f64> {
    let parsed = match record.get(key)? {
        Value::Number(value) => value.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|value| value.is_finite())
}

/// Read a truthy flag.
///
/// `true`, non-zero numbers, and non-empty strings other than `"0"` or
/// `"false"` count as set. Everything else, including arrays and objects,
/// is unset.
pub(crate) fn truthy(record: &Record, key: &str) -> bool {
    match record.get(key) {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(value)) => value.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            !(trimmed.is_empty() || trimmed == "0" || trimmed.eq_ignore_ascii_case("false"))
        }
        _ => false,
    }
}

/// Read a flag that only counts when it is exactly `"1"` (or the number 1).
pub(crate) fn exactly_one(record: &Record, key: &str) -> bool {
    match record.get(key) {
        Some(Value::String(text)) => text == "1",
        Some(Value::Number(value)) => value.as_u64() == Some(1),
        _ => false,
    }
}

/// Read a non-empty string.
pub(crate) fn text<'a>(record: &'a Record, key: &str) -> Option<&'a str> {
    match record.get(key)? {
        Value::String(text) if !text.is_empty() => Some(text.as_str()),
        _ => None,
    }
}

/// Read the `power` field.
///
/// Missing, `null` and empty values classify as absent. A present value that
/// is not a string is [`PowerTier::Unknown`].
pub(crate) fn power(record: &Record) -> PowerTier {
    match record.get("power") {
        None | Some(Value::Null) => PowerTier::classify(None),
        Some(Value::String(token)) => PowerTier::classify(Some(token.as_str())),
        Some(_) => PowerTier::Unknown,
    }
}

/// Read the first non-empty string among `keys`.
pub(crate) fn first_text<'a>(record: &'a Record, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| text(record, key))
}

/// Read an identifier from a string or integer `id` field.
pub(crate) fn identifier(record: &Record) -> Option<String> {
    match record.get("id")? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[rstest]
    #[case(json!({"v": 12.5}), Some(12.5))]
    #[case(json!({"v": "12.5"}), Some(12.5))]
    #[case(json!({"v": " 7 "}), Some(7.0))]
    #[case(json!({"v": ""}), None)]
    #[case(json!({"v": "fast"}), None)]
    #[case(json!({"v": "NaN"}), None)]
    #[case(json!({"v": "inf"}), None)]
    #[case(json!({"v": null}), None)]
    #[case(json!({"v": true}), None)]
    #[case(json!({}), None)]
    fn numbers_accept_numeric_strings(#[case] raw: Value, #[case] expected: Option<f64>) {
        assert_eq!(number(&record(raw), "v"), expected);
    }

    #[rstest]
    #[case(json!({"f": "1"}), true)]
    #[case(json!({"f": "yes"}), true)]
    #[case(json!({"f": 1}), true)]
    #[case(json!({"f": true}), true)]
    #[case(json!({"f": "0"}), false)]
    #[case(json!({"f": "false"}), false)]
    #[case(json!({"f": ""}), false)]
    #[case(json!({"f": 0}), false)]
    #[case(json!({"f": false}), false)]
    #[case(json!({"f": null}), false)]
    #[case(json!({"f": ["1"]}), false)]
    #[case(json!({}), false)]
    fn truthy_flags(#[case] raw: Value, #[case] expected: bool) {
        assert_eq!(truthy(&record(raw), "f"), expected);
    }

    #[rstest]
    #[case(json!({"f": "1"}), true)]
    #[case(json!({"f": 1}), true)]
    #[case(json!({"f": "yes"}), false)]
    #[case(json!({"f": true}), false)]
    #[case(json!({"f": 2}), false)]
    fn exactly_one_is_strict(#[case] raw: Value, #[case] expected: bool) {
        assert_eq!(exactly_one(&record(raw), "f"), expected);
    }

    #[rstest]
    #[case(json!({"id": "abc"}), Some("abc"))]
    #[case(json!({"id": 42}), Some("42"))]
    #[case(json!({"id": ""}), None)]
    #[case(json!({"id": null}), None)]
    fn identifiers_accept_strings_and_integers(
        #[case] raw: Value,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(identifier(&record(raw)).as_deref(), expected);
    }

    #[rstest]
    #[case(json!({}), PowerTier::NoOutlets)]
    #[case(json!({"power": null}), PowerTier::NoOutlets)]
    #[case(json!({"power": "range2"}), PowerTier::Range2)]
    #[case(json!({"power": 3}), PowerTier::Unknown)]
    #[case(json!({"power": true}), PowerTier::Unknown)]
    #[case(json!({"power": ["range3"]}), PowerTier::Unknown)]
    fn power_separates_absent_from_unexpected(#[case] raw: Value, #[case] expected: PowerTier) {
        assert_eq!(power(&record(raw)), expected);
    }

    #[rstest]
    fn first_text_skips_empty_values() {
        let raw = record(json!({"noise_level": "", "noise": "quiet"}));
        assert_eq!(first_text(&raw, &["noise_level", "noise"]), Some("quiet"));
    }
}
