//! Input adapters for the Workspot engine.
//!
//! Responsibilities:
//! - Decode place records delivered by the upstream places search API.
//! - Normalise stringified numbers and `"1"`-style flags into typed fields.
//! - Classify free-text noise and power values via `workspot-core`.
//!
//! Boundaries:
//! - Do not encode scoring or ranking rules (those live in
//!   `workspot-scorer` and `workspot-rank`).
//! - Perform no I/O; callers hand over JSON text or decoded values.
//!
//! Invariants:
//! - A malformed field never rejects its record; it is treated as absent.
//! - Only records that are not JSON objects are skipped, with a warning.

#![forbid(unsafe_code)]

use log::{debug, warn};
use serde_json::Value;
use thiserror::Error;
use workspot_core::{Amenities, NoiseBucket, Place, PlaceId};

mod fields;

use fields::{Record, exactly_one, first_text, identifier, number, power, text, truthy};

/// Key under which an envelope object carries its place list.
pub const PLACES_KEY: &str = "places";

/// Errors raised while decoding a place payload.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The payload was not valid JSON.
    #[error("failed to decode place JSON: {0}")]
    Decode(#[from] serde_json::Error),
    /// The payload decoded, but held no place list.
    #[error("expected an array of places or an object with a `places` array, found {found}")]
    UnexpectedShape {
        /// Description of the top-level value that was found.
        found: &'static str,
    },
}

/// Counts gathered while decoding a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestSummary {
    /// Entries present in the place list.
    pub records: usize,
    /// Entries skipped because they were not JSON objects.
    pub skipped: usize,
}

/// Places decoded from a payload together with ingestion counts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngestedPlaces {
    /// Decoded places in payload order.
    pub places: Vec<Place>,
    /// Ingestion counts.
    pub summary: IngestSummary,
}

/// Decode places from JSON text.
///
/// # Errors
/// Returns [`IngestError::Decode`] for invalid JSON and
/// [`IngestError::UnexpectedShape`] when no place list is present.
///
/// # Examples
/// ```
/// use workspot_core::{NoiseBucket, PowerTier};
/// use workspot_data::parse_places;
///
/// let places = parse_places(
///     r#"[{"id": 7, "download": "42.5", "power": "range2", "noise_level": "Quiet", "food": "1"}]"#,
/// )?;
/// assert_eq!(places[0].id.as_str(), "7");
/// assert_eq!(places[0].download, Some(42.5));
/// assert_eq!(places[0].power, PowerTier::Range2);
/// assert_eq!(places[0].noise, NoiseBucket::Quiet);
/// assert!(places[0].amenities.food);
/// # Ok::<(), workspot_data::IngestError>(())
/// ```
pub fn parse_places(json: &str) -> Result<Vec<Place>, IngestError> {
    ingest_str(json).map(|ingested| ingested.places)
}

/// Decode places and ingestion counts from JSON text.
///
/// # Errors
/// See [`parse_places`].
pub fn ingest_str(json: &str) -> Result<IngestedPlaces, IngestError> {
    let value: Value = serde_json::from_str(json)?;
    ingest_value(value)
}

/// Decode places from an already parsed JSON value.
///
/// # Errors
/// Returns [`IngestError::UnexpectedShape`] when the value is neither an
/// array nor an object with a `places` array.
pub fn places_from_value(value: Value) -> Result<Vec<Place>, IngestError> {
    ingest_value(value).map(|ingested| ingested.places)
}

/// Decode places and ingestion counts from a parsed JSON value.
///
/// # Errors
/// See [`places_from_value`].
pub fn ingest_value(value: Value) -> Result<IngestedPlaces, IngestError> {
    let entries = place_list(value)?;
    let mut ingested = IngestedPlaces {
        places: Vec::with_capacity(entries.len()),
        summary: IngestSummary {
            records: entries.len(),
            skipped: 0,
        },
    };
    for (index, entry) in entries.iter().enumerate() {
        if let Value::Object(record) = entry {
            ingested.places.push(place_from_record(record, index));
        } else {
            warn!(
                "Skipped place record: index={index} (expected an object, found {})",
                describe(entry)
            );
            ingested.summary.skipped += 1;
        }
    }
    debug!(
        "decoded {} places from {} records",
        ingested.places.len(),
        ingested.summary.records
    );
    Ok(ingested)
}

/// Build a [`Place`] from one upstream record.
///
/// Records without a usable `id` are identified by their list position as
/// `#<index>`. This function is total: every field is optional.
#[must_use]
pub fn place_from_record(record: &Record, index: usize) -> Place {
    let id = identifier(record).unwrap_or_else(|| format!("#{index}"));
    Place {
        id: PlaceId::new(id),
        title: first_text(record, &["title", "name"]).map(str::to_owned),
        distance: number(record, "distance"),
        download: number(record, "download"),
        wifi_speed: number(record, "wifi"),
        no_wifi: truthy(record, "no_wifi"),
        power: power(record),
        noise: first_text(record, &["noise_level", "noise"])
            .map_or(NoiseBucket::Unknown, NoiseBucket::classify),
        kind: text(record, "type").map(str::to_owned),
        amenities: Amenities {
            coffee: truthy(record, "coffee"),
            food: truthy(record, "food"),
            outdoor_seating: exactly_one(record, "outdoor_seating") || truthy(record, "outside"),
            alcohol: truthy(record, "alcohol"),
        },
    }
}

fn place_list(value: Value) -> Result<Vec<Value>, IngestError> {
    match value {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut envelope) => match envelope.remove(PLACES_KEY) {
            Some(Value::Array(entries)) => Ok(entries),
            _ => Err(IngestError::UnexpectedShape {
                found: "an object without a `places` array",
            }),
        },
        other => Err(IngestError::UnexpectedShape {
            found: describe(&other),
        }),
    }
}

const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests;
