//! Core domain types for the Workspot engine.
//!
//! A [`Place`] is the normalised form of a venue returned by a places search.
//! The [`Scorer`] trait turns a place into a [`ScoreResult`] breakdown, and
//! [`score_places`] attaches those results to a list so rankers and metrics
//! can derive read-only views from it.
//!
//! Noise, power and amenity signals arrive upstream as loosely typed text.
//! [`NoiseBucket`] and [`PowerTier`] capture the recognised values so every
//! consumer shares a single interpretation.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod noise;
pub mod place;
pub mod power;
pub mod score;
pub mod scored;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use noise::NoiseBucket;
pub use place::{Amenities, Place, PlaceId};
pub use power::PowerTier;
pub use score::{Factor, FactorKind, MAX_SCORE, ScoreResult, round_to_tenth};
pub use scored::{ScoredPlace, score_places};
pub use scorer::Scorer;
