//! Facade crate for the Workspot venue scoring engine.
//!
//! This crate re-exports the core place model, the workability scorer, and
//! the rankers and metrics built on top of it. The JSON input adapter sits
//! behind the `ingest` feature.
//!
//! # Examples
//!
//! ```
//! use workspot::{Place, PowerTier, View, WorkabilityScorer, summarize};
//!
//! let places = vec![
//!     Place::new("a").with_download(55.0).with_power(PowerTier::Range3),
//!     Place::new("b").with_download(12.0),
//! ];
//! let scored = WorkabilityScorer::default().score_all(&places);
//! let fastest = View::FastestWifi.rank(&scored);
//!
//! assert_eq!(fastest[0].place.id.as_str(), "a");
//! assert_eq!(summarize(&places).average_wifi_speed, 34.0);
//! ```

#![forbid(unsafe_code)]

pub use workspot_core::{
    Amenities, Factor, FactorKind, MAX_SCORE, NoiseBucket, Place, PlaceId, PowerTier, ScoreResult,
    ScoredPlace, Scorer, score_places,
};

pub use workspot_scorer::{FactorWeights, WeightsError, WorkabilityScorer};

pub use workspot_rank::{
    Metrics, NoiseDistribution, RankedView, SearchFilter, SortOrder, View, percentage, rank_all,
    search, summarize,
};

#[cfg(feature = "ingest")]
pub use workspot_data::{IngestError, IngestSummary, IngestedPlaces, parse_places, places_from_value};
