//! Views, search filters and area metrics over scored Workspot places.
//!
//! Responsibilities:
//! - Rank scored places under named [`View`]s (closest, fastest WiFi,
//!   meeting-ready, social, focus, group and private).
//! - Apply the generic post-search [`SearchFilter`] and [`SortOrder`].
//! - Reduce a place list to area [`Metrics`].
//!
//! Every function here is total and returns fresh collections; inputs are
//! borrowed and never reordered or modified.
//!
//! # Examples
//!
//! ```
//! use workspot_core::{NoiseBucket, Place};
//! use workspot_rank::{View, summarize};
//! use workspot_scorer::WorkabilityScorer;
//!
//! let places = vec![
//!     Place::new("library").with_kind("library").with_distance(1.2),
//!     Place::new("bar").with_noise(NoiseBucket::Noisy).with_distance(0.3),
//! ];
//! let scored = WorkabilityScorer::default().score_all(&places);
//!
//! assert_eq!(View::Focus.rank(&scored)[0].place.id.as_str(), "library");
//! assert_eq!(View::Closest.rank(&scored)[0].place.id.as_str(), "bar");
//! assert_eq!(summarize(&places).noise_distribution.noisy, 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod filter;
mod metrics;
mod order;
mod views;

pub use filter::{ANY, SearchFilter, SortOrder, search};
pub use metrics::{Metrics, NoiseDistribution, percentage, summarize};
pub use views::{
    FOCUS_MIN_SCORE, GROUP_MIN_SCORE, MEETING_MIN_DOWNLOAD, PRIVATE_BONUS_SCORE, RankedView, View,
    rank_all,
};
