//! Workability scoring for Workspot places.
//!
//! [`WorkabilityScorer`] rates four independent factors and folds them into a
//! composite mark out of ten:
//! - **WiFi speed** (max 3): banded by measured download speed; a `no_wifi`
//!   marker wins over any recorded speed.
//! - **Power availability** (max 2.5): banded by outlet token; unrecognised
//!   tokens score zero.
//! - **Background noise** (max 2.5): quieter venues score higher.
//! - **Amenities** (max 2): half a point each for coffee, food, outdoor
//!   seating and alcohol.
//!
//! Missing data always lands on the lowest band with an explicit label, so
//! scoring never fails. The result also reports a reliability ratio: the
//! share of factors backed by real data.
//!
//! # Examples
//!
//! ```
//! use workspot_core::{Amenities, NoiseBucket, Place, PowerTier, Scorer};
//! use workspot_scorer::WorkabilityScorer;
//!
//! let place = Place::new("cafe-1")
//!     .with_download(60.0)
//!     .with_power(PowerTier::Range3)
//!     .with_noise(NoiseBucket::Quiet)
//!     .with_amenities(Amenities { coffee: true, food: true, ..Amenities::default() });
//!
//! let result = WorkabilityScorer::default().score(&place);
//! assert_eq!(result.score, 9.0);
//! assert_eq!(result.reliability, 1.0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use log::debug;
use workspot_core::{
    Factor, FactorKind, Place, ScoreResult, ScoredPlace, Scorer, score_places,
};

mod error;
mod factors;
mod weights;

pub use error::WeightsError;
pub use weights::FactorWeights;

use factors::{Rating, rate_amenities, rate_noise, rate_power, rate_wifi};

/// Scorer rating WiFi, power, noise and amenities.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorkabilityScorer {
    weights: FactorWeights,
}

impl WorkabilityScorer {
    /// Construct a scorer with custom factor maxima.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when the weights fail
    /// [`FactorWeights::validate`].
    pub fn new(weights: FactorWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Return the factor maxima in use.
    #[must_use]
    pub const fn weights(&self) -> FactorWeights {
        self.weights
    }

    /// Score a list of places, preserving input order.
    ///
    /// The input is left untouched; each result carries a copy of its place.
    #[must_use]
    pub fn score_all(&self, places: &[Place]) -> Vec<ScoredPlace> {
        let scored = score_places(self, places);
        debug!("scored {} places", scored.len());
        scored
    }

    fn factor(&self, kind: FactorKind, rating: Rating) -> Factor {
        Factor::new(
            kind,
            self.weights.rescale(kind, rating.points),
            self.weights.get(kind),
            rating.detail,
        )
    }
}

impl Scorer for WorkabilityScorer {
    fn score(&self, place: &Place) -> ScoreResult {
        ScoreResult::from_factors(vec![
            self.factor(FactorKind::Wifi, rate_wifi(place)),
            self.factor(FactorKind::Power, rate_power(place)),
            self.factor(FactorKind::Noise, rate_noise(place)),
            self.factor(FactorKind::Amenities, rate_amenities(place)),
        ])
    }
}
