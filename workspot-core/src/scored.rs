//! Places paired with their workability scores.
//!
//! Rankers and metrics operate on [`ScoredPlace`] values so the score is
//! computed once per search rather than once per view.

use crate::{Place, ScoreResult, Scorer};

/// A place together with the score computed for it.
///
/// The place is a copy of the caller's record; scoring never alters the
/// original.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredPlace {
    /// The scored venue.
    pub place: Place,
    /// Score breakdown for the venue.
    pub workability: ScoreResult,
}

impl ScoredPlace {
    /// Score `place` with `scorer` and attach the result to a copy.
    pub fn new<S: Scorer + ?Sized>(scorer: &S, place: &Place) -> Self {
        Self {
            workability: scorer.score(place),
            place: place.clone(),
        }
    }

    /// Composite workability score in `0.0..=10.0`.
    #[must_use]
    pub const fn workability_score(&self) -> f32 {
        self.workability.score
    }
}

/// Score every place in `places`, preserving input order.
///
/// # Examples
/// ```
/// use workspot_core::{Place, ScoreResult, Scorer, score_places};
///
/// struct Flat;
///
/// impl Scorer for Flat {
///     fn score(&self, _place: &Place) -> ScoreResult {
///         ScoreResult::from_factors(Vec::new())
///     }
/// }
///
/// let places = vec![Place::new("a"), Place::new("b")];
/// let scored = score_places(&Flat, &places);
/// assert_eq!(scored.len(), 2);
/// assert_eq!(scored[1].place.id.as_str(), "b");
/// ```
pub fn score_places<S: Scorer + ?Sized>(scorer: &S, places: &[Place]) -> Vec<ScoredPlace> {
    places
        .iter()
        .map(|place| ScoredPlace::new(scorer, place))
        .collect()
}
