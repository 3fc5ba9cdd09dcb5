//! Score places for remote-work suitability.
//!
//! The `Scorer` trait turns a [`Place`](crate::Place) into a
//! [`ScoreResult`](crate::ScoreResult) breakdown.

use crate::{Place, ScoreResult, score::sanitise_score};

/// Calculate a workability score for a place.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so callers can score
/// large result lists in parallel. The method is infallible: missing or
/// unrecognised attributes map to the lowest sub-score for their factor.
///
/// Implementations must:
/// - Produce finite scores in `0.0..=10.0`.
/// - Leave the place untouched.
/// - Return the same result for equal inputs.
///
/// Use [`Scorer::sanitise`] to apply the numeric guards.
///
/// # Examples
///
/// ```rust
/// use workspot_core::{Factor, FactorKind, Place, ScoreResult, Scorer};
///
/// struct WifiOnly;
///
/// impl Scorer for WifiOnly {
///     fn score(&self, place: &Place) -> ScoreResult {
///         let points = if place.has_wifi() { 1.0 } else { 0.0 };
///         ScoreResult::from_factors(vec![Factor::new(FactorKind::Wifi, points, 1.0, "")])
///     }
/// }
///
/// let result = WifiOnly.score(&Place::new("1"));
/// assert_eq!(result.score, 10.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return the score breakdown for `place`.
    fn score(&self, place: &Place) -> ScoreResult;

    /// Clamp and validate a raw composite score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=10.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        sanitise_score(score)
    }
}
