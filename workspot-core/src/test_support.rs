//! Test-only scorers and fixtures shared by unit, behaviour and property
//! tests across the workspace.

use crate::{Place, ScoreResult, ScoredPlace, Scorer};

/// Test `Scorer` that gives every place the same composite score.
///
/// The breakdown is left empty so assertions can focus on ordering.
#[derive(Debug, Copy, Clone, Default)]
pub struct FixedScorer {
    score: f32,
}

impl FixedScorer {
    /// Create a scorer that always returns `score`.
    #[must_use]
    pub const fn new(score: f32) -> Self {
        Self { score }
    }
}

impl Scorer for FixedScorer {
    fn score(&self, _place: &Place) -> ScoreResult {
        fixed_result(self.score)
    }
}

/// Build a breakdown-free [`ScoreResult`] carrying `score`.
#[must_use]
pub const fn fixed_result(score: f32) -> ScoreResult {
    ScoreResult {
        score,
        factors: Vec::new(),
        reliability: 0.0,
    }
}

/// Pair `place` with a fixed composite score.
#[must_use]
pub fn with_score(place: Place, score: f32) -> ScoredPlace {
    ScoredPlace {
        place,
        workability: fixed_result(score),
    }
}

/// Pair every place with a score of zero.
#[must_use]
pub fn unscored(places: Vec<Place>) -> Vec<ScoredPlace> {
    places.into_iter().map(|place| with_score(place, 0.0)).collect()
}
