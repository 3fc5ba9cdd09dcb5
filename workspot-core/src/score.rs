//! Workability score breakdowns.

/// Scoring dimension contributing to a workability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FactorKind {
    /// WiFi download speed.
    Wifi,
    /// Power outlet availability.
    Power,
    /// Background noise.
    Noise,
    /// On-site amenities.
    Amenities,
}

impl FactorKind {
    /// Every factor in breakdown order.
    pub const ALL: [Self; 4] = [Self::Wifi, Self::Power, Self::Noise, Self::Amenities];

    /// Human-readable factor name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wifi => "WiFi Speed",
            Self::Power => "Power Availability",
            Self::Noise => "Background Noise",
            Self::Amenities => "Amenities",
        }
    }
}

impl std::fmt::Display for FactorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One dimension of a score breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Factor {
    /// Dimension being scored.
    pub kind: FactorKind,
    /// Points awarded, in `0.0..=max`.
    pub score: f32,
    /// Maximum points available for the dimension.
    pub max: f32,
    /// Display label such as `"Excellent"` or `"Unknown"`.
    pub detail: String,
}

impl Factor {
    /// Build a factor entry.
    pub fn new(kind: FactorKind, score: f32, max: f32, detail: impl Into<String>) -> Self {
        Self {
            kind,
            score,
            max,
            detail: detail.into(),
        }
    }

    /// Human-readable factor name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Report whether the factor contributed any signal.
    #[must_use]
    pub fn contributes(&self) -> bool {
        self.score > 0.0
    }
}

/// Outcome of scoring a single place.
///
/// # Examples
/// ```
/// use workspot_core::{Factor, FactorKind, ScoreResult};
///
/// let result = ScoreResult::from_factors(vec![
///     Factor::new(FactorKind::Wifi, 3.0, 3.0, "Excellent"),
///     Factor::new(FactorKind::Power, 0.0, 2.5, "No outlets"),
///     Factor::new(FactorKind::Noise, 2.0, 2.5, "Average level"),
///     Factor::new(FactorKind::Amenities, 0.0, 2.0, "Limited"),
/// ]);
/// assert_eq!(result.score, 5.0);
/// assert_eq!(result.reliability, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreResult {
    /// Composite score in `0.0..=10.0`, rounded to one decimal place.
    pub score: f32,
    /// Per-dimension breakdown in [`FactorKind::ALL`] order.
    pub factors: Vec<Factor>,
    /// Share of factors with a non-zero score, in `0.0..=1.0`.
    pub reliability: f32,
}

/// Upper bound of the composite score.
pub const MAX_SCORE: f32 = 10.0;

impl ScoreResult {
    /// Aggregate factor scores into a composite result.
    ///
    /// The summed points are normalised against the summed maxima and
    /// rescaled to [`MAX_SCORE`], then rounded to one decimal place.
    /// Reliability counts contributing factors over all factors; an empty
    /// breakdown yields zero for both.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "aggregation divides summed factor points by small factor counts"
    )]
    pub fn from_factors(factors: Vec<Factor>) -> Self {
        let earned: f32 = factors.iter().map(|f| f.score).sum();
        let available: f32 = factors.iter().map(|f| f.max).sum();
        let score = if available > 0.0 {
            round_to_tenth(earned / available * MAX_SCORE)
        } else {
            0.0
        };
        let reliability = if factors.is_empty() {
            0.0
        } else {
            let contributing = factors.iter().filter(|f| f.contributes()).count();
            contributing as f32 / factors.len() as f32
        };
        Self {
            score: sanitise_score(score),
            factors,
            reliability,
        }
    }

    /// Look up the factor for a dimension.
    #[must_use]
    pub fn factor(&self, kind: FactorKind) -> Option<&Factor> {
        self.factors.iter().find(|f| f.kind == kind)
    }
}

/// Round to one decimal place, halves away from zero.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "rounding to a tenth scales around an integer round"
)]
pub fn round_to_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Clamp a composite score into `0.0..=MAX_SCORE`, mapping non-finite values
/// to `0.0`.
#[must_use]
pub fn sanitise_score(score: f32) -> f32 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, MAX_SCORE)
}
