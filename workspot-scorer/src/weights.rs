//! Per-factor maxima for the workability score.
#![forbid(unsafe_code)]

use workspot_core::FactorKind;

use crate::WeightsError;

/// Maximum points awarded to each scoring factor.
///
/// The defaults total 10 so the composite score reads directly as a mark out
/// of ten. Rebalanced weights keep working because the composite is always
/// normalised against the summed maxima.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FactorWeights {
    /// Maximum points for WiFi speed.
    pub wifi: f32,
    /// Maximum points for power availability.
    pub power: f32,
    /// Maximum points for background noise.
    pub noise: f32,
    /// Maximum points for amenities.
    pub amenities: f32,
}

impl FactorWeights {
    /// Default maxima: WiFi 3, power 2.5, noise 2.5, amenities 2.
    pub const DEFAULT: Self = Self {
        wifi: 3.0,
        power: 2.5,
        noise: 2.5,
        amenities: 2.0,
    };

    /// Return the weight for a factor.
    #[must_use]
    pub const fn get(self, kind: FactorKind) -> f32 {
        match kind {
            FactorKind::Wifi => self.wifi,
            FactorKind::Power => self.power,
            FactorKind::Noise => self.noise,
            FactorKind::Amenities => self.amenities,
        }
    }

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when a weight is non-finite or negative, or
    /// when every weight is zero.
    pub fn validate(self) -> Result<Self, WeightsError> {
        for factor in FactorKind::ALL {
            let value = self.get(factor);
            if !value.is_finite() {
                return Err(WeightsError::NonFinite { factor, value });
            }
            if value < 0.0 {
                return Err(WeightsError::Negative { factor, value });
            }
        }
        if self.total() > 0.0 {
            Ok(self)
        } else {
            Err(WeightsError::ZeroTotal)
        }
    }

    /// Sum of all factor maxima.
    #[must_use]
    pub fn total(self) -> f32 {
        FactorKind::ALL.iter().map(|&kind| self.get(kind)).sum()
    }

    /// Rescale points earned on the default scale onto this weighting.
    #[expect(
        clippy::float_arithmetic,
        reason = "rescaling multiplies by the ratio of two maxima"
    )]
    pub(crate) fn rescale(self, kind: FactorKind, points: f32) -> f32 {
        let weight = self.get(kind);
        let default = Self::DEFAULT.get(kind);
        if weight == default {
            return points;
        }
        points * (weight / default)
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
