//! Sub-score rules for each workability factor.
//!
//! Every rule returns points on the default scale (see
//! [`FactorWeights::DEFAULT`](crate::FactorWeights::DEFAULT)) along with a
//! display label. Missing or unrecognised inputs always land on zero points.
#![forbid(unsafe_code)]

use workspot_core::{NoiseBucket, Place, PowerTier};

/// Points earned for a factor, before weighting.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Rating {
    pub(crate) points: f32,
    pub(crate) detail: String,
}

impl Rating {
    fn new(points: f32, detail: impl Into<String>) -> Self {
        Self {
            points,
            detail: detail.into(),
        }
    }
}

const AMENITY_POINTS: f32 = 0.5;
const AMENITY_CAP: f32 = 2.0;

/// Rate WiFi by measured download speed.
///
/// A `no_wifi` marker overrides any recorded speed.
pub(crate) fn rate_wifi(place: &Place) -> Rating {
    if place.no_wifi {
        return Rating::new(0.0, "No WiFi");
    }
    match place.download.filter(|speed| speed.is_finite()) {
        Some(speed) if speed >= 50.0 => Rating::new(3.0, "Excellent"),
        Some(speed) if speed >= 20.0 => Rating::new(2.5, "Very Good"),
        Some(speed) if speed >= 10.0 => Rating::new(2.0, "Good"),
        Some(speed) if speed > 0.0 => Rating::new(1.0, "Basic"),
        _ => Rating::new(0.0, "Unknown"),
    }
}

/// Rate power outlet availability.
///
/// Unrecognised tokens earn nothing rather than partial credit.
pub(crate) fn rate_power(place: &Place) -> Rating {
    match place.power {
        PowerTier::NoOutlets => Rating::new(0.0, "No outlets"),
        PowerTier::Range3 | PowerTier::Plentiful => Rating::new(2.5, "Abundant"),
        PowerTier::Range2 => Rating::new(2.0, "Good"),
        PowerTier::Range1 | PowerTier::Sparse => Rating::new(1.5, "Limited"),
        PowerTier::Unknown => Rating::new(0.0, "Unknown"),
    }
}

/// Rate background noise; quieter is better.
pub(crate) fn rate_noise(place: &Place) -> Rating {
    match place.noise {
        NoiseBucket::Quiet => Rating::new(2.5, "Lower than average"),
        NoiseBucket::Moderate => Rating::new(2.0, "Average level"),
        NoiseBucket::Noisy => Rating::new(1.0, "Higher than average"),
        NoiseBucket::Unknown => Rating::new(0.0, "Unknown"),
    }
}

/// Rate amenities at half a point each, capped at two points.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "amenity points multiply a count of at most four signals"
)]
pub(crate) fn rate_amenities(place: &Place) -> Rating {
    let names = place.amenity_names();
    if names.is_empty() {
        return Rating::new(0.0, "Limited");
    }
    let points = (names.len() as f32 * AMENITY_POINTS).min(AMENITY_CAP);
    Rating::new(points, names.join(", "))
}
