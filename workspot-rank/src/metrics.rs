//! Area-level statistics over a place list.
//!
//! Every figure is guarded against an empty list and reports zero rather
//! than NaN.

use log::debug;
use workspot_core::{NoiseBucket, Place, PowerTier};

/// Number of amenity signals a place can offer.
const AMENITY_SIGNALS: f64 = 4.0;

/// Counts of places per known noise bucket.
///
/// Places with unrecognised noise text are not counted, so the three counts
/// may sum to less than the number of places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoiseDistribution {
    /// Places in the quiet bucket.
    pub quiet: usize,
    /// Places in the moderate bucket.
    pub moderate: usize,
    /// Places in the noisy bucket.
    pub noisy: usize,
}

impl NoiseDistribution {
    /// Total number of places that landed in a bucket.
    #[must_use]
    pub const fn counted(&self) -> usize {
        self.quiet + self.moderate + self.noisy
    }
}

/// Summary statistics for a search area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Metrics {
    /// Mean measured WiFi speed in Mbps, rounded to a whole number.
    pub average_wifi_speed: f64,
    /// Outlet availability as a rounded percentage.
    pub power_availability: u8,
    /// Places per noise bucket.
    pub noise_distribution: NoiseDistribution,
    /// Share of amenity signals present, as a rounded percentage.
    pub amenity_coverage: u8,
}

/// Round `100 * count / total`, returning zero when `total` is zero.
///
/// The result is clamped to `0..=100`.
///
/// # Examples
/// ```
/// use workspot_rank::percentage;
///
/// assert_eq!(percentage(1.0, 3), 33);
/// assert_eq!(percentage(2.0, 3), 67);
/// assert_eq!(percentage(5.0, 0), 0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "percentages are clamped to 0..=100 before narrowing"
)]
pub fn percentage(count: f64, total: usize) -> u8 {
    if total == 0 || !count.is_finite() {
        return 0;
    }
    (100.0 * count / total as f64).round().clamp(0.0, 100.0) as u8
}

/// Share of an outlet that a power tier contributes to the area figure.
///
/// Only the upstream `rangeN` tokens earn credit here.
const fn power_share(tier: PowerTier) -> f64 {
    match tier {
        PowerTier::Range3 => 1.0,
        PowerTier::Range2 => 0.7,
        PowerTier::Range1 => 0.3,
        PowerTier::NoOutlets | PowerTier::Plentiful | PowerTier::Sparse | PowerTier::Unknown => {
            0.0
        }
    }
}

/// Compute area statistics for `places`.
///
/// # Examples
/// ```
/// use workspot_core::{NoiseBucket, Place, PowerTier};
/// use workspot_rank::summarize;
///
/// let places = vec![
///     Place::new("a").with_download(40.0).with_power(PowerTier::Range3),
///     Place::new("b").with_download(21.0).with_noise(NoiseBucket::Quiet),
/// ];
/// let metrics = summarize(&places);
/// assert_eq!(metrics.average_wifi_speed, 31.0);
/// assert_eq!(metrics.power_availability, 50);
/// assert_eq!(metrics.noise_distribution.quiet, 1);
/// assert_eq!(metrics.amenity_coverage, 0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averages divide sums by place counts"
)]
pub fn summarize(places: &[Place]) -> Metrics {
    let speeds: Vec<f64> = places
        .iter()
        .filter_map(Place::measured_speed)
        .filter(|mbps| mbps.is_finite())
        .collect();
    let average_wifi_speed = if speeds.is_empty() {
        0.0
    } else {
        (speeds.iter().sum::<f64>() / speeds.len() as f64).round()
    };

    let power: f64 = places.iter().map(|place| power_share(place.power)).sum();
    let amenities: f64 = places
        .iter()
        .map(|place| place.amenity_names().len() as f64 / AMENITY_SIGNALS)
        .sum();

    let mut noise_distribution = NoiseDistribution::default();
    for place in places {
        match place.noise {
            NoiseBucket::Quiet => noise_distribution.quiet += 1,
            NoiseBucket::Moderate => noise_distribution.moderate += 1,
            NoiseBucket::Noisy => noise_distribution.noisy += 1,
            NoiseBucket::Unknown => {}
        }
    }

    let metrics = Metrics {
        average_wifi_speed,
        power_availability: percentage(power, places.len()),
        noise_distribution,
        amenity_coverage: percentage(amenities, places.len()),
    };
    debug!(
        "summarized {} places ({} with speed readings)",
        places.len(),
        speeds.len()
    );
    metrics
}
