//! Places that a remote worker might settle into.
//!
//! A [`Place`] is the normalised form of one record from the upstream places
//! search. Every attribute other than the identifier is optional or has an
//! explicit "unknown" value, because the upstream API omits fields freely.

use crate::{NoiseBucket, PowerTier};

/// Stable identifier for a place.
///
/// Upstream ids arrive as either strings or integers; both are kept in their
/// textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlaceId(String);

impl PlaceId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for PlaceId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// Amenity flags decoded from the upstream `"1"`-style markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Amenities {
    /// Coffee is sold on site.
    pub coffee: bool,
    /// Food is sold on site.
    pub food: bool,
    /// Outdoor seating is available.
    pub outdoor_seating: bool,
    /// Alcohol is served.
    pub alcohol: bool,
}

/// A venue returned by a places search.
///
/// # Examples
/// ```
/// use workspot_core::{NoiseBucket, Place, PowerTier};
///
/// let place = Place::new("42")
///     .with_kind("Coffee Shop")
///     .with_download(48.0)
///     .with_power(PowerTier::Range2)
///     .with_noise(NoiseBucket::Moderate);
///
/// assert_eq!(place.id.as_str(), "42");
/// assert!(place.serves_coffee());
/// assert!(place.has_wifi());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Upstream identifier.
    pub id: PlaceId,
    /// Display name.
    pub title: Option<String>,
    /// Miles from the search origin.
    pub distance: Option<f64>,
    /// Measured download speed in Mbps.
    pub download: Option<f64>,
    /// Alternate speed reading some records carry instead of `download`.
    pub wifi_speed: Option<f64>,
    /// The venue reports that it has no WiFi at all.
    pub no_wifi: bool,
    /// Power outlet availability.
    pub power: PowerTier,
    /// Background noise bucket.
    pub noise: NoiseBucket,
    /// Free-text venue category, e.g. `"coffee"` or `"coworking"`.
    pub kind: Option<String>,
    /// Amenity flags.
    pub amenities: Amenities,
}

impl Place {
    /// Construct a place with every attribute unknown.
    ///
    /// # Examples
    /// ```
    /// use workspot_core::{NoiseBucket, Place, PowerTier};
    ///
    /// let place = Place::new("a");
    /// assert!(place.download.is_none());
    /// assert_eq!(place.power, PowerTier::NoOutlets);
    /// assert_eq!(place.noise, NoiseBucket::Unknown);
    /// ```
    pub fn new(id: impl Into<PlaceId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the distance from the search origin in miles.
    #[must_use]
    pub fn with_distance(mut self, miles: f64) -> Self {
        self.distance = Some(miles);
        self
    }

    /// Set the measured download speed in Mbps.
    #[must_use]
    pub fn with_download(mut self, mbps: f64) -> Self {
        self.download = Some(mbps);
        self
    }

    /// Mark the venue as having no WiFi.
    #[must_use]
    pub fn without_wifi(mut self) -> Self {
        self.no_wifi = true;
        self
    }

    /// Set the power tier.
    #[must_use]
    pub fn with_power(mut self, power: PowerTier) -> Self {
        self.power = power;
        self
    }

    /// Set the noise bucket.
    #[must_use]
    pub fn with_noise(mut self, noise: NoiseBucket) -> Self {
        self.noise = noise;
        self
    }

    /// Set the venue category.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Replace the amenity flags.
    #[must_use]
    pub fn with_amenities(mut self, amenities: Amenities) -> Self {
        self.amenities = amenities;
        self
    }

    /// Report whether the venue has WiFi (or at least does not deny it).
    #[must_use]
    pub const fn has_wifi(&self) -> bool {
        !self.no_wifi
    }

    /// Case-insensitive substring match against the venue category.
    ///
    /// Places without a category never match.
    ///
    /// # Examples
    /// ```
    /// use workspot_core::Place;
    ///
    /// let place = Place::new("1").with_kind("Public Library");
    /// assert!(place.kind_contains("library"));
    /// assert!(!Place::new("2").kind_contains("library"));
    /// ```
    #[must_use]
    pub fn kind_contains(&self, needle: &str) -> bool {
        self.kind
            .as_deref()
            .is_some_and(|kind| kind.to_lowercase().contains(needle))
    }

    /// Report whether coffee is available, from the flag or the category.
    #[must_use]
    pub fn serves_coffee(&self) -> bool {
        self.amenities.coffee || self.kind_contains("coffee")
    }

    /// Names of the amenities on offer, in a fixed display order.
    ///
    /// # Examples
    /// ```
    /// use workspot_core::{Amenities, Place};
    ///
    /// let place = Place::new("1").with_kind("coffee").with_amenities(Amenities {
    ///     alcohol: true,
    ///     ..Amenities::default()
    /// });
    /// assert_eq!(place.amenity_names(), vec!["Coffee", "Alcohol"]);
    /// ```
    #[must_use]
    pub fn amenity_names(&self) -> Vec<&'static str> {
        [
            (self.serves_coffee(), "Coffee"),
            (self.amenities.food, "Food"),
            (self.amenities.outdoor_seating, "Outdoor Seating"),
            (self.amenities.alcohol, "Alcohol"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }

    /// Speed reading used for area averages: `download`, else `wifi_speed`.
    #[must_use]
    pub fn measured_speed(&self) -> Option<f64> {
        self.download.or(self.wifi_speed)
    }
}
