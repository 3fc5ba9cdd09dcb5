//! Named views over a scored place list.
//!
//! Each [`View`] pairs a filter predicate with an ordering. Ranking copies
//! the matching places into a new list; the input is never reordered.
//! Unless a view says otherwise, ties break by ascending distance and places
//! without a distance come last.

use std::cmp::Ordering;

use log::debug;
use workspot_core::{NoiseBucket, Place, ScoredPlace};

use crate::order::by_distance;

/// Minimum download speed (Mbps) for a place to suit video calls.
pub const MEETING_MIN_DOWNLOAD: f64 = 25.0;
/// Composite score from which a non-noisy place suits focused work.
pub const FOCUS_MIN_SCORE: f32 = 7.0;
/// Composite score from which a non-quiet place suits groups.
pub const GROUP_MIN_SCORE: f32 = 6.0;
/// Composite score from which a private venue earns a bonus point.
pub const PRIVATE_BONUS_SCORE: f32 = 7.0;

/// A named ranking over scored places.
///
/// # Examples
/// ```
/// use workspot_rank::View;
///
/// let view: View = "fastest-wifi".parse()?;
/// assert_eq!(view, View::FastestWifi);
/// assert_eq!(view.title(), "Fastest WiFi");
/// # Ok::<(), String>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum View {
    /// Every place, nearest first.
    Closest,
    /// Places reporting a download speed, fastest first.
    FastestWifi,
    /// Quiet-enough places with WiFi fit for calls.
    MeetingReady,
    /// Lively places with some background buzz.
    Social,
    /// Calm places for heads-down work.
    Focus,
    /// Places that suit meeting up with a group.
    Group,
    /// Coworking and dedicated workspaces.
    Private,
}

impl View {
    /// Every view, in display order.
    pub const ALL: [Self; 7] = [
        Self::Closest,
        Self::FastestWifi,
        Self::MeetingReady,
        Self::Social,
        Self::Focus,
        Self::Group,
        Self::Private,
    ];

    /// Return the view's command-line token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closest => "closest",
            Self::FastestWifi => "fastest-wifi",
            Self::MeetingReady => "meeting-ready",
            Self::Social => "social",
            Self::Focus => "focus",
            Self::Group => "group",
            Self::Private => "private",
        }
    }

    /// Return the view's display heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Closest => "Closest",
            Self::FastestWifi => "Fastest WiFi",
            Self::MeetingReady => "Meeting-ready",
            Self::Social => "Social & lively",
            Self::Focus => "Focus & cozy",
            Self::Group => "Group-friendly",
            Self::Private => "Private & dedicated",
        }
    }

    /// Report whether `entry` belongs in this view.
    #[must_use]
    pub fn matches(self, entry: &ScoredPlace) -> bool {
        let place = &entry.place;
        let score = entry.workability_score();
        match self {
            Self::Closest => true,
            Self::FastestWifi => place.has_wifi() && download(place).is_some(),
            Self::MeetingReady => {
                matches!(place.noise, NoiseBucket::Quiet | NoiseBucket::Moderate)
                    && place.has_wifi()
                    && download(place).is_some_and(|mbps| mbps >= MEETING_MIN_DOWNLOAD)
            }
            Self::Social => matches!(place.noise, NoiseBucket::Noisy | NoiseBucket::Moderate),
            Self::Focus => {
                place.noise == NoiseBucket::Quiet
                    || (place.kind_contains("coffee") && place.noise == NoiseBucket::Moderate)
                    || place.kind_contains("library")
                    || (score >= FOCUS_MIN_SCORE && place.noise != NoiseBucket::Noisy)
            }
            Self::Group => {
                ["cafe", "coffee", "coworking"]
                    .iter()
                    .any(|needle| place.kind_contains(needle))
                    || place.amenities.food
                    || place.serves_coffee()
                    || (score >= GROUP_MIN_SCORE && place.noise != NoiseBucket::Quiet)
            }
            Self::Private => place.kind_contains("coworking") || place.kind_contains("dedicated"),
        }
    }

    /// Filter and order `places` for this view.
    ///
    /// # Examples
    /// ```
    /// use workspot_core::Place;
    /// use workspot_rank::View;
    /// use workspot_scorer::WorkabilityScorer;
    ///
    /// let places = vec![
    ///     Place::new("slow").with_download(10.0),
    ///     Place::new("fast").with_download(50.0),
    ///     Place::new("dead").with_download(99.0).without_wifi(),
    /// ];
    /// let scored = WorkabilityScorer::default().score_all(&places);
    ///
    /// let ranked = View::FastestWifi.rank(&scored);
    /// let ids: Vec<&str> = ranked.iter().map(|p| p.place.id.as_str()).collect();
    /// assert_eq!(ids, vec!["fast", "slow"]);
    /// ```
    #[must_use]
    pub fn rank(self, places: &[ScoredPlace]) -> Vec<ScoredPlace> {
        let mut ranked: Vec<ScoredPlace> = places
            .iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect();
        ranked.sort_by(|a, b| self.compare(a, b));
        debug!(
            "view {} kept {} of {} places",
            self,
            ranked.len(),
            places.len()
        );
        ranked
    }

    fn compare(self, a: &ScoredPlace, b: &ScoredPlace) -> Ordering {
        let primary = match self {
            Self::Closest | Self::MeetingReady | Self::Social => Ordering::Equal,
            Self::FastestWifi => {
                let speed = |entry: &ScoredPlace| download(&entry.place).unwrap_or(0.0);
                speed(b).total_cmp(&speed(a))
            }
            Self::Focus => b.place.noise.quality().cmp(&a.place.noise.quality()),
            Self::Group => meetup_score(&b.place).cmp(&meetup_score(&a.place)),
            Self::Private => privacy_score(b).cmp(&privacy_score(a)),
        };
        primary.then_with(|| by_distance(a, b))
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == wanted)
            .ok_or_else(|| format!("unknown view '{s}'"))
    }
}

/// A view together with the places it ranked.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedView {
    /// Which view produced the ranking.
    pub view: View,
    /// Ranked places, best first.
    pub places: Vec<ScoredPlace>,
}

/// Rank `places` under every [`View`], in [`View::ALL`] order.
#[must_use]
pub fn rank_all(places: &[ScoredPlace]) -> Vec<RankedView> {
    View::ALL
        .into_iter()
        .map(|view| RankedView {
            view,
            places: view.rank(places),
        })
        .collect()
}

fn download(place: &Place) -> Option<f64> {
    place.download.filter(|mbps| mbps.is_finite())
}

/// Meetup score: food +2, coffee +2, outdoor seating +1, coworking +2.
fn meetup_score(place: &Place) -> u8 {
    [
        (place.amenities.food, 2),
        (place.serves_coffee(), 2),
        (place.amenities.outdoor_seating, 1),
        (place.kind_contains("coworking"), 2),
    ]
    .into_iter()
    .filter_map(|(present, points)| present.then_some(points))
    .sum()
}

/// Privacy score: coworking +3, dedicated +2, high workability +1.
fn privacy_score(entry: &ScoredPlace) -> u8 {
    [
        (entry.place.kind_contains("coworking"), 3),
        (entry.place.kind_contains("dedicated"), 2),
        (entry.workability_score() >= PRIVATE_BONUS_SCORE, 1),
    ]
    .into_iter()
    .filter_map(|(present, points)| present.then_some(points))
    .sum()
}
