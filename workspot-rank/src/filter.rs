//! Post-search filtering and sort toggles.
//!
//! These mirror the controls offered next to a search result list: an exact
//! category match, a noise bucket, and a choice between the order the
//! results arrived in and best score first.

use log::debug;
use workspot_core::{NoiseBucket, ScoredPlace};

use crate::order::{by_distance, by_score_desc};

/// Token that disables a filter.
pub const ANY: &str = "any";

/// Category and noise restrictions applied to a result list.
///
/// The default filter keeps every place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchFilter {
    /// Exact, case-sensitive category to keep.
    pub kind: Option<String>,
    /// Noise bucket to keep. [`NoiseBucket::Unknown`] keeps nothing.
    pub noise: Option<NoiseBucket>,
}

impl SearchFilter {
    /// Build a filter from user-facing tokens.
    ///
    /// `"any"` or an empty token leaves that dimension unrestricted. A noise
    /// token that names no bucket yields a filter that matches nothing.
    ///
    /// # Examples
    /// ```
    /// use workspot_core::NoiseBucket;
    /// use workspot_rank::SearchFilter;
    ///
    /// let filter = SearchFilter::parse("coffee", "quiet");
    /// assert_eq!(filter.kind.as_deref(), Some("coffee"));
    /// assert_eq!(filter.noise, Some(NoiseBucket::Quiet));
    ///
    /// assert_eq!(SearchFilter::parse("any", "any"), SearchFilter::default());
    /// ```
    #[must_use]
    pub fn parse(kind: &str, noise: &str) -> Self {
        Self {
            kind: restricted(kind).map(str::to_owned),
            noise: restricted(noise).map(|token| {
                token
                    .parse::<NoiseBucket>()
                    .unwrap_or(NoiseBucket::Unknown)
            }),
        }
    }

    /// Report whether `entry` passes every restriction.
    #[must_use]
    pub fn matches(&self, entry: &ScoredPlace) -> bool {
        let kind_ok = self
            .kind
            .as_deref()
            .is_none_or(|wanted| entry.place.kind.as_deref() == Some(wanted));
        let noise_ok = self
            .noise
            .is_none_or(|wanted| wanted.is_known() && entry.place.noise == wanted);
        kind_ok && noise_ok
    }

    /// Keep the places that pass the filter, in their original order.
    #[must_use]
    pub fn apply(&self, places: &[ScoredPlace]) -> Vec<ScoredPlace> {
        places
            .iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect()
    }
}

fn restricted(token: &str) -> Option<&str> {
    let trimmed = token.trim();
    (!trimmed.is_empty() && !trimmed.eq_ignore_ascii_case(ANY)).then_some(trimmed)
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortOrder {
    /// Keep the order the results arrived in.
    #[default]
    Input,
    /// Highest workability score first.
    ///
    /// Equal scores are ordered by distance, the same tie-break the named
    /// views use, rather than kept in input order. Places without a
    /// distance come last among their ties.
    ScoreHigh,
}

impl SortOrder {
    /// Interpret a sort token. Only `"score_high"` reorders.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        if token.trim() == "score_high" {
            Self::ScoreHigh
        } else {
            Self::Input
        }
    }

    /// Return the canonical token for this order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "none",
            Self::ScoreHigh => "score_high",
        }
    }

    /// Reorder `places` in place. Sorting is stable.
    pub fn apply(self, places: &mut [ScoredPlace]) {
        if self == Self::ScoreHigh {
            places.sort_by(|a, b| by_score_desc(a, b).then_with(|| by_distance(a, b)));
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter `places` and then order the survivors.
///
/// # Examples
/// ```
/// use workspot_core::{NoiseBucket, Place};
/// use workspot_rank::{SearchFilter, SortOrder, search};
/// use workspot_scorer::WorkabilityScorer;
///
/// let places = vec![
///     Place::new("loud").with_noise(NoiseBucket::Noisy),
///     Place::new("calm").with_noise(NoiseBucket::Quiet).with_download(60.0),
///     Place::new("hush").with_noise(NoiseBucket::Quiet),
/// ];
/// let scored = WorkabilityScorer::default().score_all(&places);
///
/// let found = search(&scored, &SearchFilter::parse("any", "quiet"), SortOrder::ScoreHigh);
/// let ids: Vec<&str> = found.iter().map(|p| p.place.id.as_str()).collect();
/// assert_eq!(ids, vec!["calm", "hush"]);
/// ```
#[must_use]
pub fn search(places: &[ScoredPlace], filter: &SearchFilter, sort: SortOrder) -> Vec<ScoredPlace> {
    let mut found = filter.apply(places);
    sort.apply(&mut found);
    debug!(
        "search kept {} of {} places (sort {})",
        found.len(),
        places.len(),
        sort
    );
    found
}
