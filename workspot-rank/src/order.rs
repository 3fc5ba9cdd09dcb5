//! Shared orderings for ranked views.

use std::cmp::Ordering;

use workspot_core::ScoredPlace;

/// Distance in miles, treating non-finite readings as absent.
fn distance(entry: &ScoredPlace) -> Option<f64> {
    entry.place.distance.filter(|miles| miles.is_finite())
}

/// Ascending distance; places without a distance sort last.
pub(crate) fn by_distance(a: &ScoredPlace, b: &ScoredPlace) -> Ordering {
    match (distance(a), distance(b)) {
        (Some(left), Some(right)) => left.total_cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending composite score.
pub(crate) fn by_score_desc(a: &ScoredPlace, b: &ScoredPlace) -> Ordering {
    b.workability_score().total_cmp(&a.workability_score())
}
