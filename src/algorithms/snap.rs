//! Cursor snapping to the nearest tracked object
//!
//! A full linear scan per call. At the expected scale (tens to low hundreds
//! of displayed objects) this stays far below a frame budget, and positions
//! move between calls so nothing is cached.

use crate::algorithms::great_circle::distance;
use crate::core::{Anchor, GeoPoint, ObjectId, TrackedObject};

/// Nearest candidate to `cursor` and its distance in meters.
///
/// Ties go to the candidate encountered first, so the result is only as
/// deterministic as the order the caller supplies.
pub fn nearest_object<'a, I>(cursor: GeoPoint, candidates: I) -> Option<(ObjectId, f64)>
where
    I: IntoIterator<Item = &'a TrackedObject>,
{
    let mut best: Option<(ObjectId, f64)> = None;

    for candidate in candidates {
        let d = distance(cursor, candidate.position);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((candidate.id, d)),
        }
    }

    best
}

/// Resolve the pointer to an anchor.
///
/// With snapping disabled, or nothing to snap to, the raw cursor point is
/// returned.
pub fn snap<'a, I>(cursor: GeoPoint, candidates: I, enabled: bool) -> Anchor
where
    I: IntoIterator<Item = &'a TrackedObject>,
{
    if !enabled {
        return Anchor::Point(cursor);
    }

    match nearest_object(cursor, candidates) {
        Some((id, d)) => {
            tracing::trace!(object_id = id, distance_m = d, "cursor snapped");
            Anchor::Object(id)
        }
        None => Anchor::Point(cursor),
    }
}
