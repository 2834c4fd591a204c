//! Visibility policy shared by rendering and snapping
//!
//! A hidden object is never drawn and never snappable.

use crate::core::TrackedObject;
use crate::processing::feed::SnapshotProvider;
use crate::utils::config::FilterPolicy;

/// Decides which feed objects make it onto the overlay
#[derive(Debug, Clone, Default)]
pub struct DisplayFilter {
    policy: FilterPolicy,
}

impl DisplayFilter {
    pub fn new(policy: FilterPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    /// Whether `object` is displayed.
    ///
    /// Hidden: parachutists, objects tagged only as ground units (or untagged),
    /// and the home coalition's own bullseye.
    pub fn is_visible(&self, object: &TrackedObject) -> bool {
        if object.is_parachutist() || object.is_ground_only() {
            return false;
        }

        !(object.is_bullseye() && object.coalition == self.policy.home_coalition)
    }

    /// Visible objects in feed order
    pub fn visible<'a, F>(&'a self, feed: &'a F) -> impl Iterator<Item = &'a TrackedObject> + 'a
    where
        F: SnapshotProvider + ?Sized,
    {
        feed.objects().iter().filter(move |object| self.is_visible(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;
    use crate::processing::feed::FeedSnapshot;

    fn tagged(id: u64, tags: &[&str]) -> TrackedObject {
        TrackedObject::new(id, GeoPoint::new(33.5, 36.3)).with_types(tags.iter().copied())
    }

    #[test]
    fn test_ground_only_hidden() {
        let filter = DisplayFilter::default();

        assert!(!filter.is_visible(&tagged(1, &["Ground"])));
        assert!(!filter.is_visible(&tagged(2, &[])));
        assert!(filter.is_visible(&tagged(3, &["Ground", "Static", "Aerodrome"])));
    }

    #[test]
    fn test_parachutist_always_hidden() {
        let filter = DisplayFilter::default();

        assert!(!filter.is_visible(&tagged(1, &["Parachutist"])));
        assert!(!filter.is_visible(&tagged(2, &["Air", "Parachutist"])));
    }

    #[test]
    fn test_bullseye_hidden_from_home_side() {
        let filter = DisplayFilter::default();

        let own = tagged(1, &["Navaid", "Static", "Bullseye"]).with_coalition("Allies");
        let enemy = tagged(2, &["Navaid", "Static", "Bullseye"]).with_coalition("Enemies");

        assert!(!filter.is_visible(&own));
        assert!(filter.is_visible(&enemy));
    }

    #[test]
    fn test_visible_keeps_feed_order() {
        let filter = DisplayFilter::new(FilterPolicy {
            home_coalition: "Enemies".to_string(),
        });
        let feed = FeedSnapshot::from_objects(vec![
            tagged(5, &["Air", "FixedWing"]),
            tagged(4, &["Ground"]),
            tagged(3, &["Air", "Rotorcraft"]),
            tagged(2, &["Parachutist"]),
            tagged(1, &["Bullseye"]).with_coalition("Allies"),
        ]);

        let ids: Vec<u64> = filter.visible(&feed).map(|o| o.id).collect();
        assert_eq!(ids, vec![5, 3, 1]);
    }
}
