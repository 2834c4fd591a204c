use crate::core::{Anchor, GeoPoint, ObjectId, TrackedObject};
use std::collections::HashMap;

/// Read-only view of the live object feed at one point in time.
///
/// Implementations are replaced wholesale between frames; the overlay only
/// ever reads through this trait and never holds on to what it returns.
pub trait SnapshotProvider {
    /// All objects in feed order
    fn objects(&self) -> &[TrackedObject];

    /// Look up one object by identity
    fn get(&self, id: ObjectId) -> Option<&TrackedObject>;
}

/// Owned feed snapshot indexed by object identity
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    objects: Vec<TrackedObject>,
    index: HashMap<ObjectId, usize>,
}

impl FeedSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot, keeping feed order.
    ///
    /// A repeated identity replaces the earlier entry in place. Objects with
    /// positions outside the WGS84 range are dropped.
    pub fn from_objects<I>(objects: I) -> Self
    where
        I: IntoIterator<Item = TrackedObject>,
    {
        let mut snapshot = Self::new();
        for object in objects {
            snapshot.insert(object);
        }
        snapshot
    }

    fn insert(&mut self, object: TrackedObject) {
        if let Err(e) = object.position.validate() {
            tracing::warn!(object_id = object.id, error = %e, "dropping object with invalid position");
            return;
        }

        match self.index.get(&object.id) {
            Some(&slot) => {
                tracing::debug!(object_id = object.id, "duplicate identity in feed, keeping latest");
                self.objects[slot] = object;
            }
            None => {
                self.index.insert(object.id, self.objects.len());
                self.objects.push(object);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.index.contains_key(&id)
    }
}

impl SnapshotProvider for FeedSnapshot {
    fn objects(&self) -> &[TrackedObject] {
        &self.objects
    }

    fn get(&self, id: ObjectId) -> Option<&TrackedObject> {
        self.index.get(&id).map(|&slot| &self.objects[slot])
    }
}

impl FromIterator<TrackedObject> for FeedSnapshot {
    fn from_iter<T: IntoIterator<Item = TrackedObject>>(iter: T) -> Self {
        Self::from_objects(iter)
    }
}

/// Resolve an anchor to a map position against the current feed.
///
/// An object anchor whose identity has left the feed resolves to `None`;
/// callers omit whatever depended on it for this frame.
pub fn resolve<F>(anchor: &Anchor, feed: &F) -> Option<GeoPoint>
where
    F: SnapshotProvider + ?Sized,
{
    match anchor {
        Anchor::Point(point) => Some(*point),
        Anchor::Object(id) => feed.get(*id).map(|object| object.position),
    }
}
