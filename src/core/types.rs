//! Core data types for the tactical overlay

use crate::core::constants::{TAG_AIR, TAG_BULLSEYE, TAG_GROUND, TAG_PARACHUTIST};
use crate::validation::error::{OverlayError, OverlayResult};
use serde::{Deserialize, Serialize};

/// Stable identity of a tracked object for its lifetime in the feed
pub type ObjectId = u64;

/// Geographic coordinate in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build a point from untrusted input, rejecting out-of-range values
    pub fn try_new(lat: f64, lon: f64) -> OverlayResult<Self> {
        let point = Self { lat, lon };
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> OverlayResult<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(OverlayError::InvalidCoordinate {
                field: "latitude",
                value: self.lat,
            });
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(OverlayError::InvalidCoordinate {
                field: "longitude",
                value: self.lon,
            });
        }
        Ok(())
    }
}

/// One tracked object as reported by the live feed.
///
/// The overlay never mutates these; every feed update replaces the whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedObject {
    pub id: ObjectId,
    pub position: GeoPoint,
    /// Degrees clockwise from true north, if the feed reports one
    pub heading: Option<f64>,
    /// Altitude in meters
    pub altitude: f64,
    /// Classification tags, e.g. "Air", "Ground", "Bullseye"
    pub types: Vec<String>,
    pub name: String,
    pub group: String,
    pub pilot: String,
    pub coalition: String,
}

impl TrackedObject {
    pub fn new(id: ObjectId, position: GeoPoint) -> Self {
        Self {
            id,
            position,
            heading: None,
            altitude: 0.0,
            types: Vec::new(),
            name: String::new(),
            group: String::new(),
            pilot: String::new(),
            coalition: String::new(),
        }
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = Some(heading);
        self
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = altitude;
        self
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_pilot(mut self, pilot: impl Into<String>) -> Self {
        self.pilot = pilot.into();
        self
    }

    pub fn with_coalition(mut self, coalition: impl Into<String>) -> Self {
        self.coalition = coalition.into();
        self
    }

    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    pub fn is_airborne(&self) -> bool {
        self.has_type(TAG_AIR)
    }

    /// True when the object carries nothing but the ground tag (or no tags at all)
    pub fn is_ground_only(&self) -> bool {
        self.types.iter().all(|t| t == TAG_GROUND)
    }

    pub fn is_bullseye(&self) -> bool {
        self.has_type(TAG_BULLSEYE)
    }

    pub fn is_parachutist(&self) -> bool {
        self.has_type(TAG_PARACHUTIST)
    }
}

/// A measurement endpoint: bound to a live object or fixed on the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Anchor {
    Object(ObjectId),
    Point(GeoPoint),
}

impl Anchor {
    pub fn object_id(&self) -> Option<ObjectId> {
        match self {
            Anchor::Object(id) => Some(*id),
            Anchor::Point(_) => None,
        }
    }
}
