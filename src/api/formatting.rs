//! Label text for objects and measurements

use crate::api::types::ObjectLabel;
use crate::core::{TrackedObject, METERS_TO_FEET};
use crate::processing::session::BraaReading;
use std::fmt;

impl fmt::Display for ObjectLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title, self.altitude_kft)
    }
}

/// Label for an airborne object; ground and static objects get none
pub fn object_label(object: &TrackedObject) -> Option<ObjectLabel> {
    if !object.is_airborne() {
        return None;
    }

    // Pilot labels usually repeat the group callsign; only show them when they don't
    let title = if object.pilot.starts_with(&object.group) {
        object.name.clone()
    } else {
        format!("{} - {}", object.name, object.pilot)
    };

    Some(ObjectLabel {
        title,
        altitude_kft: altitude_thousands_of_feet(object.altitude),
    })
}

/// Altitude in meters to whole thousands of feet
pub fn altitude_thousands_of_feet(altitude_m: f64) -> i64 {
    (altitude_m * METERS_TO_FEET / 1000.0).floor() as i64
}

/// Bearing/range label, e.g. "095 / 12NM"
pub fn braa_label(reading: &BraaReading) -> String {
    format!("{:03} / {}NM", reading.bearing_deg, reading.range_nm)
}

/// JSON dump of the object's snapshot for the selected-object detail view
pub fn object_details(object: &TrackedObject) -> Option<String> {
    match serde_json::to_string(object) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::warn!(object_id = object.id, error = %e, "failed to serialize object details");
            None
        }
    }
}
