//! Frame output handed to the rendering layer

use crate::core::{GeoPoint, ObjectId};
use crate::processing::session::BraaReading;
use serde::Serialize;

/// Pointer buttons the map surface reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button
    Primary,
    /// Middle button / wheel press
    Auxiliary,
    /// Right button; drives the measurement gesture
    Secondary,
}

impl PointerButton {
    /// Map a DOM-style `MouseEvent.button` index
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(PointerButton::Primary),
            1 => Some(PointerButton::Auxiliary),
            2 => Some(PointerButton::Secondary),
            _ => None,
        }
    }
}

/// Label text for an airborne object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectLabel {
    /// Display name, with the pilot appended when it adds information
    pub title: String,
    /// Altitude in thousands of feet, floored
    pub altitude_kft: i64,
}

/// Everything needed to draw one visible object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectOverlay {
    pub id: ObjectId,
    pub position: GeoPoint,
    /// End of the heading indicator line, airborne objects only
    pub heading_endpoint: Option<GeoPoint>,
    /// Whether this is the selected object
    pub active: bool,
    pub label: Option<ObjectLabel>,
    /// Full snapshot dump shown while the object is selected
    pub details: Option<String>,
}

/// Connecting line and label of a live measurement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementOverlay {
    pub reading: BraaReading,
    /// e.g. "095 / 12NM"
    pub label: String,
}

/// Per-frame output of the overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameOutput {
    /// Visible objects in feed order
    pub objects: Vec<ObjectOverlay>,
    /// Resolved cursor position, absent before the first move or while the
    /// snapped object is missing from the feed
    pub cursor: Option<GeoPoint>,
    /// Present while a session is active and both anchors resolve
    pub measurement: Option<MeasurementOverlay>,
    pub zoom: u8,
    /// False while a measurement gesture owns the pointer
    pub map_drag_enabled: bool,
}
