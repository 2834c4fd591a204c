//! Heading indicator geometry for airborne objects

use crate::algorithms::great_circle::destination;
use crate::core::{GeoPoint, TrackedObject};
use crate::utils::config::HeadingProjectionConfig;

/// Length of the heading indicator at `zoom`, in meters.
///
/// Shrinks linearly as the view zooms in and never goes negative.
pub fn indicator_length(zoom: u8, config: &HeadingProjectionConfig) -> f64 {
    (config.base_range_m - f64::from(zoom) * config.zoom_scale_m).max(0.0)
}

/// Endpoint of the heading indicator drawn from the object's position.
///
/// Only airborne objects reporting a heading get one.
pub fn heading_endpoint(
    object: &TrackedObject,
    zoom: u8,
    config: &HeadingProjectionConfig,
) -> Option<GeoPoint> {
    if !object.is_airborne() {
        return None;
    }
    let heading = object.heading.filter(|h| h.is_finite())?;

    Some(destination(object.position, heading, indicator_length(zoom, config)))
}
