//! Spatial algorithms: great-circle math, cursor snapping, heading projection

pub mod great_circle;
pub mod snap;
pub mod heading;

pub use great_circle::{bearing, destination, distance};
pub use snap::{nearest_object, snap};
pub use heading::{heading_endpoint, indicator_length};
