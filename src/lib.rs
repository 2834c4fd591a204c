//! Tactical Map Overlay
//!
//! Cursor snapping, bearing/range measurement and heading projection for a
//! live map of tracked objects. Rendering and the object feed stay outside
//! this crate; they talk to it through `SnapshotProvider` and
//! `OverlayController`.

pub mod core;
pub mod algorithms;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod api;
pub mod logging;

// Re-export commonly used types
pub use self::core::{Anchor, GeoPoint, ObjectId, TrackedObject, METERS_TO_NAUTICAL_MILES};
pub use algorithms::{bearing, destination, distance, heading_endpoint, snap};
pub use processing::{
    resolve, BraaReading, DisplayFilter, FeedSnapshot, MeasurementSession, MeasurementTool,
    SessionState, SnapshotProvider, ViewportState,
};
pub use validation::{OverlayError, OverlayResult};
pub use utils::config::{
    ConfigError, ConfigurationManager, FilterPolicy, HeadingProjectionConfig, MapRegion,
    OverlayConfig,
};
pub use api::{FrameOutput, MeasurementOverlay, ObjectOverlay, OverlayController, PointerButton};
