//! Interaction API consumed by the rendering layer
//!
//! The renderer feeds pointer, zoom and selection events into an
//! `OverlayController` and draws the `FrameOutput` it returns.

pub mod controller;
pub mod formatting;
pub mod types;

pub use controller::{OverlayController, MEASURE_BUTTON};
pub use formatting::{altitude_thousands_of_feet, braa_label, object_details, object_label};
pub use types::{FrameOutput, MeasurementOverlay, ObjectLabel, ObjectOverlay, PointerButton};
