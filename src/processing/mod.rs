//! Per-frame processing: feed access, visibility, measurement, viewport

pub mod feed;
pub mod filter;
pub mod session;
pub mod viewport;

pub use feed::{resolve, FeedSnapshot, SnapshotProvider};
pub use filter::DisplayFilter;
pub use session::{BraaReading, MeasurementSession, MeasurementTool, SessionState};
pub use viewport::ViewportState;
