use crate::utils::config::ConfigError;
use thiserror::Error;

/// Errors raised at the overlay's construction and configuration boundaries.
///
/// Nothing on the per-event or per-frame path returns one of these: a
/// vanished object or degenerate geometry simply omits output for a frame.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// Coordinate outside the WGS84 range or not finite
    #[error("Invalid {field}: {value}")]
    InvalidCoordinate { field: &'static str, value: f64 },

    /// Zoom bounds are inverted
    #[error("Invalid zoom bounds: min {min} > max {max}")]
    InvalidZoomBounds { min: u8, max: u8 },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for overlay operations
pub type OverlayResult<T> = Result<T, OverlayError>;
