use crate::utils::config::MapRegion;
use crate::validation::error::{OverlayError, OverlayResult};

/// Current zoom level of the map view.
///
/// Only used for visual scaling; nothing is gated on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    zoom: u8,
    min_zoom: u8,
    max_zoom: u8,
}

impl ViewportState {
    pub fn new(min_zoom: u8, max_zoom: u8, zoom: u8) -> OverlayResult<Self> {
        if min_zoom > max_zoom {
            return Err(OverlayError::InvalidZoomBounds {
                min: min_zoom,
                max: max_zoom,
            });
        }

        Ok(Self {
            zoom: zoom.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
        })
    }

    /// Viewport opened at the region's default zoom
    pub fn for_region(region: &MapRegion) -> OverlayResult<Self> {
        Self::new(region.min_zoom, region.max_zoom, region.default_zoom)
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn bounds(&self) -> (u8, u8) {
        (self.min_zoom, self.max_zoom)
    }

    /// Apply a zoom change from the map, clamped to the bounds. Returns the applied zoom.
    pub fn set_zoom(&mut self, zoom: u8) -> u8 {
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        if clamped != zoom {
            tracing::debug!(requested = zoom, applied = clamped, "zoom clamped to bounds");
        }
        self.zoom = clamped;
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_from_region() {
        let viewport = ViewportState::for_region(&MapRegion::syria()).unwrap();
        assert_eq!(viewport.zoom(), 9);
        assert_eq!(viewport.bounds(), (8, 12));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut viewport = ViewportState::new(8, 12, 9).unwrap();

        assert_eq!(viewport.set_zoom(11), 11);
        assert_eq!(viewport.set_zoom(3), 8);
        assert_eq!(viewport.set_zoom(18), 12);
        assert_eq!(viewport.zoom(), 12);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert!(matches!(
            ViewportState::new(12, 8, 9),
            Err(OverlayError::InvalidZoomBounds { min: 12, max: 8 })
        ));
    }
}
