//! Interaction controller for the map overlay
//!
//! The rendering layer translates its platform events into the calls below
//! and draws whatever `frame` returns. Every call completes synchronously and
//! the feed is passed in per call, so the controller never holds object data.

use crate::algorithms::heading::heading_endpoint;
use crate::algorithms::snap::snap;
use crate::api::formatting::{braa_label, object_details, object_label};
use crate::api::types::{FrameOutput, MeasurementOverlay, ObjectOverlay, PointerButton};
use crate::core::{Anchor, GeoPoint, ObjectId};
use crate::processing::feed::{resolve, SnapshotProvider};
use crate::processing::filter::DisplayFilter;
use crate::processing::session::{MeasurementSession, MeasurementTool, SessionState};
use crate::processing::viewport::ViewportState;
use crate::utils::config::{ConfigurationManager, OverlayConfig};
use crate::validation::error::OverlayResult;

/// Button that starts and ends a measurement
pub const MEASURE_BUTTON: PointerButton = PointerButton::Secondary;

/// Cursor, measurement and selection state of one mounted map view
#[derive(Debug, Clone)]
pub struct OverlayController {
    config: OverlayConfig,
    filter: DisplayFilter,
    viewport: ViewportState,
    measurement: MeasurementTool,
    cursor: Option<Anchor>,
    active_object: Option<ObjectId>,
}

impl OverlayController {
    /// Create a controller, rejecting invalid configuration
    pub fn new(config: OverlayConfig) -> OverlayResult<Self> {
        let validation = ConfigurationManager::validate_config(&config);
        if let Some(err) = validation.errors.into_iter().next() {
            return Err(err.into());
        }

        let viewport = ViewportState::for_region(&config.region)?;
        tracing::debug!(region = %config.region.name, zoom = viewport.zoom(), "overlay controller created");

        Ok(Self {
            filter: DisplayFilter::new(config.filter.clone()),
            config,
            viewport,
            measurement: MeasurementTool::new(),
            cursor: None,
            active_object: None,
        })
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn cursor_anchor(&self) -> Option<Anchor> {
        self.cursor
    }

    pub fn measurement_state(&self) -> SessionState {
        self.measurement.state()
    }

    pub fn session(&self) -> Option<&MeasurementSession> {
        self.measurement.session()
    }

    pub fn active_object(&self) -> Option<ObjectId> {
        self.active_object
    }

    /// Native map panning is suspended for the whole measurement gesture
    pub fn map_drag_enabled(&self) -> bool {
        !self.measurement.is_active()
    }

    fn snap_cursor<F>(&mut self, point: GeoPoint, snap_enabled: bool, feed: &F) -> Anchor
    where
        F: SnapshotProvider + ?Sized,
    {
        let anchor = snap(point, self.filter.visible(feed), snap_enabled);
        self.cursor = Some(anchor);
        anchor
    }

    /// Pointer moved over the map.
    ///
    /// `snap_enabled` is the modifier state sampled at this event.
    pub fn pointer_move<F>(&mut self, point: GeoPoint, snap_enabled: bool, feed: &F)
    where
        F: SnapshotProvider + ?Sized,
    {
        let anchor = self.snap_cursor(point, snap_enabled, feed);
        self.measurement.update(anchor);
    }

    /// Pointer pressed. The measurement button starts a session anchored at
    /// the cursor; returns whether one started.
    pub fn pointer_down<F>(
        &mut self,
        button: PointerButton,
        point: GeoPoint,
        snap_enabled: bool,
        feed: &F,
    ) -> bool
    where
        F: SnapshotProvider + ?Sized,
    {
        if button != MEASURE_BUTTON {
            return false;
        }

        let anchor = self.snap_cursor(point, snap_enabled, feed);
        self.measurement.begin(anchor)
    }

    /// Pointer released. Releasing the measurement button ends the session
    /// and returns it.
    pub fn pointer_up(&mut self, button: PointerButton) -> Option<MeasurementSession> {
        if button != MEASURE_BUTTON {
            return None;
        }
        self.measurement.finish()
    }

    /// Zoom changed on the map; returns the applied (clamped) zoom
    pub fn zoom_changed(&mut self, zoom: u8) -> u8 {
        let applied = self.viewport.set_zoom(zoom);
        tracing::trace!(zoom = applied, "zoom changed");
        applied
    }

    /// Object clicked: select it, or clear the selection if it was already selected
    pub fn toggle_active(&mut self, id: ObjectId) -> Option<ObjectId> {
        self.active_object = if self.active_object == Some(id) {
            None
        } else {
            Some(id)
        };
        tracing::debug!(active = ?self.active_object, "active object changed");
        self.active_object
    }

    /// Build everything the renderer draws for the current feed snapshot.
    ///
    /// Elements whose anchors no longer resolve are left out of this frame.
    pub fn frame<F>(&self, feed: &F) -> FrameOutput
    where
        F: SnapshotProvider + ?Sized,
    {
        let zoom = self.viewport.zoom();

        let objects = self
            .filter
            .visible(feed)
            .map(|object| {
                let active = self.active_object == Some(object.id);
                ObjectOverlay {
                    id: object.id,
                    position: object.position,
                    heading_endpoint: heading_endpoint(object, zoom, &self.config.heading),
                    active,
                    label: object_label(object),
                    details: if active { object_details(object) } else { None },
                }
            })
            .collect();

        let cursor = self.cursor.as_ref().and_then(|anchor| resolve(anchor, feed));

        let measurement = self
            .measurement
            .session()
            .and_then(|session| session.reading(feed, self.config.region.magnetic_declination_deg))
            .map(|reading| MeasurementOverlay {
                label: braa_label(&reading),
                reading,
            });

        FrameOutput {
            objects,
            cursor,
            measurement,
            zoom,
            map_drag_enabled: self.map_drag_enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::great_circle::{bearing, distance};
    use crate::core::{TrackedObject, METERS_TO_NAUTICAL_MILES};
    use crate::processing::feed::FeedSnapshot;

    fn aircraft(id: ObjectId, lat: f64, lon: f64) -> TrackedObject {
        TrackedObject::new(id, GeoPoint::new(lat, lon))
            .with_types(["Air", "FixedWing"])
            .with_heading(90.0)
            .with_name(format!("Jet {}", id))
    }

    fn controller() -> OverlayController {
        OverlayController::new(OverlayConfig::default()).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = OverlayConfig::default();
        config.region.default_zoom = 30;
        assert!(OverlayController::new(config).is_err());
    }

    #[test]
    fn test_cursor_snaps_only_with_modifier() {
        let feed = FeedSnapshot::from_objects(vec![aircraft(1, 33.50, 36.30), aircraft(2, 33.52, 36.35)]);
        let mut ctl = controller();
        let cursor = GeoPoint::new(33.501, 36.301);

        ctl.pointer_move(cursor, false, &feed);
        assert_eq!(ctl.cursor_anchor(), Some(Anchor::Point(cursor)));

        ctl.pointer_move(cursor, true, &feed);
        assert_eq!(ctl.cursor_anchor(), Some(Anchor::Object(1)));
        assert_eq!(ctl.frame(&feed).cursor, Some(GeoPoint::new(33.50, 36.30)));
    }

    #[test]
    fn test_hidden_objects_never_snapped() {
        let feed = FeedSnapshot::from_objects(vec![
            TrackedObject::new(1, GeoPoint::new(33.5, 36.3)).with_types(["Ground"]),
            TrackedObject::new(2, GeoPoint::new(33.5, 36.3)).with_types(["Air", "Parachutist"]),
            aircraft(3, 34.0, 37.0),
        ]);
        let mut ctl = controller();

        ctl.pointer_move(GeoPoint::new(33.5, 36.3), true, &feed);
        assert_eq!(ctl.cursor_anchor(), Some(Anchor::Object(3)));

        let ids: Vec<ObjectId> = ctl.frame(&feed).objects.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_measurement_gesture() {
        let feed = FeedSnapshot::new();
        let mut ctl = controller();
        let p1 = GeoPoint::new(33.5, 36.3);
        let p2 = GeoPoint::new(33.7, 36.5);

        ctl.pointer_move(p1, false, &feed);
        assert!(ctl.pointer_down(PointerButton::Secondary, p1, false, &feed));
        assert_eq!(ctl.measurement_state(), SessionState::Active);
        assert!(!ctl.map_drag_enabled());

        ctl.pointer_move(p2, false, &feed);
        let frame = ctl.frame(&feed);
        assert!(!frame.map_drag_enabled);
        let measurement = frame.measurement.unwrap();
        assert_eq!(measurement.reading.start, p1);
        assert_eq!(measurement.reading.end, p2);
        let expected_bearing = (bearing(p1, p2).floor() as u16 + 5) % 360;
        assert_eq!(measurement.reading.bearing_deg, expected_bearing);
        assert_eq!(
            measurement.reading.range_nm,
            (distance(p1, p2) * METERS_TO_NAUTICAL_MILES).floor() as u32
        );

        assert!(ctl.pointer_up(PointerButton::Secondary).is_some());
        assert_eq!(ctl.measurement_state(), SessionState::Idle);
        assert!(ctl.map_drag_enabled());
        assert!(ctl.session().is_none());
        assert!(ctl.frame(&feed).measurement.is_none());
    }

    #[test]
    fn test_other_buttons_do_not_measure() {
        let feed = FeedSnapshot::new();
        let mut ctl = controller();
        let p = GeoPoint::new(33.5, 36.3);

        assert!(!ctl.pointer_down(PointerButton::Primary, p, false, &feed));
        assert_eq!(ctl.measurement_state(), SessionState::Idle);

        ctl.pointer_down(PointerButton::Secondary, p, false, &feed);
        assert!(ctl.pointer_up(PointerButton::Primary).is_none());
        assert_eq!(ctl.measurement_state(), SessionState::Active);
    }

    #[test]
    fn test_session_survives_vanished_object() {
        let with_a = FeedSnapshot::from_objects(vec![aircraft(1, 33.50, 36.30)]);
        let without_a = FeedSnapshot::new();
        let mut ctl = controller();

        ctl.pointer_down(PointerButton::Secondary, GeoPoint::new(33.5001, 36.3001), true, &with_a);
        assert_eq!(ctl.session().unwrap().start(), Anchor::Object(1));
        ctl.pointer_move(GeoPoint::new(33.6, 36.4), false, &with_a);
        assert!(ctl.frame(&with_a).measurement.is_some());

        let frame = ctl.frame(&without_a);
        assert!(frame.measurement.is_none());
        assert_eq!(ctl.measurement_state(), SessionState::Active);

        assert!(ctl.frame(&with_a).measurement.is_some());
    }

    #[test]
    fn test_heading_indicator_scales_with_zoom() {
        let feed = FeedSnapshot::from_objects(vec![aircraft(1, 33.5, 36.3)]);
        let mut ctl = controller();

        let at = |ctl: &OverlayController| {
            let frame = ctl.frame(&feed);
            let object = &frame.objects[0];
            distance(object.position, object.heading_endpoint.unwrap())
        };

        assert!((at(&ctl) - 12000.0).abs() < 1e-3);
        assert_eq!(ctl.zoom_changed(12), 12);
        assert!((at(&ctl) - 6000.0).abs() < 1e-3);
        assert_eq!(ctl.zoom_changed(20), 12);
    }

    #[test]
    fn test_toggle_active_object() {
        let feed = FeedSnapshot::from_objects(vec![aircraft(1, 33.5, 36.3), aircraft(2, 33.6, 36.3)]);
        let mut ctl = controller();

        assert_eq!(ctl.toggle_active(1), Some(1));
        let frame = ctl.frame(&feed);
        assert!(frame.objects[0].active);
        assert!(frame.objects[0].details.is_some());
        assert!(!frame.objects[1].active);
        assert!(frame.objects[1].details.is_none());

        assert_eq!(ctl.toggle_active(2), Some(2));
        assert_eq!(ctl.toggle_active(2), None);
        assert!(ctl.frame(&feed).objects.iter().all(|o| !o.active));
    }
}
