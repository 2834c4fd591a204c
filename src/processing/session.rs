//! Two-point bearing/range measurement
//!
//! A session lives only between the measurement button's press and its
//! release. The start anchor is fixed at press time; the end anchor follows
//! the cursor. Derived values are recomputed from scratch every frame so
//! object-bound anchors track their objects.

use crate::algorithms::great_circle::{bearing, distance};
use crate::core::{Anchor, GeoPoint, METERS_TO_NAUTICAL_MILES};
use crate::processing::feed::{resolve, SnapshotProvider};
use serde::Serialize;

/// Measurement state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
}

/// An in-progress measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementSession {
    start: Anchor,
    end: Anchor,
}

impl MeasurementSession {
    pub fn start(&self) -> Anchor {
        self.start
    }

    pub fn end(&self) -> Anchor {
        self.end
    }

    /// Bearing and range between the resolved anchors.
    ///
    /// `None` while either anchor's object is missing from the feed.
    pub fn reading<F>(&self, feed: &F, magnetic_declination_deg: i32) -> Option<BraaReading>
    where
        F: SnapshotProvider + ?Sized,
    {
        let start = resolve(&self.start, feed)?;
        let end = resolve(&self.end, feed)?;
        Some(BraaReading::between(start, end, magnetic_declination_deg))
    }
}

/// Bearing and range from one point to another
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BraaReading {
    pub start: GeoPoint,
    pub end: GeoPoint,
    /// Initial great-circle bearing, degrees true
    pub true_bearing_deg: f64,
    /// Whole-degree bearing corrected for magnetic declination, `[0, 360)`
    pub bearing_deg: u16,
    /// Great-circle range in meters
    pub range_m: f64,
    /// Range floored to whole nautical miles
    pub range_nm: u32,
}

impl BraaReading {
    pub fn between(start: GeoPoint, end: GeoPoint, magnetic_declination_deg: i32) -> Self {
        let true_bearing_deg = bearing(start, end);
        let range_m = distance(start, end);

        let magnetic = (true_bearing_deg.floor() as i64 + i64::from(magnetic_declination_deg))
            .rem_euclid(360);

        Self {
            start,
            end,
            true_bearing_deg,
            bearing_deg: magnetic as u16,
            range_m,
            range_nm: (range_m * METERS_TO_NAUTICAL_MILES).floor() as u32,
        }
    }
}

/// Holds at most one live measurement session
#[derive(Debug, Clone, Default)]
pub struct MeasurementTool {
    session: Option<MeasurementSession>,
}

impl MeasurementTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.session.is_some() {
            SessionState::Active
        } else {
            SessionState::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&MeasurementSession> {
        self.session.as_ref()
    }

    /// Idle -> Active with both anchors at `anchor`.
    ///
    /// A press while already active is ignored; returns whether a session started.
    pub fn begin(&mut self, anchor: Anchor) -> bool {
        if self.session.is_some() {
            tracing::debug!("measurement already active, ignoring press");
            return false;
        }

        tracing::debug!(start = ?anchor, "measurement started");
        self.session = Some(MeasurementSession {
            start: anchor,
            end: anchor,
        });
        true
    }

    /// Move the end anchor; no-op while idle
    pub fn update(&mut self, anchor: Anchor) {
        if let Some(session) = self.session.as_mut() {
            session.end = anchor;
        }
    }

    /// Active -> Idle, discarding the session
    pub fn finish(&mut self) -> Option<MeasurementSession> {
        let finished = self.session.take();
        if finished.is_some() {
            tracing::debug!("measurement ended");
        }
        finished
    }
}
