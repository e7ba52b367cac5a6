//! Per-handle drag sessions.
//!
//! Each handle owns one [`HandleDragController`]. The two controllers never
//! see each other: they meet only in the shared [`TrimRange`], whose clamping
//! keeps the handles apart however their events interleave.

use tracing::{trace, warn};
use trimline_core::{Rect, TrimEdge, TrimRange, ValueMapper};

/// Phase of a pan gesture on a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Began,
    Changed,
    Ended,
    /// Treated exactly like `Ended`: partial progress is committed.
    Cancelled,
}

/// State captured when a drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pixel position of the tracked handle edge at drag-begin.
    pub anchor: f32,
    /// Last cumulative translation seen.
    pub translation: f32,
}

/// Result of a finished drag, to be absorbed by the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragCommit {
    pub edge: TrimEdge,
    /// Net pixel displacement of the tracked edge over the whole drag.
    pub displacement: f32,
}

/// Drag state machine for one handle: idle → dragging → idle.
#[derive(Debug, Clone)]
pub struct HandleDragController {
    edge: TrimEdge,
    session: Option<DragSession>,
}

impl HandleDragController {
    pub fn new(edge: TrimEdge) -> Self {
        Self {
            edge,
            session: None,
        }
    }

    pub fn edge(&self) -> TrimEdge {
        self.edge
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// The start handle tracks its leading edge, the end handle its
    /// trailing edge (`origin + handle width`).
    fn tracked_edge(&self, frame: Rect) -> f32 {
        match self.edge {
            TrimEdge::Start => frame.x,
            TrimEdge::End => frame.right(),
        }
    }

    /// idle → dragging. A second begin restarts the session.
    pub fn begin(&mut self, frame: Rect) {
        if self.session.is_some() {
            warn!(edge = ?self.edge, "Drag began twice, restarting session");
        }
        let anchor = self.tracked_edge(frame);
        trace!(edge = ?self.edge, anchor, "Drag began");
        self.session = Some(DragSession {
            anchor,
            translation: 0.0,
        });
    }

    /// Apply a cumulative translation. Returns true when the range was
    /// written.
    pub fn update(&mut self, translation: f32, mapper: ValueMapper, range: &mut TrimRange) -> bool {
        let Some(session) = self.session.as_mut() else {
            trace!(edge = ?self.edge, "Drag change without session ignored");
            return false;
        };
        if !translation.is_finite() {
            return false;
        }
        session.translation = translation;
        if !mapper.is_defined() {
            return false;
        }
        let candidate = mapper.value(session.anchor + translation);
        range.set(self.edge, candidate);
        trace!(edge = ?self.edge, candidate, value = range.value(self.edge), "Drag changed");
        true
    }

    /// dragging → idle. `frame` is the handle frame after the last update.
    pub fn finish(&mut self, frame: Rect) -> Option<DragCommit> {
        let session = self.session.take()?;
        let displacement = self.tracked_edge(frame) - session.anchor;
        trace!(edge = ?self.edge, displacement, "Drag finished");
        Some(DragCommit {
            edge: self.edge,
            displacement,
        })
    }
}
