//! Pinch-to-zoom state machine.
//!
//! Pinch recognizers report a continuous scale many times per frame. The
//! controller integrates the incremental change and only emits a discrete
//! insert/remove once the accumulated change crosses a threshold and the
//! previous commit is older than the debounce window.

use std::time::{Duration, Instant};

use tracing::{debug, trace};
use trimline_core::ZoomConfig;

/// Phase of a pinch gesture as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinchPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// Discrete structural change requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomCommand {
    /// Zoomed in: show one more item.
    InsertItem,
    /// Zoomed out: show one item less.
    RemoveItem,
    /// Pinch finished: re-render everything to drop incremental drift.
    ReloadAll,
}

#[derive(Debug, Clone, Copy)]
struct ZoomSession {
    /// Scale at the previous event; deltas are incremental from here.
    initial_scale: f32,
    accumulated_delta: f32,
}

/// Accumulates pinch scale and emits debounced [`ZoomCommand`]s.
#[derive(Debug, Clone)]
pub struct ZoomController {
    scale_threshold: f32,
    debounce: Duration,
    min_overlay_scale: f32,
    max_overlay_scale: f32,
    session: Option<ZoomSession>,
    last_commit: Option<Instant>,
    overlay_scale: f32,
}

impl ZoomController {
    pub fn new(config: &ZoomConfig) -> Self {
        Self {
            scale_threshold: config.scale_threshold,
            debounce: config.debounce(),
            min_overlay_scale: config.min_overlay_scale,
            max_overlay_scale: config.max_overlay_scale,
            session: None,
            last_commit: None,
            overlay_scale: config.min_overlay_scale,
        }
    }

    pub fn is_pinching(&self) -> bool {
        self.session.is_some()
    }

    /// Scale change accumulated since the last commit (0 when idle).
    pub fn accumulated_delta(&self) -> f32 {
        self.session.map_or(0.0, |s| s.accumulated_delta)
    }

    /// Visual scale for the clip overlay, kept within the configured bounds.
    pub fn overlay_scale(&self) -> f32 {
        self.overlay_scale
    }

    /// Dispatch one pinch callback.
    pub fn handle(&mut self, phase: PinchPhase, scale: f32, now: Instant) -> Option<ZoomCommand> {
        match phase {
            PinchPhase::Began => {
                self.pinch_began(scale);
                None
            }
            PinchPhase::Changed => self.pinch_changed(scale, now),
            PinchPhase::Ended | PinchPhase::Cancelled => Some(self.pinch_ended()),
        }
    }

    pub fn pinch_began(&mut self, scale: f32) {
        trace!(scale, "Pinch began");
        self.session = Some(ZoomSession {
            initial_scale: scale,
            accumulated_delta: 0.0,
        });
    }

    pub fn pinch_changed(&mut self, scale: f32, now: Instant) -> Option<ZoomCommand> {
        if !scale.is_finite() {
            return None;
        }
        let Some(session) = self.session.as_mut() else {
            // Recognizer skipped `Began`; start from here without a delta.
            self.pinch_began(scale);
            return None;
        };

        let delta = scale - session.initial_scale;
        if session.initial_scale > 0.0 {
            let ratio = scale / session.initial_scale;
            self.overlay_scale = (self.overlay_scale * ratio)
                .clamp(self.min_overlay_scale, self.max_overlay_scale);
        }
        session.accumulated_delta += delta;
        session.initial_scale = scale;

        let accumulated = session.accumulated_delta;
        if accumulated.abs() <= self.scale_threshold {
            return None;
        }
        let debounced = self
            .last_commit
            .is_some_and(|last| now.saturating_duration_since(last) <= self.debounce);
        if debounced {
            trace!(accumulated, "Zoom commit debounced");
            return None;
        }

        session.accumulated_delta = 0.0;
        self.last_commit = Some(now);
        let command = if accumulated > 0.0 {
            ZoomCommand::InsertItem
        } else {
            ZoomCommand::RemoveItem
        };
        debug!(?command, accumulated, "Zoom commit");
        Some(command)
    }

    pub fn pinch_ended(&mut self) -> ZoomCommand {
        trace!("Pinch ended");
        self.session = None;
        ZoomCommand::ReloadAll
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(&ZoomConfig::default())
    }
}
