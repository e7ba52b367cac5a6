//! Composition root of the trim timeline.
//!
//! [`TimelineWidget`] owns the trim range, the track model, both handle drag
//! controllers, the zoom controller and the render-layer collaborator. All
//! handle ↔ track traffic passes through here; neither side holds a
//! reference to the other.

use std::fmt;
use std::time::Instant;

use glam::Vec2;
use tracing::{debug, info, trace};
use trimline_core::{Rect, Result, Size, TrimEdge, TrimRange, TrimlineConfig, ValueMapper};
use trimline_track::{
    configure_item, ItemAppearance, ItemSelection, PinchPhase, ScrollAnimation, TrackCollaborator,
    VirtualizedTrack, ZoomCommand, ZoomController,
};

use crate::drag::{DragCommit, DragPhase, HandleDragController};
use crate::geometry::{Highlight, TrimGeometry};
use crate::gesture::{GestureRouter, GestureTarget};

type GeometryListener = Box<dyn FnMut(&TrimGeometry)>;

/// Interactive trim timeline over a render-layer collaborator `C`.
pub struct TimelineWidget<C: TrackCollaborator> {
    config: TrimlineConfig,
    range: TrimRange,
    track: VirtualizedTrack,
    row: C,
    start_drag: HandleDragController,
    end_drag: HandleDragController,
    zoom: ZoomController,
    selection: ItemSelection,
    router: GestureRouter,
    content_size: Size,
    geometry: TrimGeometry,
    listeners: Vec<GeometryListener>,
}

impl<C: TrackCollaborator> TimelineWidget<C> {
    /// Validate `config`, bring `row` to the initial item count and lay out
    /// the handles.
    pub fn new(config: TrimlineConfig, mut row: C) -> Result<Self> {
        config.validate()?;
        let track = VirtualizedTrack::new(&config.track);
        track.populate(&mut row);

        let mut widget = Self {
            range: TrimRange::new(config.trim.minimum_trim_length),
            track,
            row,
            start_drag: HandleDragController::new(TrimEdge::Start),
            end_drag: HandleDragController::new(TrimEdge::End),
            zoom: ZoomController::new(&config.zoom),
            selection: ItemSelection::default(),
            router: GestureRouter::new(config.handles.hit_slop),
            content_size: Size::ZERO,
            geometry: TrimGeometry::default(),
            listeners: Vec::new(),
            config,
        };
        widget.sync_content_size();
        widget.recenter(ScrollAnimation::Immediate);
        info!(
            items = widget.track.item_count(),
            content_width = widget.geometry.content_width,
            "Timeline widget ready"
        );
        Ok(widget)
    }

    // ── Accessors ──────────────────────────────────────────────

    pub fn config(&self) -> &TrimlineConfig {
        &self.config
    }

    pub fn range(&self) -> &TrimRange {
        &self.range
    }

    pub fn track(&self) -> &VirtualizedTrack {
        &self.track
    }

    pub fn row(&self) -> &C {
        &self.row
    }

    /// Direct access for renderer bookkeeping (ticks, viewport size). Item
    /// count must only change through the widget.
    pub fn row_mut(&mut self) -> &mut C {
        &mut self.row
    }

    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    pub fn geometry(&self) -> &TrimGeometry {
        &self.geometry
    }

    pub fn selection(&self) -> ItemSelection {
        self.selection
    }

    pub fn is_dragging(&self) -> bool {
        self.start_drag.is_dragging() || self.end_drag.is_dragging()
    }

    /// Mapper over the width the current geometry was laid out with.
    pub fn mapper(&self) -> ValueMapper {
        ValueMapper::new(self.geometry.content_width)
    }

    // ── Layout ─────────────────────────────────────────────────

    /// Content-size notification from the virtualization layer.
    ///
    /// Called synchronously on initial layout, on viewport resize and after
    /// every batch the widget issues. Recomputes all frames and notifies
    /// geometry listeners.
    pub fn content_size_changed(&mut self, size: Size) {
        if size.width.is_finite() && size.height.is_finite() {
            self.content_size = size;
        }
        self.relayout();
    }

    /// Recompute geometry from the last notified content size.
    pub fn relayout(&mut self) {
        let width = if self.content_size.width > 0.0 {
            self.content_size.width
        } else {
            self.track.effective_content_width(&self.row)
        };
        let height = if self.content_size.height > 0.0 {
            self.content_size.height
        } else {
            self.track.item_height()
        };
        let highlight = if self.is_dragging() {
            Highlight::Active
        } else {
            Highlight::Idle
        };
        self.geometry = TrimGeometry::compute(&self.range, width, height, &self.config.handles, highlight);
        trace!(
            width,
            start = self.geometry.start_handle.x,
            end = self.geometry.end_handle.right(),
            "Geometry recomputed"
        );
        let geometry = self.geometry;
        for listener in &mut self.listeners {
            listener(&geometry);
        }
    }

    /// Register a renderer callback. It is called once with the current
    /// geometry and again after every recompute.
    pub fn subscribe_geometry(&mut self, mut listener: impl FnMut(&TrimGeometry) + 'static) {
        listener(&self.geometry);
        self.listeners.push(Box::new(listener));
    }

    /// Center the content in the viewport when it is narrower than it.
    pub fn recenter(&mut self, animation: ScrollAnimation) -> bool {
        self.track.recenter_offset(&mut self.row, animation)
    }

    fn sync_content_size(&mut self) {
        let size = self.row.content_size();
        self.content_size_changed(size);
    }

    // ── Handle drags ───────────────────────────────────────────

    fn drag_controller(&mut self, edge: TrimEdge) -> &mut HandleDragController {
        match edge {
            TrimEdge::Start => &mut self.start_drag,
            TrimEdge::End => &mut self.end_drag,
        }
    }

    /// Feed one pan callback for the handle at `edge`. `translation` is
    /// cumulative since the drag began.
    pub fn handle_drag(&mut self, edge: TrimEdge, phase: DragPhase, translation: f32) {
        match phase {
            DragPhase::Began => {
                let frame = self.geometry.handle(edge);
                self.drag_controller(edge).begin(frame);
                self.relayout();
            }
            DragPhase::Changed => {
                let mapper = self.mapper();
                let written = match edge {
                    TrimEdge::Start => self.start_drag.update(translation, mapper, &mut self.range),
                    TrimEdge::End => self.end_drag.update(translation, mapper, &mut self.range),
                };
                if written {
                    self.relayout();
                }
            }
            DragPhase::Ended | DragPhase::Cancelled => {
                let frame = self.geometry.handle(edge);
                match self.drag_controller(edge).finish(frame) {
                    Some(commit) => self.commit_drag(commit),
                    None => trace!(?edge, "Drag end without session ignored"),
                }
            }
        }
    }

    fn commit_drag(&mut self, commit: DragCommit) {
        let resized = self
            .track
            .resize_by_pixel_delta(commit.displacement, &mut self.row);
        self.range.reset_edge(commit.edge);
        self.selection.retain_within(self.track.item_count());
        self.sync_content_size();
        self.recenter(ScrollAnimation::Animated);
        debug!(
            edge = ?commit.edge,
            displacement = commit.displacement,
            resized,
            items = self.track.item_count(),
            "Trim committed"
        );
    }

    // ── Pinch zoom ─────────────────────────────────────────────

    /// Feed one pinch callback. Returns the command the zoom controller
    /// emitted, if any, after it has been applied to the track.
    pub fn handle_pinch(&mut self, phase: PinchPhase, scale: f32, now: Instant) -> Option<ZoomCommand> {
        let command = self.zoom.handle(phase, scale, now)?;
        let changed = match command {
            ZoomCommand::InsertItem => self.track.insert_one(&mut self.row),
            ZoomCommand::RemoveItem => {
                let removed = self.track.delete_one(&mut self.row);
                self.selection.retain_within(self.track.item_count());
                removed
            }
            ZoomCommand::ReloadAll => {
                self.row.reload_all_items();
                false
            }
        };
        if changed {
            self.sync_content_size();
        }
        Some(command)
    }

    // ── Pointer routing & items ────────────────────────────────

    /// Visible part of the item row, in content coordinates.
    pub fn track_band(&self) -> Rect {
        Rect::new(
            self.row.content_offset(),
            0.0,
            self.row.viewport_width(),
            self.track.item_height(),
        )
    }

    /// Which recognizer gets a gesture starting at `position` (content
    /// coordinates).
    pub fn route_pointer(&self, position: Vec2) -> GestureTarget {
        self.router.route(position, &self.geometry, self.track_band())
    }

    /// Item under a content-space point, if any.
    pub fn item_at(&self, position: Vec2) -> Option<usize> {
        if position.y < 0.0 || position.y >= self.track.item_height() {
            return None;
        }
        self.track.item_at_position(position.x)
    }

    pub fn configure_item(&self, index: usize) -> ItemAppearance {
        configure_item(index)
    }

    /// Select an existing item. Returns false for out-of-range indices.
    pub fn select_item(&mut self, index: usize) -> bool {
        if index >= self.track.item_count() {
            return false;
        }
        self.selection.select(index);
        true
    }

    pub fn deselect_item(&mut self) {
        self.selection.deselect();
    }

    /// Tap at a content-space point. Tapping outside every item clears the
    /// selection. Returns true when the selection changed.
    pub fn tap(&mut self, position: Vec2) -> bool {
        let hit = self.item_at(position);
        self.selection.tap(hit)
    }

    /// Item under the middle of the viewport.
    pub fn centered_item(&self) -> Option<usize> {
        let center = self.row.content_offset() + self.row.viewport_width() / 2.0;
        self.track.item_at_position(center)
    }
}

impl<C: TrackCollaborator + fmt::Debug> fmt::Debug for TimelineWidget<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimelineWidget")
            .field("range", &self.range)
            .field("track", &self.track)
            .field("row", &self.row)
            .field("geometry", &self.geometry)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
