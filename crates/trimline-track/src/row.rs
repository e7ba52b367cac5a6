//! Headless virtualized item row.
//!
//! Lays fixed-width items out left to right and animates offset changes.
//! An opt-in transaction log records exactly which visual transactions the
//! core issued.

use std::ops::Range;

use tracing::{trace, warn};
use trimline_core::{Rect, Size};

use crate::anim::AnimFloat;
use crate::collaborator::{Batch, ScrollAnimation, StructuralEdit, TrackCollaborator};

/// One visual transaction observed by the row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowTransaction {
    Batch(Batch),
    Reload,
    Offset { target: f32, animation: ScrollAnimation },
}

/// Fixed-width [`TrackCollaborator`] with an animated scroll offset.
#[derive(Debug, Clone)]
pub struct VirtualRow {
    item_count: usize,
    item_size: Size,
    viewport_width: f32,
    offset: AnimFloat,
    reloads: usize,
    /// `None` unless enabled with [`VirtualRow::with_transaction_log`].
    log: Option<Vec<RowTransaction>>,
}

impl VirtualRow {
    /// Empty row; the track model populates it on construction.
    pub fn new(item_size: Size, viewport_width: f32, animation_speed: f32) -> Self {
        Self {
            item_count: 0,
            item_size,
            viewport_width: viewport_width.max(0.0),
            offset: AnimFloat::new(0.0, animation_speed),
            reloads: 0,
            log: None,
        }
    }

    /// Record every transaction from now on. The log is unbounded, so keep
    /// it to tests and short diagnostic sessions.
    pub fn with_transaction_log(mut self) -> Self {
        self.log = Some(Vec::new());
        self
    }

    pub fn item_size(&self) -> Size {
        self.item_size
    }

    /// Resize the visible window. Returns true when the width changed.
    pub fn set_viewport_width(&mut self, width: f32) -> bool {
        let width = width.max(0.0);
        if (width - self.viewport_width).abs() < f32::EPSILON {
            return false;
        }
        self.viewport_width = width;
        true
    }

    /// Advance the offset animation. Returns true while still animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.offset.tick(dt);
        !self.offset.done()
    }

    /// Offset the current animation will settle at.
    pub fn target_offset(&self) -> f32 {
        self.offset.target()
    }

    /// Frame of an item in content coordinates.
    pub fn item_frame(&self, index: usize) -> Rect {
        Rect::new(
            index as f32 * self.item_size.width,
            0.0,
            self.item_size.width,
            self.item_size.height,
        )
    }

    /// Items intersecting the visible window at the current offset.
    pub fn visible_range(&self) -> Range<usize> {
        let w = self.item_size.width;
        if w <= 0.0 || self.item_count == 0 {
            return 0..0;
        }
        let left = self.offset.current().max(0.0);
        let right = (self.offset.current() + self.viewport_width).max(0.0);
        let first = ((left / w).floor() as usize).min(self.item_count);
        let last = ((right / w).ceil() as usize).min(self.item_count);
        first..last
    }

    /// Logged transactions; empty when logging is off.
    pub fn transactions(&self) -> &[RowTransaction] {
        self.log.as_deref().unwrap_or_default()
    }

    /// Number of full reloads issued so far.
    pub fn reload_count(&self) -> usize {
        self.reloads
    }

    /// Forget logged transactions (the row state is kept).
    pub fn clear_transactions(&mut self) {
        if let Some(log) = self.log.as_mut() {
            log.clear();
        }
    }

    fn record(&mut self, transaction: RowTransaction) {
        if let Some(log) = self.log.as_mut() {
            log.push(transaction);
        }
    }
}

impl TrackCollaborator for VirtualRow {
    fn number_of_items(&self) -> usize {
        self.item_count
    }

    fn perform_batch_updates(&mut self, batch: &Batch) {
        // Validate the whole batch first so it lands all-or-nothing.
        let mut count = self.item_count;
        for edit in batch.edits() {
            match edit {
                StructuralEdit::Insert(indices) => {
                    let after = count + indices.len();
                    if indices.iter().any(|&i| i >= after) {
                        warn!(?indices, count, "Insert index out of range, batch dropped");
                        return;
                    }
                    count = after;
                }
                StructuralEdit::Delete(indices) => {
                    if indices.len() > count || indices.iter().any(|&i| i >= count) {
                        warn!(?indices, count, "Delete index out of range, batch dropped");
                        return;
                    }
                    count -= indices.len();
                }
            }
        }
        trace!(from = self.item_count, to = count, "Row batch applied");
        self.item_count = count;
        self.record(RowTransaction::Batch(batch.clone()));
    }

    fn reload_all_items(&mut self) {
        self.reloads += 1;
        self.record(RowTransaction::Reload);
    }

    fn content_size(&self) -> Size {
        Size::new(
            self.item_count as f32 * self.item_size.width,
            self.item_size.height,
        )
    }

    fn content_offset(&self) -> f32 {
        self.offset.current()
    }

    fn set_content_offset(&mut self, offset: f32, animation: ScrollAnimation) {
        if !offset.is_finite() {
            return;
        }
        match animation {
            ScrollAnimation::Immediate => self.offset.jump_to(offset),
            ScrollAnimation::Animated => self.offset.set_target(offset),
        }
        self.record(RowTransaction::Offset {
            target: offset,
            animation,
        });
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }
}
