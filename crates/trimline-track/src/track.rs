//! The virtualized track: how many fixed-width items the clip spans.
//!
//! Zooming in adds items, zooming out and trimming remove them. The model
//! keeps only the count; content width is always derived from it, and the
//! render layer is updated through one [`Batch`] per commit.

use tracing::{debug, trace};
use trimline_core::TrackConfig;

use crate::collaborator::{Batch, ScrollAnimation, TrackCollaborator};

/// Item count and sizing of the scrollable row.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualizedTrack {
    item_count: usize,
    item_width: f32,
    item_height: f32,
    min_items: usize,
    max_items: usize,
}

impl VirtualizedTrack {
    /// Track with `config.initial_items`, clamped to the configured bounds.
    pub fn new(config: &TrackConfig) -> Self {
        let max_items = config.max_items.max(config.min_items);
        Self {
            item_count: config.initial_items.clamp(config.min_items, max_items),
            item_width: config.item_width,
            item_height: config.item_height,
            min_items: config.min_items,
            max_items,
        }
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    #[inline]
    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    pub fn min_items(&self) -> usize {
        self.min_items
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// `item_count × item_width`; never stored.
    #[inline]
    pub fn content_width(&self) -> f32 {
        self.item_count as f32 * self.item_width
    }

    /// Width geometry should use: the render layer's laid-out width when it
    /// has one, otherwise the model estimate.
    pub fn effective_content_width<C: TrackCollaborator + ?Sized>(&self, row: &C) -> f32 {
        let reported = row.content_size().width;
        if reported.is_finite() && reported > 0.0 {
            reported
        } else {
            self.content_width()
        }
    }

    /// Index of the item under a content-space x position.
    pub fn item_at_position(&self, x: f32) -> Option<usize> {
        if !x.is_finite() || x < 0.0 || x >= self.content_width() {
            return None;
        }
        Some(((x / self.item_width) as usize).min(self.item_count - 1))
    }

    /// Bring a freshly created render layer to the model's item count.
    pub fn populate<C: TrackCollaborator + ?Sized>(&self, row: &mut C) {
        let shown = row.number_of_items();
        let batch = if shown < self.item_count {
            Batch::new().insert(shown..self.item_count)
        } else {
            Batch::new().delete(self.item_count..shown)
        };
        if !batch.is_empty() {
            debug!(shown, expected = self.item_count, "Populating item row");
            row.perform_batch_updates(&batch);
        }
    }

    /// Append one item. No-op at `max_items`.
    pub fn insert_one<C: TrackCollaborator + ?Sized>(&mut self, row: &mut C) -> bool {
        if self.item_count >= self.max_items {
            trace!(count = self.item_count, "Insert ignored at max items");
            return false;
        }
        let index = self.item_count;
        self.item_count += 1;
        row.perform_batch_updates(&Batch::new().insert([index]));
        // Keep the zoom anchored around the middle of the viewport.
        let offset = row.content_offset() + self.item_width / 2.0;
        row.set_content_offset(offset, ScrollAnimation::Animated);
        debug!(count = self.item_count, "Item inserted");
        true
    }

    /// Drop the last item. No-op at `min_items`.
    pub fn delete_one<C: TrackCollaborator + ?Sized>(&mut self, row: &mut C) -> bool {
        if self.item_count <= self.min_items {
            trace!(count = self.item_count, "Delete ignored at min items");
            return false;
        }
        self.item_count -= 1;
        row.perform_batch_updates(&Batch::new().delete([self.item_count]));
        let offset = row.content_offset() - self.item_width / 2.0;
        row.set_content_offset(offset, ScrollAnimation::Animated);
        debug!(count = self.item_count, "Item deleted");
        true
    }

    /// Absorb a committed handle drag into the item count.
    ///
    /// `delta` is the handle's net pixel displacement. A negative delta (end
    /// handle pulled in) removes items from the tail, a positive one (start
    /// handle pushed in) from the head. The row never shrinks below
    /// `min_items + 1`. Returns true when items were removed.
    pub fn resize_by_pixel_delta<C: TrackCollaborator + ?Sized>(
        &mut self,
        delta: f32,
        row: &mut C,
    ) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let items = (delta / self.item_width).round();
        if items.abs() < 1.0 {
            trace!(delta, "Drag below one item, track unchanged");
            return false;
        }

        let floor = self.min_items + 1;
        let removable = self.item_count.saturating_sub(floor);
        let remove = (items.abs() as usize).min(removable);
        if remove == 0 {
            debug!(count = self.item_count, "Track already at trim floor");
            return false;
        }

        let count = self.item_count;
        let batch = if items < 0.0 {
            Batch::new().delete(count - remove..count)
        } else {
            Batch::new().delete(0..remove)
        };
        self.item_count = count - remove;
        row.perform_batch_updates(&batch);
        row.reload_all_items();
        debug!(
            delta,
            removed = remove,
            count = self.item_count,
            "Track resized after trim"
        );
        true
    }

    /// Center the content when it is narrower than the viewport.
    pub fn recenter_offset<C: TrackCollaborator + ?Sized>(
        &self,
        row: &mut C,
        animation: ScrollAnimation,
    ) -> bool {
        let viewport = row.viewport_width();
        let content = self.effective_content_width(&*row);
        if content >= viewport {
            return false;
        }
        let target = -(viewport - content) / 2.0;
        row.set_content_offset(target, animation);
        trace!(target, "Recentering content");
        true
    }
}

impl Default for VirtualizedTrack {
    fn default() -> Self {
        Self::new(&TrackConfig::default())
    }
}
