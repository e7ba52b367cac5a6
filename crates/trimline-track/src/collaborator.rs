//! Contract between the track model and the virtualization/render layer.
//!
//! The render layer owns the item views and the authoritative content size.
//! The model only ever talks to it through [`TrackCollaborator`], and every
//! structural change for one commit travels as a single [`Batch`].

use smallvec::SmallVec;
use trimline_core::Size;

/// Item indices touched by one structural edit.
pub type IndexList = SmallVec<[usize; 4]>;

/// One structural change to the item row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralEdit {
    /// Indices are positions in the row *after* the insert.
    Insert(IndexList),
    /// Indices are positions in the row *before* the delete.
    Delete(IndexList),
}

/// Edits applied atomically: the render layer shows either none or all of
/// them, followed by at most one reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    edits: Vec<StructuralEdit>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        let indices: IndexList = indices.into_iter().collect();
        if !indices.is_empty() {
            self.edits.push(StructuralEdit::Insert(indices));
        }
        self
    }

    pub fn delete(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        let indices: IndexList = indices.into_iter().collect();
        if !indices.is_empty() {
            self.edits.push(StructuralEdit::Delete(indices));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn edits(&self) -> &[StructuralEdit] {
        &self.edits
    }
}

/// How an offset change should reach the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAnimation {
    Immediate,
    /// Fire-and-forget; readers see the in-flight value until it settles.
    Animated,
}

/// Capabilities the core needs from the virtualization/render layer.
pub trait TrackCollaborator {
    /// Item count the render layer currently displays.
    fn number_of_items(&self) -> usize;

    /// Apply all edits of `batch` as one visual transaction.
    fn perform_batch_updates(&mut self, batch: &Batch);

    /// Re-configure every visible item.
    fn reload_all_items(&mut self);

    /// Laid-out content size. Authoritative over the model estimate when
    /// non-zero.
    fn content_size(&self) -> Size;

    /// Current horizontal scroll offset (possibly mid-animation).
    fn content_offset(&self) -> f32;

    fn set_content_offset(&mut self, offset: f32, animation: ScrollAnimation);

    /// Width of the visible window.
    fn viewport_width(&self) -> f32;
}
