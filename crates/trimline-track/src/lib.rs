//! Trimline Track - virtualized item row model
//!
//! Implements the scrollable side of the trim timeline:
//! - The item-count model that zoom and trim commits resize
//! - Debounced pinch-to-zoom
//! - The contract toward the virtualization/render layer, plus a headless
//!   implementation of it
//! - Per-item appearance and selection

pub mod anim;
pub mod appearance;
pub mod collaborator;
pub mod row;
pub mod selection;
pub mod track;
pub mod zoom;

pub use anim::AnimFloat;
pub use appearance::{configure_item, ItemAppearance, ItemColor, ITEM_PALETTE};
pub use collaborator::{Batch, IndexList, ScrollAnimation, StructuralEdit, TrackCollaborator};
pub use row::{RowTransaction, VirtualRow};
pub use selection::ItemSelection;
pub use track::VirtualizedTrack;
pub use zoom::{PinchPhase, ZoomCommand, ZoomController};
