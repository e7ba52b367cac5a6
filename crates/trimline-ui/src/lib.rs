//! Trimline UI - interactive trim timeline
//!
//! Provides:
//! - Per-handle drag sessions and the overlay geometry they drive
//! - Gesture precedence between handles, track and pager
//! - `TimelineWidget`, the composition root over a render collaborator
//! - An egui view and theme for the demo application

pub mod drag;
pub mod geometry;
pub mod gesture;
pub mod theme;
pub mod view;
pub mod widget;

pub use drag::{DragCommit, DragPhase, DragSession, HandleDragController};
pub use geometry::{Highlight, TrimGeometry};
pub use gesture::{GestureRouter, GestureTarget};
pub use theme::Theme;
pub use view::TimelineView;
pub use widget::TimelineWidget;
