//! Trimline Core - foundation types for the clip-trim timeline
//!
//! This crate provides the pieces every other Trimline crate builds on:
//! - Value ↔ pixel mapping over a zoom-dependent content width
//! - The clamped trim selection
//! - Geometric primitives for handle frames
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod geometry;
pub mod mapper;
pub mod range;

pub use config::{HandleConfig, ScrollConfig, TrackConfig, TrimConfig, TrimlineConfig, ZoomConfig};
pub use error::{Result, TrimlineError};
pub use geometry::{Rect, Size};
pub use mapper::{position_for_value, value_for_position, ValueMapper, MAX_VALUE, MIN_VALUE};
pub use range::{TrimEdge, TrimRange, DEFAULT_MINIMUM_TRIM_LENGTH};
