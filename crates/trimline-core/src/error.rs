//! Error types for Trimline.
//!
//! Interactive paths (drags, pinches, layout) never fail: they clamp. These
//! errors only surface at configuration and construction boundaries.

use thiserror::Error;

/// Main error type for Trimline operations.
#[derive(Error, Debug)]
pub enum TrimlineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for Trimline operations.
pub type Result<T> = std::result::Result<T, TrimlineError>;
