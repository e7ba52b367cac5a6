//! Mapping between the normalized trim domain and content pixels.
//!
//! The domain is `[MIN_VALUE, MAX_VALUE]`. Positions are measured from the
//! leading edge of the scrollable content, whose width changes under zoom,
//! so every call takes the width explicitly instead of caching it.
//!
//! Neither direction clamps: callers clamp through [`crate::TrimRange`].

/// Lower bound of the normalized domain.
pub const MIN_VALUE: f32 = 0.0;
/// Upper bound of the normalized domain.
pub const MAX_VALUE: f32 = 1.0;

/// Pixel position for a domain value.
///
/// Returns `0.0` while the content width is not usable (before layout).
#[inline]
pub fn position_for_value(value: f32, content_width: f32) -> f32 {
    if !is_usable_width(content_width) {
        return 0.0;
    }
    content_width * (value - MIN_VALUE) / (MAX_VALUE - MIN_VALUE)
}

/// Domain value for a pixel position.
///
/// Returns `0.0` while the content width is not usable (before layout).
#[inline]
pub fn value_for_position(position: f32, content_width: f32) -> f32 {
    if !is_usable_width(content_width) {
        return 0.0;
    }
    MIN_VALUE + (MAX_VALUE - MIN_VALUE) * position / content_width
}

#[inline]
fn is_usable_width(width: f32) -> bool {
    width.is_finite() && width > 0.0
}

/// A mapper bound to one content-width snapshot.
///
/// Build a fresh one after every layout pass; it never observes width
/// changes on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueMapper {
    content_width: f32,
}

impl ValueMapper {
    pub fn new(content_width: f32) -> Self {
        Self { content_width }
    }

    pub fn content_width(self) -> f32 {
        self.content_width
    }

    /// False until layout has produced a positive width.
    pub fn is_defined(self) -> bool {
        is_usable_width(self.content_width)
    }

    #[inline]
    pub fn position(self, value: f32) -> f32 {
        position_for_value(value, self.content_width)
    }

    #[inline]
    pub fn value(self, position: f32) -> f32 {
        value_for_position(position, self.content_width)
    }
}
