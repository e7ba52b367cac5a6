//! The trim selection: a normalized `[start, end]` sub-range of a clip.

use crate::mapper::{MAX_VALUE, MIN_VALUE};

/// Default minimum distance between the two handles, in domain units.
pub const DEFAULT_MINIMUM_TRIM_LENGTH: f32 = 0.2;

/// Which bound of the range (and which handle) an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrimEdge {
    Start,
    End,
}

impl TrimEdge {
    /// The value this edge returns to after a committed drag.
    pub fn rest_value(self) -> f32 {
        match self {
            TrimEdge::Start => MIN_VALUE,
            TrimEdge::End => MAX_VALUE,
        }
    }
}

/// Selected sub-range of a clip.
///
/// Invariant: `0 <= start`, `end <= 1` and
/// `end - start >= minimum_trim_length` after every operation. Mutators clamp
/// instead of rejecting; non-finite inputs leave the range unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimRange {
    start: f32,
    end: f32,
    minimum_trim_length: f32,
}

impl TrimRange {
    /// Full range `(0, 1)` with the given minimum gap, clamped to `[0, 1]`.
    pub fn new(minimum_trim_length: f32) -> Self {
        let minimum_trim_length = if minimum_trim_length.is_finite() {
            minimum_trim_length.clamp(0.0, MAX_VALUE - MIN_VALUE)
        } else {
            DEFAULT_MINIMUM_TRIM_LENGTH
        };
        Self {
            start: MIN_VALUE,
            end: MAX_VALUE,
            minimum_trim_length,
        }
    }

    #[inline]
    pub fn start(&self) -> f32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f32 {
        self.end
    }

    #[inline]
    pub fn minimum_trim_length(&self) -> f32 {
        self.minimum_trim_length
    }

    /// Current selection length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.end - self.start
    }

    pub fn value(&self, edge: TrimEdge) -> f32 {
        match edge {
            TrimEdge::Start => self.start,
            TrimEdge::End => self.end,
        }
    }

    /// `start = clamp(value, 0, end - minimum_trim_length)`.
    pub fn set_start(&mut self, value: f32) {
        if !value.is_finite() {
            return;
        }
        let upper = self.end - self.minimum_trim_length;
        self.start = value.min(upper).max(MIN_VALUE);
    }

    /// `end = clamp(value, start + minimum_trim_length, 1)`.
    pub fn set_end(&mut self, value: f32) {
        if !value.is_finite() {
            return;
        }
        let lower = self.start + self.minimum_trim_length;
        self.end = value.max(lower).min(MAX_VALUE);
    }

    /// Route a value to the bound named by `edge`.
    pub fn set(&mut self, edge: TrimEdge, value: f32) {
        match edge {
            TrimEdge::Start => self.set_start(value),
            TrimEdge::End => self.set_end(value),
        }
    }

    /// Return one bound to its rest value (start → 0, end → 1).
    pub fn reset_edge(&mut self, edge: TrimEdge) {
        self.set(edge, edge.rest_value());
    }

    /// Back to the full range.
    pub fn reset(&mut self) {
        self.start = MIN_VALUE;
        self.end = MAX_VALUE;
    }
}

impl Default for TrimRange {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_TRIM_LENGTH)
    }
}
