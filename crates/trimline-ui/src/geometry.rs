//! Pixel frames for the handles and selection decorations.

use trimline_core::{HandleConfig, Rect, TrimEdge, TrimRange, ValueMapper};

/// Visual state of handles and boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Idle,
    /// At least one handle is being dragged.
    Active,
}

/// Everything a renderer needs to draw the trim overlay, in content
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrimGeometry {
    /// Width the frames were computed from.
    pub content_width: f32,
    pub start_handle: Rect,
    pub end_handle: Rect,
    pub top_boundary: Rect,
    pub bottom_boundary: Rect,
    /// Outline around the whole item row.
    pub content_border: Rect,
    pub highlight: Highlight,
}

impl TrimGeometry {
    /// Lay out the overlay for `range` over content `content_width` wide.
    ///
    /// The start handle sits right of its value, the end handle left of
    /// its value, so both stay inside the selection.
    pub fn compute(
        range: &TrimRange,
        content_width: f32,
        content_height: f32,
        handles: &HandleConfig,
        highlight: Highlight,
    ) -> Self {
        let mapper = ValueMapper::new(content_width);
        let start = mapper.position(range.start());
        let end = mapper.position(range.end());
        let selection = end - start;
        let t = handles.boundary_thickness;

        Self {
            content_width,
            start_handle: Rect::new(start, 0.0, handles.width, handles.height),
            end_handle: Rect::new(end - handles.width, 0.0, handles.width, handles.height),
            top_boundary: Rect::new(start, -t / 2.0, selection, t),
            bottom_boundary: Rect::new(start, handles.height - t / 2.0, selection, t),
            content_border: Rect::new(0.0, 0.0, mapper.position(1.0), content_height),
            highlight,
        }
    }

    pub fn handle(&self, edge: TrimEdge) -> Rect {
        match edge {
            TrimEdge::Start => self.start_handle,
            TrimEdge::End => self.end_handle,
        }
    }

    /// False until a layout pass has reported a usable width.
    pub fn is_laid_out(&self) -> bool {
        ValueMapper::new(self.content_width).is_defined()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_range_frames() {
        let g = TrimGeometry::compute(
            &TrimRange::default(),
            200.0,
            80.0,
            &HandleConfig::default(),
            Highlight::Idle,
        );
        assert_eq!(g.start_handle, Rect::new(0.0, 0.0, 15.0, 80.0));
        assert_eq!(g.end_handle, Rect::new(185.0, 0.0, 15.0, 80.0));
        assert_eq!(g.top_boundary, Rect::new(0.0, -2.0, 200.0, 4.0));
        assert_eq!(g.bottom_boundary, Rect::new(0.0, 78.0, 200.0, 4.0));
        assert_eq!(g.content_border, Rect::new(0.0, 0.0, 200.0, 80.0));
        assert!(g.is_laid_out());
    }

    #[test]
    fn test_frames_follow_range() {
        let mut range = TrimRange::default();
        range.set_start(0.25);
        range.set_end(0.75);
        let g = TrimGeometry::compute(&range, 400.0, 80.0, &HandleConfig::default(), Highlight::Active);
        assert_eq!(g.handle(TrimEdge::Start).x, 100.0);
        assert_eq!(g.handle(TrimEdge::End).right(), 300.0);
        assert_eq!(g.top_boundary.width, 200.0);
        assert_eq!(g.highlight, Highlight::Active);
    }

    #[test]
    fn test_zero_width_collapses() {
        let g = TrimGeometry::compute(
            &TrimRange::default(),
            0.0,
            80.0,
            &HandleConfig::default(),
            Highlight::Idle,
        );
        assert!(!g.is_laid_out());
        assert_eq!(g.start_handle.x, 0.0);
        assert_eq!(g.top_boundary.width, 0.0);
    }
}
