//! Gesture precedence.
//!
//! Trim handles claim a pointer first. Only input no handle claims reaches
//! the track (scroll, pinch, tap), and only input outside the track reaches
//! the pager.

use glam::Vec2;
use trimline_core::{Rect, TrimEdge};

use crate::geometry::TrimGeometry;

/// Who receives a gesture that starts at some point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureTarget {
    Handle(TrimEdge),
    Track,
    Pager,
}

/// Hit-testing in precedence order.
#[derive(Debug, Clone, Copy)]
pub struct GestureRouter {
    /// Extra margin around each handle.
    pub hit_slop: f32,
}

impl GestureRouter {
    pub fn new(hit_slop: f32) -> Self {
        Self { hit_slop }
    }

    /// Route a point given in content coordinates. `track_band` is the
    /// visible part of the item row, also in content coordinates.
    pub fn route(&self, point: Vec2, geometry: &TrimGeometry, track_band: Rect) -> GestureTarget {
        if let Some(edge) = self.hit_handle(point, geometry) {
            return GestureTarget::Handle(edge);
        }
        if track_band.contains(point) {
            GestureTarget::Track
        } else {
            GestureTarget::Pager
        }
    }

    /// Handle under `point`. When the slop areas overlap (handles at
    /// minimum distance), the nearer handle wins.
    pub fn hit_handle(&self, point: Vec2, geometry: &TrimGeometry) -> Option<TrimEdge> {
        if !geometry.is_laid_out() {
            return None;
        }
        let start = geometry.start_handle.expand(self.hit_slop);
        let end = geometry.end_handle.expand(self.hit_slop);
        match (start.contains(point), end.contains(point)) {
            (true, true) => {
                let to_start = (geometry.start_handle.center().x - point.x).abs();
                let to_end = (geometry.end_handle.center().x - point.x).abs();
                Some(if to_end < to_start {
                    TrimEdge::End
                } else {
                    TrimEdge::Start
                })
            }
            (true, false) => Some(TrimEdge::Start),
            (false, true) => Some(TrimEdge::End),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Highlight;
    use trimline_core::{HandleConfig, TrimRange};

    fn geometry(range: &TrimRange) -> TrimGeometry {
        TrimGeometry::compute(range, 200.0, 80.0, &HandleConfig::default(), Highlight::Idle)
    }

    fn band() -> Rect {
        Rect::new(-50.0, 0.0, 300.0, 80.0)
    }

    #[test]
    fn test_handles_take_precedence_over_track() {
        let router = GestureRouter::new(8.0);
        let g = geometry(&TrimRange::default());
        assert_eq!(
            router.route(Vec2::new(5.0, 40.0), &g, band()),
            GestureTarget::Handle(TrimEdge::Start)
        );
        assert_eq!(
            router.route(Vec2::new(205.0, 40.0), &g, band()),
            GestureTarget::Handle(TrimEdge::End)
        );
        assert_eq!(router.route(Vec2::new(100.0, 40.0), &g, band()), GestureTarget::Track);
    }

    #[test]
    fn test_outside_track_goes_to_pager() {
        let router = GestureRouter::new(8.0);
        let g = geometry(&TrimRange::default());
        assert_eq!(router.route(Vec2::new(100.0, 200.0), &g, band()), GestureTarget::Pager);
    }

    #[test]
    fn test_overlapping_slop_prefers_nearer_handle() {
        let router = GestureRouter::new(20.0);
        let mut range = TrimRange::default();
        range.set_start(0.3);
        range.set_end(0.5);
        let g = geometry(&range);
        // start handle spans 60..75, end handle 85..100
        assert_eq!(router.hit_handle(Vec2::new(78.0, 40.0), &g), Some(TrimEdge::Start));
        assert_eq!(router.hit_handle(Vec2::new(83.0, 40.0), &g), Some(TrimEdge::End));
    }

    #[test]
    fn test_no_handles_before_layout() {
        let router = GestureRouter::new(8.0);
        let g = TrimGeometry::default();
        assert_eq!(router.hit_handle(Vec2::ZERO, &g), None);
    }
}
