//! Integration tests for pinch zoom against the track and the trim overlay.

use std::time::{Duration, Instant};

use trimline_core::{Size, TrackConfig, TrimEdge, TrimlineConfig};
use trimline_track::{PinchPhase, TrackCollaborator, VirtualRow, ZoomCommand};
use trimline_ui::{DragPhase, TimelineWidget};

fn widget(items: usize) -> TimelineWidget<VirtualRow> {
    let config = TrimlineConfig {
        track: TrackConfig {
            initial_items: items,
            ..TrackConfig::default()
        },
        ..TrimlineConfig::default()
    };
    TimelineWidget::new(config, VirtualRow::new(Size::new(40.0, 80.0), 300.0, 18.0)).unwrap()
}

fn at(base: Instant, millis: u64) -> Instant {
    base + Duration::from_millis(millis)
}

#[test]
fn zoom_in_inserts_once_per_crossing_outside_debounce() {
    let mut w = widget(5);
    let t0 = Instant::now();
    w.handle_pinch(PinchPhase::Began, 1.0, t0);

    // Three threshold crossings, 250ms apart.
    let mut scale = 1.0;
    for step in 0..3u64 {
        scale += 0.25;
        assert_eq!(
            w.handle_pinch(PinchPhase::Changed, scale, at(t0, step * 250)),
            Some(ZoomCommand::InsertItem)
        );
    }
    assert_eq!(w.track().item_count(), 8);
    assert_eq!(w.row().number_of_items(), 8);
    assert_eq!(w.geometry().content_width, 320.0);
}

#[test]
fn events_inside_debounce_window_commit_nothing() {
    let mut w = widget(5);
    let t0 = Instant::now();
    w.handle_pinch(PinchPhase::Began, 1.0, t0);
    w.handle_pinch(PinchPhase::Changed, 1.3, t0);
    for millis in [20, 60, 120, 180, 200] {
        let scale = 1.3 + millis as f32 / 100.0;
        assert_eq!(w.handle_pinch(PinchPhase::Changed, scale, at(t0, millis)), None);
    }
    assert_eq!(w.track().item_count(), 6);
}

#[test]
fn zoom_out_stops_at_minimum() {
    let mut w = widget(4);
    let t0 = Instant::now();
    w.handle_pinch(PinchPhase::Began, 1.0, t0);
    let mut scale = 1.0;
    for step in 0..5u64 {
        scale -= 0.25;
        w.handle_pinch(PinchPhase::Changed, scale, at(t0, step * 300));
    }
    assert_eq!(w.track().item_count(), 2);
    w.handle_pinch(PinchPhase::Ended, scale, at(t0, 2000));
    assert!(!w.zoom().is_pinching());
}

#[test]
fn zoom_in_stops_at_maximum() {
    let mut w = widget(39);
    let t0 = Instant::now();
    w.handle_pinch(PinchPhase::Began, 1.0, t0);
    w.handle_pinch(PinchPhase::Changed, 1.3, t0);
    w.handle_pinch(PinchPhase::Changed, 1.6, at(t0, 300));
    assert_eq!(w.track().item_count(), 40);
}

#[test]
fn pinch_end_reloads_all_items() {
    let mut w = widget(5);
    w.row_mut().clear_transactions();
    let t0 = Instant::now();
    w.handle_pinch(PinchPhase::Began, 1.0, t0);
    w.handle_pinch(PinchPhase::Changed, 1.05, t0);
    assert_eq!(
        w.handle_pinch(PinchPhase::Cancelled, 1.05, t0),
        Some(ZoomCommand::ReloadAll)
    );
    assert_eq!(w.row().reload_count(), 1);
    assert_eq!(w.track().item_count(), 5);
}

#[test]
fn handles_follow_zoomed_width() {
    let mut w = widget(5);
    w.handle_drag(TrimEdge::Start, DragPhase::Began, 0.0);
    w.handle_drag(TrimEdge::Start, DragPhase::Changed, 50.0);
    assert_eq!(w.geometry().start_handle.x, 50.0);

    // Zoom in mid-drag: the handle keeps its value, the frame rescales.
    let t0 = Instant::now();
    w.handle_pinch(PinchPhase::Began, 1.0, t0);
    w.handle_pinch(PinchPhase::Changed, 1.3, t0);
    assert_eq!(w.geometry().content_width, 240.0);
    assert!((w.range().start() - 0.25).abs() < 1e-6);
    assert_eq!(w.geometry().start_handle.x, 60.0);
    assert_eq!(w.geometry().end_handle.right(), 240.0);
}

#[test]
fn centered_item_follows_scroll() {
    let mut w = widget(20);
    assert_eq!(w.centered_item(), Some(3));
    w.row_mut()
        .set_content_offset(200.0, trimline_track::ScrollAnimation::Immediate);
    assert_eq!(w.centered_item(), Some(8));
}
