//! Integration tests for handle dragging.
//!
//! Exercises the path from drag callbacks through trimline-ui into the
//! range model in trimline-core and the track model in trimline-track.

use proptest::prelude::*;
use trimline_core::{Size, TrackConfig, TrimEdge, TrimlineConfig};
use trimline_track::{RowTransaction, StructuralEdit, TrackCollaborator, VirtualRow};
use trimline_ui::{DragPhase, Highlight, TimelineWidget};

// ── Helpers ────────────────────────────────────────────────────

fn widget(items: usize, viewport: f32) -> TimelineWidget<VirtualRow> {
    let config = TrimlineConfig {
        track: TrackConfig {
            initial_items: items,
            ..TrackConfig::default()
        },
        ..TrimlineConfig::default()
    };
    let row = VirtualRow::new(Size::new(40.0, 80.0), viewport, 18.0).with_transaction_log();
    TimelineWidget::new(config, row).unwrap()
}

fn drag(w: &mut TimelineWidget<VirtualRow>, edge: TrimEdge, translation: f32) {
    w.handle_drag(edge, DragPhase::Began, 0.0);
    w.handle_drag(edge, DragPhase::Changed, translation);
    w.handle_drag(edge, DragPhase::Ended, translation);
}

fn assert_range_ok(w: &TimelineWidget<VirtualRow>) {
    let r = w.range();
    assert!(r.start() >= 0.0, "start {} below 0", r.start());
    assert!(r.end() <= 1.0, "end {} above 1", r.end());
    assert!(
        r.end() - r.start() >= r.minimum_trim_length() - 1e-5,
        "gap {} below minimum",
        r.end() - r.start()
    );
}

// ── Trim commits ───────────────────────────────────────────────

#[test]
fn end_handle_commit_shrinks_track_from_tail() {
    let mut w = widget(5, 300.0);
    w.row_mut().clear_transactions();

    drag(&mut w, TrimEdge::End, -85.0);

    assert_eq!(w.track().item_count(), 3);
    let batches: Vec<_> = w
        .row()
        .transactions()
        .iter()
        .filter_map(|t| match t {
            RowTransaction::Batch(b) => Some(b.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(batches.len(), 1);
    assert_eq!(
        batches[0].edits(),
        &[StructuralEdit::Delete([3, 4].into_iter().collect())]
    );
    assert_eq!(w.row().reload_count(), 1);
}

#[test]
fn start_handle_commit_shrinks_track_from_head() {
    let mut w = widget(10, 300.0);
    drag(&mut w, TrimEdge::Start, 120.0);
    assert_eq!(w.track().item_count(), 7);
    assert_eq!(w.range().start(), 0.0);
    assert_eq!(w.geometry().content_width, 280.0);
}

#[test]
fn commit_resets_only_dragged_bound() {
    let mut w = widget(10, 300.0);
    w.handle_drag(TrimEdge::Start, DragPhase::Began, 0.0);
    w.handle_drag(TrimEdge::Start, DragPhase::Changed, 100.0);
    // End drag runs to completion while start is still held.
    drag(&mut w, TrimEdge::End, -10.0);
    assert!((w.range().start() - 0.25).abs() < 1e-5);
    assert_eq!(w.range().end(), 1.0);
    assert_eq!(w.geometry().highlight, Highlight::Active);

    w.handle_drag(TrimEdge::Start, DragPhase::Ended, 100.0);
    assert_eq!(w.range().start(), 0.0);
    assert_eq!(w.geometry().highlight, Highlight::Idle);
}

#[test]
fn handles_stop_at_minimum_gap() {
    let mut w = widget(5, 300.0);
    w.handle_drag(TrimEdge::Start, DragPhase::Began, 0.0);
    w.handle_drag(TrimEdge::Start, DragPhase::Changed, 1000.0);
    assert!((w.range().start() - 0.8).abs() < 1e-5);

    w.handle_drag(TrimEdge::End, DragPhase::Began, 0.0);
    w.handle_drag(TrimEdge::End, DragPhase::Changed, -1000.0);
    assert!((w.range().end() - 1.0).abs() < 1e-5);
    assert_range_ok(&w);

    let g = w.geometry();
    assert!(g.start_handle.x <= g.end_handle.right());
}

#[test]
fn repeated_trims_never_go_below_floor() {
    let mut w = widget(12, 300.0);
    for _ in 0..6 {
        drag(&mut w, TrimEdge::End, -200.0);
    }
    assert_eq!(w.track().item_count(), 3);
    assert_eq!(w.row().number_of_items(), 3);
}

#[test]
fn trimmed_content_is_recentered() {
    let mut w = widget(10, 300.0);
    assert_eq!(w.row().content_offset(), 0.0);
    drag(&mut w, TrimEdge::End, -160.0);
    assert_eq!(w.track().item_count(), 6);
    assert_eq!(w.row().target_offset(), -30.0);
    // Animation settles on the target.
    while w.row_mut().tick(0.016) {}
    assert_eq!(w.row().content_offset(), -30.0);
}

// ── Interleaved sessions ───────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Phase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

fn phase_strategy() -> impl Strategy<Value = Phase> {
    prop_oneof![
        Just(Phase::Began),
        Just(Phase::Changed),
        Just(Phase::Changed),
        Just(Phase::Ended),
        Just(Phase::Cancelled),
    ]
}

proptest! {
    #[test]
    fn interleaved_drags_keep_range_valid(
        events in prop::collection::vec(
            (any::<bool>(), phase_strategy(), -400.0f32..400.0),
            1..80,
        )
    ) {
        let mut w = widget(12, 300.0);
        for (is_start, phase, translation) in events {
            let edge = if is_start { TrimEdge::Start } else { TrimEdge::End };
            let phase = match phase {
                Phase::Began => DragPhase::Began,
                Phase::Changed => DragPhase::Changed,
                Phase::Ended => DragPhase::Ended,
                Phase::Cancelled => DragPhase::Cancelled,
            };
            w.handle_drag(edge, phase, translation);

            let r = w.range();
            prop_assert!(r.start() >= 0.0);
            prop_assert!(r.end() <= 1.0);
            prop_assert!(r.end() - r.start() >= r.minimum_trim_length() - 1e-5);
            prop_assert!(w.track().item_count() >= 3);
            prop_assert_eq!(w.track().item_count(), w.row().number_of_items());
            prop_assert_eq!(w.geometry().content_width, w.track().content_width());
        }
    }
}
