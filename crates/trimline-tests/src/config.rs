//! Integration tests for JSON configuration driving a widget.

use trimline_core::{Size, TrimlineConfig, TrimlineError};
use trimline_track::{TrackCollaborator, VirtualRow};
use trimline_ui::TimelineWidget;

#[test]
fn partial_json_configures_widget() {
    let config = TrimlineConfig::from_json(
        r#"{ "track": { "item_width": 60.0, "initial_items": 3 }, "trim": { "minimum_trim_length": 0.3 } }"#,
    )
    .unwrap();
    let row = VirtualRow::new(Size::new(60.0, 80.0), 500.0, 18.0);
    let w = TimelineWidget::new(config, row).unwrap();

    assert_eq!(w.row().number_of_items(), 3);
    assert_eq!(w.geometry().content_width, 180.0);
    assert_eq!(w.range().minimum_trim_length(), 0.3);
    // Untouched sections keep their defaults.
    assert_eq!(w.geometry().start_handle.width, 15.0);
    assert_eq!(w.track().max_items(), 40);
}

#[test]
fn invalid_bounds_are_rejected() {
    let json = r#"{ "track": { "min_items": 8, "initial_items": 5 } }"#;
    assert!(matches!(
        TrimlineConfig::from_json(json),
        Err(TrimlineError::InvalidConfig(_))
    ));

    let mut config = TrimlineConfig::default();
    config.track.min_items = 8;
    let row = VirtualRow::new(Size::new(40.0, 80.0), 300.0, 18.0);
    match TimelineWidget::new(config, row) {
        Err(TrimlineError::InvalidConfig(msg)) => assert!(msg.contains("initial_items")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("config should be rejected"),
    }
}
