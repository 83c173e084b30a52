//! Timeline gestures driven through the public engine API.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use lyricline::lyrics::parse;
use lyricline::timeline::{TimelineEngine, WheelDirection};
use lyricline::types::Line;

fn two_lines() -> TimelineEngine {
    TimelineEngine::new(vec![
        Line { begin: 0, end: 2000, ..Line::default() },
        Line { begin: 2000, end: 5000, ..Line::default() },
    ])
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn click_selects_the_line_under_the_pointer() {
    let mut engine = two_lines();
    engine.click(0.5);
    assert_eq!(engine.selected_line(), Some(1));
    assert!(close(engine.scrub_position().unwrap(), 2500.0));
}

#[test]
fn parsed_document_drives_the_engine() {
    let doc = r#"<tt><body><div>
        <p begin="0" end="2"><span begin="0" end="2">one</span></p>
        <p begin="2" end="5"><span begin="2" end="5">two</span></p>
    </div></body></tt>"#;
    let mut engine = TimelineEngine::new(parse(doc));
    assert!(close(engine.total_duration(), 5000.0));
    engine.click(0.1);
    assert_eq!(engine.selected().map(|l| l.lead_text.as_str()), Some("one"));
}

#[test]
fn wheel_keeps_the_time_under_the_pointer() {
    let mut engine = TimelineEngine::new(vec![Line { begin: 0, end: 100_000, ..Line::default() }]);
    let fraction = 0.3;
    let before = engine.position_to_time(fraction);

    engine.wheel(fraction, WheelDirection::In);
    engine.wheel(fraction, WheelDirection::In);

    assert!(engine.zoom() > 1.0);
    assert!(close(engine.position_to_time(fraction), before));
}

#[test]
fn wheel_out_keeps_the_time_under_the_pointer() {
    let mut engine = TimelineEngine::new(vec![Line { begin: 0, end: 100_000, ..Line::default() }]);
    for _ in 0..5 {
        engine.wheel(0.5, WheelDirection::In);
    }
    let zoom = engine.zoom();
    let fraction = 0.7;
    let before = engine.position_to_time(fraction);

    engine.wheel(fraction, WheelDirection::Out);

    assert!(engine.zoom() < zoom);
    assert!(close(engine.position_to_time(fraction), before));
}

#[test]
fn click_during_a_drag_is_ignored() {
    let mut engine = two_lines();
    engine.zoom_in();

    engine.drag_start(50.0);
    engine.drag_move(20.0, 100.0);
    engine.click(0.5);

    assert_eq!(engine.selected_line(), None);
}

#[test]
fn click_during_a_small_drag_selects() {
    let mut engine = two_lines();
    engine.zoom_in();

    engine.drag_start(50.0);
    engine.drag_move(51.0, 100.0);
    engine.click(0.5);

    assert_eq!(engine.selected_line(), Some(1));
}

#[test]
fn click_after_a_drag_is_ignored() {
    let mut engine = two_lines();
    engine.zoom_in();
    let pan = engine.pan_offset();

    engine.drag_start(50.0);
    engine.drag_move(20.0, 100.0);
    engine.drag_end();
    assert!(engine.pan_offset() > pan);

    engine.click(0.5);
    assert_eq!(engine.selected_line(), None);

    // The suppression is spent by that click
    engine.click(0.0);
    assert!(engine.selected_line().is_some());
}

#[test]
fn small_movement_still_clicks() {
    let mut engine = two_lines();
    engine.zoom_in();

    engine.drag_start(50.0);
    engine.drag_move(51.0, 100.0);
    engine.drag_end();

    engine.click(0.5);
    assert!(engine.selected_line().is_some());
}

#[test]
fn zoom_and_pan_stay_in_range() {
    let mut engine = two_lines();
    for _ in 0..50 {
        engine.zoom_in();
    }
    assert!(close(engine.zoom(), 20.0));

    engine.drag_start(0.0);
    engine.drag_move(-10_000.0, 100.0);
    engine.drag_end();
    assert!(close(engine.pan_offset(), engine.max_pan_offset()));

    for _ in 0..50 {
        engine.zoom_out();
    }
    assert!(close(engine.zoom(), 1.0));
    assert!(close(engine.pan_offset(), 0.0));
}

#[test]
fn reset_zoom_shows_the_whole_document() {
    let mut engine = two_lines();
    engine.wheel(0.9, WheelDirection::In);
    engine.reset_zoom();
    assert!(close(engine.zoom(), 1.0));
    assert!(close(engine.pan_offset(), 0.0));
    assert!(close(engine.visible_duration(), 5000.0));
}

#[test]
fn positions_at_the_window_edges() {
    let engine = two_lines();
    assert!(close(engine.time_to_position(0.0), 0.0));
    assert!(close(engine.time_to_position(5000.0), 100.0));
    assert!(close(engine.time_to_position(TimelineEngine::default().total_duration()), 0.0));
    assert!(close(TimelineEngine::default().time_to_position(1000.0), 0.0));
}

#[test]
fn select_line_moves_the_scrub_without_panning() {
    let mut engine = TimelineEngine::new(vec![
        Line { begin: 0, end: 10_000, ..Line::default() },
        Line { begin: 90_000, end: 100_000, ..Line::default() },
    ]);
    engine.zoom_in();
    let pan = engine.pan_offset();
    engine.select_line(1);

    assert_eq!(engine.selected_line(), Some(1));
    assert!(close(engine.scrub_position().unwrap(), 90_000.0));
    assert!(close(engine.pan_offset(), pan));
}
