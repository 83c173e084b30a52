//! Input handling abstractions.
//!
//! This module provides traits and types for handling terminal input in a
//! modular way. Handlers translate key and mouse events into timeline events
//! without touching application state, so they can be tested on their own.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::timeline::{TimelineEvent, WheelDirection};

/// Result of processing an input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputResult {
    /// The input was consumed and handled.
    Consumed,
    /// The input was ignored (not applicable to this handler).
    Ignored,
    /// The application should quit.
    Quit,
    /// The lyrics file should be read again.
    Reload,
    /// Timeline events to apply, in order.
    Timeline(Vec<TimelineEvent>),
}

/// Context passed to input handlers.
///
/// This provides handlers with the information they need to process
/// input without directly accessing the full App state.
#[derive(Debug, Clone, Copy)]
pub struct InputContext {
    /// Currently selected line.
    pub selected_line: Option<usize>,
    /// Number of lines in the document.
    pub line_count: usize,
    /// Screen area of the timeline track.
    pub track: Rect,
}

/// Trait for handling terminal input.
///
/// Implementations of this trait handle input for specific
/// input contexts.
pub trait InputHandler {
    /// Handle a terminal event.
    ///
    /// # Arguments
    /// * `event` - The event to handle
    /// * `ctx` - Context about the current application state
    ///
    /// # Returns
    /// The result of handling the input.
    fn handle(&mut self, event: &Event, ctx: &InputContext) -> InputResult;

    /// Get the name of this handler (for debugging).
    fn name(&self) -> &'static str;
}

/// Handler for global shortcuts (quit, reload).
#[derive(Debug, Default)]
pub struct GlobalHandler;

impl InputHandler for GlobalHandler {
    fn handle(&mut self, event: &Event, _ctx: &InputContext) -> InputResult {
        let Some(key) = key_press(event) else {
            return InputResult::Ignored;
        };

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
            KeyCode::Char('r') => InputResult::Reload,
            _ => InputResult::Ignored,
        }
    }

    fn name(&self) -> &'static str {
        "GlobalHandler"
    }
}

/// Handler mapping zoom keys, line navigation and the mouse onto the timeline.
#[derive(Debug, Default)]
pub struct TimelineHandler {
    /// A left press started on the track and has not been released yet.
    pressed: bool,
}

impl TimelineHandler {
    fn handle_key(key: &KeyEvent, ctx: &InputContext) -> InputResult {
        let event = match key.code {
            KeyCode::Char('+' | '=') => TimelineEvent::ZoomIn,
            KeyCode::Char('-') => TimelineEvent::ZoomOut,
            KeyCode::Char('0') => TimelineEvent::ResetZoom,
            KeyCode::Up | KeyCode::Char('k') => {
                let Some(last) = ctx.line_count.checked_sub(1) else {
                    return InputResult::Consumed;
                };
                let index = ctx.selected_line.map_or(last, |i| i.saturating_sub(1));
                TimelineEvent::SelectLine(index)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let Some(last) = ctx.line_count.checked_sub(1) else {
                    return InputResult::Consumed;
                };
                let index = ctx.selected_line.map_or(0, |i| (i + 1).min(last));
                TimelineEvent::SelectLine(index)
            }
            KeyCode::Home => TimelineEvent::SelectLine(0),
            KeyCode::End => TimelineEvent::SelectLine(ctx.line_count.saturating_sub(1)),
            _ => return InputResult::Ignored,
        };
        InputResult::Timeline(vec![event])
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, ctx: &InputContext) -> InputResult {
        let track = ctx.track;
        if track.width == 0 {
            return InputResult::Ignored;
        }
        let on_track = contains(track, mouse.column, mouse.row);
        let x = track_x(track, mouse.column);
        let width = f64::from(track.width);

        let events = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if on_track => {
                self.pressed = true;
                vec![TimelineEvent::DragStart { x }]
            }
            MouseEventKind::Drag(MouseButton::Left) if self.pressed => {
                vec![TimelineEvent::DragMove { x, track_width: width }]
            }
            MouseEventKind::Up(MouseButton::Left) if self.pressed => {
                self.pressed = false;
                let mut events = vec![TimelineEvent::DragEnd];
                // Like a browser click, only a release over the track counts
                if on_track {
                    events.push(TimelineEvent::Click { fraction: x / width });
                }
                events
            }
            MouseEventKind::ScrollUp if on_track => vec![TimelineEvent::Wheel {
                fraction: x / width,
                direction: WheelDirection::In,
            }],
            MouseEventKind::ScrollDown if on_track => vec![TimelineEvent::Wheel {
                fraction: x / width,
                direction: WheelDirection::Out,
            }],
            _ => return InputResult::Ignored,
        };
        InputResult::Timeline(events)
    }
}

impl InputHandler for TimelineHandler {
    fn handle(&mut self, event: &Event, ctx: &InputContext) -> InputResult {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(mouse, ctx),
            _ => key_press(event).map_or(InputResult::Ignored, |key| Self::handle_key(key, ctx)),
        }
    }

    fn name(&self) -> &'static str {
        "TimelineHandler"
    }
}

/// Collapse runs of consecutive mouse drags to the last one.
///
/// Terminals report a drag per cell crossed; only the latest position of a
/// run matters for the next frame.
pub fn coalesce_drags(events: Vec<Event>) -> Vec<Event> {
    let mut out: Vec<Event> = Vec::with_capacity(events.len());
    for event in events {
        if is_drag(&event) && out.last().is_some_and(is_drag) {
            out.pop();
        }
        out.push(event);
    }
    out
}

fn is_drag(event: &Event) -> bool {
    matches!(
        event,
        Event::Mouse(MouseEvent { kind: MouseEventKind::Drag(_), .. })
    )
}

fn key_press(event: &Event) -> Option<&KeyEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(key),
        _ => None,
    }
}

const fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

/// Pointer position in cells from the track's left edge, at the cell centre.
fn track_x(track: Rect, column: u16) -> f64 {
    f64::from(column) - f64::from(track.x) + 0.5
}
