//! Timeline interaction engine.
//!
//! A view-model over one document's lines: owns zoom, pan, selection and
//! gesture state, and hands a renderer read-only geometry (bar extents,
//! gridlines, scrub position) as percentages of the visible window. It never
//! draws anything itself.

pub mod geometry;
pub mod gridlines;
pub mod state;

pub use geometry::{Bar, Viewport};
pub use gridlines::Gridline;
pub use state::{line_at, TimelineContext, TimelineEvent, TimelineState, WheelDirection};

use crate::constants::timeline::DRAG_THRESHOLD_PX;
use crate::types::Line;

/// Timeline state bound to one document.
///
/// Callers must serialize calls; a new document goes through
/// [`TimelineEngine::set_lines`], which resets all view state.
#[derive(Debug, Clone)]
pub struct TimelineEngine {
    lines: Vec<Line>,
    total_duration: f64,
    drag_threshold: f64,
    state: TimelineState,
}

impl Default for TimelineEngine {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TimelineEngine {
    /// Create an engine for `lines` with the default pixel drag threshold.
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            total_duration: total_duration(&lines),
            lines,
            drag_threshold: DRAG_THRESHOLD_PX,
            state: TimelineState::default(),
        }
    }

    /// Use a different drag threshold (in pointer units).
    #[must_use]
    pub fn with_drag_threshold(mut self, threshold: f64) -> Self {
        self.drag_threshold = threshold;
        self
    }

    /// Replace the document and start over from a fresh view.
    pub fn set_lines(&mut self, lines: Vec<Line>) {
        self.total_duration = total_duration(&lines);
        self.lines = lines;
        self.state = TimelineState::default();
    }

    /// Lines of the current document.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Current view state.
    pub const fn state(&self) -> &TimelineState {
        &self.state
    }

    /// Apply one event. Returns whether the state changed.
    pub fn dispatch(&mut self, event: TimelineEvent) -> bool {
        let ctx = TimelineContext {
            lines: &self.lines,
            total_duration: self.total_duration,
            drag_threshold: self.drag_threshold,
        };
        let next = self.state.apply(&event, &ctx);
        let changed = next != self.state;
        if changed {
            tracing::trace!(?event, zoom = next.zoom, pan = next.pan_offset, "timeline updated");
        }
        self.state = next;
        changed
    }

    /// Apply a sequence of events in order.
    pub fn replay(&mut self, events: impl IntoIterator<Item = TimelineEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }

    /// Click at `fraction` of the track width.
    pub fn click(&mut self, fraction: f64) -> bool {
        self.dispatch(TimelineEvent::Click { fraction })
    }

    /// Wheel zoom anchored at `fraction` of the track width.
    pub fn wheel(&mut self, fraction: f64, direction: WheelDirection) -> bool {
        self.dispatch(TimelineEvent::Wheel { fraction, direction })
    }

    /// Pointer pressed at `x`.
    pub fn drag_start(&mut self, x: f64) -> bool {
        self.dispatch(TimelineEvent::DragStart { x })
    }

    /// Pointer moved to `x` on a track `track_width` wide.
    pub fn drag_move(&mut self, x: f64, track_width: f64) -> bool {
        self.dispatch(TimelineEvent::DragMove { x, track_width })
    }

    /// Pointer released.
    pub fn drag_end(&mut self) -> bool {
        self.dispatch(TimelineEvent::DragEnd)
    }

    /// Zoom in about the window centre.
    pub fn zoom_in(&mut self) -> bool {
        self.dispatch(TimelineEvent::ZoomIn)
    }

    /// Zoom out about the window centre.
    pub fn zoom_out(&mut self) -> bool {
        self.dispatch(TimelineEvent::ZoomOut)
    }

    /// Show the whole document.
    pub fn reset_zoom(&mut self) -> bool {
        self.dispatch(TimelineEvent::ResetZoom)
    }

    /// Select a line and move the scrub position to its start.
    pub fn select_line(&mut self, index: usize) -> bool {
        self.dispatch(TimelineEvent::SelectLine(index))
    }

    /// Latest line end in milliseconds, 0 for an empty document.
    pub const fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Current visible window.
    pub const fn viewport(&self) -> Viewport {
        self.state.viewport(self.total_duration)
    }

    /// Length of the visible window in milliseconds.
    pub fn visible_duration(&self) -> f64 {
        self.viewport().visible_duration()
    }

    /// Largest valid pan offset at the current zoom.
    pub fn max_pan_offset(&self) -> f64 {
        self.viewport().max_pan_offset()
    }

    /// Percentage position of `time` in the visible window.
    pub fn time_to_position(&self, time: f64) -> f64 {
        self.viewport().time_to_position(time)
    }

    /// Time under a pointer at `fraction` of the track width.
    pub fn position_to_time(&self, fraction: f64) -> f64 {
        self.viewport().position_to_time(fraction)
    }

    /// Gridline markers for the visible window.
    pub fn gridlines(&self) -> Vec<Gridline> {
        gridlines::gridlines(&self.viewport())
    }

    /// Gridline markers thinned to at most `max_markers`.
    pub fn gridlines_within(&self, max_markers: usize) -> Vec<Gridline> {
        gridlines::gridlines_within(&self.viewport(), max_markers)
    }

    /// Bars for the lines overlapping the visible window.
    pub fn line_bars(&self) -> Vec<Bar> {
        geometry::line_bars(&self.lines, &self.viewport())
    }

    /// First line containing `time`.
    pub fn line_at(&self, time: f64) -> Option<usize> {
        line_at(&self.lines, time)
    }

    /// Current zoom level.
    pub const fn zoom(&self) -> f64 {
        self.state.zoom
    }

    /// Current pan offset in milliseconds.
    pub const fn pan_offset(&self) -> f64 {
        self.state.pan_offset
    }

    /// Index of the selected line.
    pub const fn selected_line(&self) -> Option<usize> {
        self.state.selected_line
    }

    /// The selected line itself.
    pub fn selected(&self) -> Option<&Line> {
        self.state.selected_line.and_then(|i| self.lines.get(i))
    }

    /// Scrub position in milliseconds.
    pub const fn scrub_position(&self) -> Option<f64> {
        self.state.scrub_position
    }

    /// Whether a pan gesture is in progress.
    pub const fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }
}

#[allow(clippy::cast_precision_loss)]
fn total_duration(lines: &[Line]) -> f64 {
    lines.iter().map(|l| l.end).max().unwrap_or(0) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TimelineEngine {
        TimelineEngine::new(vec![
            Line { begin: 0, end: 2000, ..Line::default() },
            Line { begin: 2000, end: 5000, ..Line::default() },
        ])
    }

    #[test]
    fn test_total_duration_is_latest_end() {
        assert!((engine().total_duration() - 5000.0).abs() < f64::EPSILON);
        assert!(TimelineEngine::default().total_duration().abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_lines_resets_state() {
        let mut engine = engine();
        engine.zoom_in();
        engine.select_line(1);
        assert!(engine.zoom() > 1.0);

        engine.set_lines(vec![Line { begin: 0, end: 9000, ..Line::default() }]);
        assert_eq!(*engine.state(), TimelineState::default());
        assert!((engine.total_duration() - 9000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_document_ignores_interaction() {
        let mut engine = TimelineEngine::default();
        assert!(!engine.click(0.5));
        assert!(!engine.wheel(0.5, WheelDirection::In));
        assert!(!engine.zoom_in());
        assert!(!engine.drag_start(4.0));
        assert!(!engine.drag_move(40.0, 100.0));
        assert!(!engine.drag_end());
        assert!(engine.gridlines().is_empty());
        assert_eq!(*engine.state(), TimelineState::default());
    }

    #[test]
    fn test_dispatch_reports_changes() {
        let mut engine = engine();
        assert!(engine.select_line(0));
        assert!(!engine.select_line(0));
        assert_eq!(engine.selected().map(|l| l.end), Some(2000));
    }

    #[test]
    fn test_replay_is_deterministic() {
        let events = [
            TimelineEvent::Wheel { fraction: 0.3, direction: WheelDirection::In },
            TimelineEvent::ZoomIn,
            TimelineEvent::DragStart { x: 10.0 },
            TimelineEvent::DragMove { x: 30.0, track_width: 200.0 },
            TimelineEvent::DragEnd,
            TimelineEvent::Click { fraction: 0.5 },
        ];
        let mut a = engine();
        let mut b = engine();
        a.replay(events);
        b.replay(events);
        assert_eq!(a.state(), b.state());
    }
}
