//! Timeline view state and its transitions.
//!
//! Every interaction is a [`TimelineEvent`]; [`TimelineState::apply`] is a
//! pure function from the current state and an event to the next state.
//! Out-of-range input is clamped and degenerate documents leave the state
//! unchanged, so no transition can fail.

use crate::constants::timeline::{BUTTON_ZOOM_FACTOR, MIN_ZOOM, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};
use crate::timeline::geometry::{clamp_pan, clamp_zoom, Viewport};
use crate::types::Line;

/// Direction of a wheel zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Towards deeper zoom.
    In,
    /// Towards the whole document.
    Out,
}

impl WheelDirection {
    /// Direction for a wheel delta, positive deltas (scrolling down) zoom out.
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Out
        } else {
            Self::In
        }
    }

    /// Multiplicative zoom step.
    pub const fn factor(self) -> f64 {
        match self {
            Self::In => WHEEL_ZOOM_IN,
            Self::Out => WHEEL_ZOOM_OUT,
        }
    }
}

/// A user interaction with the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineEvent {
    /// Click at `fraction` (0.0..=1.0) of the track width.
    Click {
        /// Pointer position as a fraction of the track width.
        fraction: f64,
    },
    /// Wheel zoom anchored at `fraction` of the track width.
    Wheel {
        /// Pointer position as a fraction of the track width.
        fraction: f64,
        /// Zoom direction.
        direction: WheelDirection,
    },
    /// Pointer pressed at `x` (track-local units).
    DragStart {
        /// Pointer position in track-local units.
        x: f64,
    },
    /// Pointer moved to `x` on a track `track_width` units wide.
    DragMove {
        /// Pointer position in track-local units.
        x: f64,
        /// Track width in the same units as `x`.
        track_width: f64,
    },
    /// Pointer released.
    DragEnd,
    /// Zoom button, keeps the window centre.
    ZoomIn,
    /// Zoom button, keeps the window centre.
    ZoomOut,
    /// Back to the whole document.
    ResetZoom,
    /// Select a line from outside the timeline (e.g. a line list).
    SelectLine(usize),
}

/// Read-only inputs a transition needs besides the state itself.
#[derive(Debug, Clone, Copy)]
pub struct TimelineContext<'a> {
    /// Lines of the current document.
    pub lines: &'a [Line],
    /// Latest line end, in milliseconds.
    pub total_duration: f64,
    /// Pointer travel beyond which a press counts as a drag.
    pub drag_threshold: f64,
}

/// Zoom, pan, selection and gesture state of one timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineState {
    /// Zoom level in `[1, 20]`.
    pub zoom: f64,
    /// Time at the left edge of the window, in milliseconds.
    pub pan_offset: f64,
    /// Index of the selected line.
    pub selected_line: Option<usize>,
    /// Scrub position in milliseconds.
    pub scrub_position: Option<f64>,
    /// Whether a pan gesture is in progress.
    pub is_dragging: bool,
    /// Pointer position where the current gesture started.
    pub drag_start_x: f64,
    /// Pan offset when the current gesture started.
    pub drag_start_offset: f64,
    /// Set once the pointer travelled past the drag threshold; swallows
    /// the click that follows the release.
    pub did_drag: bool,
}

impl Default for TimelineState {
    fn default() -> Self {
        Self {
            zoom: MIN_ZOOM,
            pan_offset: 0.0,
            selected_line: None,
            scrub_position: None,
            is_dragging: false,
            drag_start_x: 0.0,
            drag_start_offset: 0.0,
            did_drag: false,
        }
    }
}

impl TimelineState {
    /// Visible window for a document of `total_duration` milliseconds.
    pub const fn viewport(&self, total_duration: f64) -> Viewport {
        Viewport {
            total_duration,
            zoom: self.zoom,
            pan_offset: self.pan_offset,
        }
    }

    /// Next state after `event`.
    #[must_use]
    pub fn apply(self, event: &TimelineEvent, ctx: &TimelineContext<'_>) -> Self {
        match *event {
            TimelineEvent::Click { fraction } => self.click(fraction, ctx),
            TimelineEvent::Wheel { fraction, direction } => {
                self.wheel(fraction, direction, ctx.total_duration)
            }
            TimelineEvent::DragStart { x } => self.drag_start(x, ctx.total_duration),
            TimelineEvent::DragMove { x, track_width } => {
                self.drag_move(x, track_width, ctx)
            }
            TimelineEvent::DragEnd => Self { is_dragging: false, ..self },
            TimelineEvent::ZoomIn => self.zoom_about_centre(BUTTON_ZOOM_FACTOR, ctx.total_duration),
            TimelineEvent::ZoomOut => {
                self.zoom_about_centre(BUTTON_ZOOM_FACTOR.recip(), ctx.total_duration)
            }
            TimelineEvent::ResetZoom => Self {
                zoom: MIN_ZOOM,
                pan_offset: 0.0,
                ..self
            },
            TimelineEvent::SelectLine(index) => match ctx.lines.get(index) {
                #[allow(clippy::cast_precision_loss)]
                Some(line) => Self {
                    selected_line: Some(index),
                    scrub_position: Some(line.begin as f64),
                    ..self
                },
                None => self,
            },
        }
    }

    fn click(self, fraction: f64, ctx: &TimelineContext<'_>) -> Self {
        // The click that ends a real drag is swallowed exactly once
        if self.did_drag {
            return Self { did_drag: false, ..self };
        }
        let total = ctx.total_duration;
        if total <= 0.0 {
            return self;
        }

        let time = self.viewport(total).position_to_time(fraction).clamp(0.0, total);
        Self {
            scrub_position: Some(time),
            selected_line: line_at(ctx.lines, time).or(self.selected_line),
            ..self
        }
    }

    fn wheel(self, fraction: f64, direction: WheelDirection, total: f64) -> Self {
        if total <= 0.0 {
            return self;
        }

        let anchor = self.viewport(total).position_to_time(fraction);
        let zoom = clamp_zoom(self.zoom * direction.factor());
        let visible = total / zoom;
        Self {
            zoom,
            pan_offset: clamp_pan(anchor - fraction * visible, total, visible),
            ..self
        }
    }

    fn zoom_about_centre(self, factor: f64, total: f64) -> Self {
        if total <= 0.0 {
            return self;
        }

        let viewport = self.viewport(total);
        let centre = viewport.pan_offset + viewport.visible_duration() / 2.0;
        let zoom = clamp_zoom(self.zoom * factor);
        let visible = total / zoom;
        Self {
            zoom,
            pan_offset: clamp_pan(centre - visible / 2.0, total, visible),
            ..self
        }
    }

    fn drag_start(self, x: f64, total: f64) -> Self {
        // A new gesture never inherits suppression from an unfinished one
        let idle = Self { did_drag: false, ..self };
        if self.zoom <= MIN_ZOOM || total <= 0.0 {
            return idle;
        }
        Self {
            is_dragging: true,
            drag_start_x: x,
            drag_start_offset: self.pan_offset,
            ..idle
        }
    }

    fn drag_move(self, x: f64, track_width: f64, ctx: &TimelineContext<'_>) -> Self {
        if !self.is_dragging || track_width <= 0.0 {
            return self;
        }

        let total = ctx.total_duration;
        let viewport = self.viewport(total);
        let visible = viewport.visible_duration();
        let dx = x - self.drag_start_x;
        // Dragging right moves the window earlier
        let delta = dx / track_width * visible;
        Self {
            pan_offset: clamp_pan(self.drag_start_offset - delta, total, visible),
            did_drag: self.did_drag || dx.abs() > ctx.drag_threshold,
            ..self
        }
    }
}

/// First line, in document order, whose `[begin, end]` contains `time`.
pub fn line_at(lines: &[Line], time: f64) -> Option<usize> {
    lines.iter().position(|line| line.contains(time))
}
