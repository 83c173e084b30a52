//! Coordinate conversions between document time and the visible window.
//!
//! Positions are percentages of the visible window (0 = left edge,
//! 100 = right edge) so a renderer can use them directly as layout
//! coordinates. Pointer positions are fractions of the track (0.0..=1.0).

use crate::constants::timeline::{MAX_ZOOM, MIN_ZOOM};
use crate::types::Line;

/// The visible window over a document of `total_duration` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Length of the whole document in milliseconds.
    pub total_duration: f64,
    /// Zoom level, 1 shows the whole document.
    pub zoom: f64,
    /// Time at the left edge of the window in milliseconds.
    pub pan_offset: f64,
}

impl Viewport {
    /// Length of the visible window in milliseconds.
    pub fn visible_duration(&self) -> f64 {
        if self.zoom > 0.0 {
            self.total_duration / self.zoom
        } else {
            self.total_duration
        }
    }

    /// Largest pan offset that keeps the window inside the document.
    pub fn max_pan_offset(&self) -> f64 {
        max_pan_offset(self.total_duration, self.visible_duration())
    }

    /// Time at the right edge of the window.
    pub fn end(&self) -> f64 {
        self.pan_offset + self.visible_duration()
    }

    /// Percentage position of `time` within the window.
    ///
    /// Values outside 0..=100 are off screen. An empty document maps
    /// everything to 0.
    pub fn time_to_position(&self, time: f64) -> f64 {
        let visible = self.visible_duration();
        if visible <= 0.0 {
            return 0.0;
        }
        ((time - self.pan_offset) / visible) * 100.0
    }

    /// Absolute time under a pointer at `fraction` of the track width.
    pub fn position_to_time(&self, fraction: f64) -> f64 {
        self.pan_offset + fraction * self.visible_duration()
    }
}

/// Largest valid pan offset for a window of `visible` milliseconds.
pub fn max_pan_offset(total_duration: f64, visible: f64) -> f64 {
    (total_duration - visible).max(0.0)
}

/// Clamp a zoom level into the supported range.
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return MIN_ZOOM;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Clamp a pan offset so the window stays inside the document.
pub fn clamp_pan(pan_offset: f64, total_duration: f64, visible: f64) -> f64 {
    if pan_offset.is_nan() {
        return 0.0;
    }
    pan_offset.clamp(0.0, max_pan_offset(total_duration, visible))
}

/// Horizontal extent of one line inside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Index of the line.
    pub index: usize,
    /// Left edge in percent, clipped to the window.
    pub left: f64,
    /// Right edge in percent, clipped to the window.
    pub right: f64,
}

impl Bar {
    /// Width in percent.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Bars for every line that overlaps the window, in document order.
#[allow(clippy::cast_precision_loss)]
pub fn line_bars(lines: &[Line], viewport: &Viewport) -> Vec<Bar> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let left = viewport.time_to_position(line.begin as f64);
            let right = viewport.time_to_position(line.end as f64);
            (right >= 0.0 && left <= 100.0).then(|| Bar {
                index,
                left: left.max(0.0),
                right: right.min(100.0),
            })
        })
        .collect()
}
