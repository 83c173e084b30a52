//! Time-axis gridlines for the visible window.

use crate::constants::gridlines::{
    COARSE_INTERVAL_MS, FINE_INTERVAL_MS, MEDIUM_INTERVAL_MS, SHORT_DOCUMENT_MS,
};
use crate::timeline::geometry::Viewport;

/// One gridline marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gridline {
    /// Absolute time of the marker in milliseconds.
    pub time: u64,
    /// Position within the window in percent.
    pub position: f64,
}

/// Spacing between markers for a zoom level and document length.
#[allow(clippy::cast_precision_loss)]
pub fn marker_interval(zoom: f64, total_duration: f64) -> u64 {
    if zoom >= 4.0 {
        FINE_INTERVAL_MS
    } else if zoom >= 2.0 || total_duration <= SHORT_DOCUMENT_MS as f64 {
        MEDIUM_INTERVAL_MS
    } else {
        COARSE_INTERVAL_MS
    }
}

/// Every interval multiple from the window's left edge to one interval past
/// its right edge.
///
/// The extra marker covers a gridline that is only partially on screen.
pub fn gridlines(viewport: &Viewport) -> Vec<Gridline> {
    markers(viewport, marker_interval(viewport.zoom, viewport.total_duration))
}

/// Like [`gridlines`], thinned to at most `max_markers` (never below 3).
///
/// Keeps every n-th interval multiple, so long documents zoomed out don't
/// produce thousands of markers for a narrow track.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn gridlines_within(viewport: &Viewport, max_markers: usize) -> Vec<Gridline> {
    let interval = marker_interval(viewport.zoom, viewport.total_duration);
    // Leading and trailing partial markers come on top of the full steps
    let room = max_markers.max(3) - 2;
    let stride = (viewport.visible_duration() / (interval as f64 * room as f64))
        .ceil()
        .max(1.0) as u64;
    markers(viewport, interval * stride)
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn markers(viewport: &Viewport, interval: u64) -> Vec<Gridline> {
    let visible = viewport.visible_duration();
    if visible <= 0.0 || interval == 0 {
        return Vec::new();
    }

    let step = interval as f64;
    let upper = viewport.end() + step;

    let mut markers = Vec::new();
    let mut time = (viewport.pan_offset / step).ceil().max(0.0) as u64 * interval;
    while (time as f64) < upper {
        markers.push(Gridline {
            time,
            position: viewport.time_to_position(time as f64),
        });
        time += interval;
    }
    markers
}
