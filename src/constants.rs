//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Timeline zoom, pan and gesture constants.
pub mod timeline {
    /// Fully zoomed out: the whole document is visible.
    pub const MIN_ZOOM: f64 = 1.0;

    /// Deepest zoom level.
    pub const MAX_ZOOM: f64 = 20.0;

    /// Wheel step towards deeper zoom.
    pub const WHEEL_ZOOM_IN: f64 = 1.25;

    /// Wheel step towards the whole document.
    pub const WHEEL_ZOOM_OUT: f64 = 0.8;

    /// Factor applied by the zoom buttons.
    pub const BUTTON_ZOOM_FACTOR: f64 = 1.5;

    /// Pointer travel beyond which a press becomes a drag, in pixels.
    pub const DRAG_THRESHOLD_PX: f64 = 3.0;
}

/// Gridline interval constants, all in milliseconds.
pub mod gridlines {
    /// Interval from zoom 4 upwards.
    pub const FINE_INTERVAL_MS: u64 = 10_000;

    /// Interval from zoom 2 upwards, and for short documents.
    pub const MEDIUM_INTERVAL_MS: u64 = 30_000;

    /// Interval for long documents when fully zoomed out.
    pub const COARSE_INTERVAL_MS: u64 = 60_000;

    /// Documents up to this length keep the medium interval at any zoom.
    pub const SHORT_DOCUMENT_MS: u64 = 180_000;
}

/// UI layout constants.
pub mod ui {
    /// Pointer travel beyond which a press becomes a drag, in terminal cells.
    pub const DRAG_THRESHOLD_CELLS: f64 = 1.0;

    /// Height of the timeline track block, borders included.
    pub const TRACK_HEIGHT: u16 = 7;

    /// Default spacing percentage for split panes.
    pub const DEFAULT_SPLIT_PERCENT: u16 = 50;

    /// Minimum spacing between gridline labels, in terminal cells.
    pub const GRIDLINE_SPACING_CELLS: usize = 8;

    /// Event poll interval in milliseconds.
    pub const POLL_INTERVAL_MS: u64 = 50;
}
