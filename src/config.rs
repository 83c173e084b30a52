//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::ui::DRAG_THRESHOLD_CELLS;
use crate::error::Result;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Lyrics document opened at startup
    pub lyrics_path: Option<PathBuf>,
    /// Pointer travel (in cells) beyond which a press becomes a drag
    pub drag_threshold: f64,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            lyrics_path: None,
            drag_threshold: DRAG_THRESHOLD_CELLS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(path) = env::var("LYRICS_PATH") {
            config.lyrics_path = Some(expand_path(&path));
        }

        // Drag threshold can be tuned for terminals with finer mouse reporting
        if let Ok(threshold) = env::var("TIMELINE_DRAG_THRESHOLD") {
            if let Some(threshold) = parse_threshold(&threshold) {
                config.drag_threshold = threshold;
            }
        }

        Ok(config)
    }

    /// Prefer a path given on the command line over the configured one.
    #[must_use]
    pub fn with_lyrics_path(mut self, path: Option<&str>) -> Self {
        if let Some(path) = path {
            self.lyrics_path = Some(expand_path(path));
        }
        self
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

fn parse_threshold(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite() && *t >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.lyrics_path.is_none());
        assert!((config.drag_threshold - DRAG_THRESHOLD_CELLS).abs() < f64::EPSILON);
        assert_eq!(config.app_name(), env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn test_command_line_path_overrides() {
        let config = Config::default().with_lyrics_path(Some("/tmp/song.ttml"));
        assert_eq!(config.lyrics_path, Some(PathBuf::from("/tmp/song.ttml")));

        let config = config.with_lyrics_path(None);
        assert_eq!(config.lyrics_path, Some(PathBuf::from("/tmp/song.ttml")));
    }

    #[test]
    fn test_parse_threshold_rejects_garbage() {
        assert_eq!(parse_threshold(" 2.5 "), Some(2.5));
        assert_eq!(parse_threshold("-1"), None);
        assert_eq!(parse_threshold("NaN"), None);
        assert_eq!(parse_threshold("wide"), None);
    }
}
