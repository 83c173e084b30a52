//! Viewer application state.
//!
//! Glues the lyrics file, the timeline engine and the input handlers
//! together. Drawing lives in [`crate::ui`].

use std::path::{Path, PathBuf};

use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::config::Config;
use crate::error::Result;
use crate::input::{GlobalHandler, InputContext, InputHandler, InputResult, TimelineHandler};
use crate::lyrics;
use crate::timeline::TimelineEngine;

/// The lyrics timeline viewer.
pub struct App {
    /// Loaded configuration.
    pub config: Config,
    /// Timeline over the loaded document.
    pub timeline: TimelineEngine,
    /// File the document was read from.
    pub source: Option<PathBuf>,
    /// Message shown in the status bar.
    pub status_message: Option<String>,
    /// Screen area of the timeline track, updated on every draw.
    pub track_area: Rect,
    global_handler: GlobalHandler,
    timeline_handler: TimelineHandler,
    should_quit: bool,
}

impl App {
    /// Create the app and open the configured lyrics file, if any.
    pub fn new(config: Config) -> Self {
        let source = config.lyrics_path.clone();
        let timeline = TimelineEngine::default().with_drag_threshold(config.drag_threshold);
        let mut app = Self {
            config,
            timeline,
            source: None,
            status_message: None,
            track_area: Rect::default(),
            global_handler: GlobalHandler,
            timeline_handler: TimelineHandler::default(),
            should_quit: false,
        };

        if let Some(path) = source {
            if let Err(e) = app.open(&path) {
                app.status_message = Some(format!("Failed to open {}: {e}", path.display()));
            }
        }
        app
    }

    /// Read and parse a lyrics file, replacing the current document.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        self.source = Some(path.to_path_buf());
        let lines = lyrics::load_file(path)?;
        self.status_message = lines
            .is_empty()
            .then(|| "No timed lines found in document".to_string());
        self.timeline.set_lines(lines);
        Ok(())
    }

    /// Read the current file again.
    pub fn reload(&mut self) {
        let Some(path) = self.source.clone() else {
            self.status_message = Some("No lyrics file to reload".to_string());
            return;
        };
        match self.open(&path) {
            Ok(()) => {
                if self.status_message.is_none() {
                    self.status_message = Some(format!(
                        "Reloaded {} lines",
                        self.timeline.lines().len()
                    ));
                }
            }
            Err(e) => self.status_message = Some(format!("Reload failed: {e}")),
        }
    }

    /// Whether the main loop should stop.
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stop the main loop.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Route one terminal event through the input handlers.
    pub fn handle_event(&mut self, event: &Event) {
        let ctx = InputContext {
            selected_line: self.timeline.selected_line(),
            line_count: self.timeline.lines().len(),
            track: self.track_area,
        };

        let mut result = self.global_handler.handle(event, &ctx);
        if result == InputResult::Ignored {
            result = self.timeline_handler.handle(event, &ctx);
        }

        match result {
            InputResult::Quit => self.quit(),
            InputResult::Reload => self.reload(),
            InputResult::Timeline(events) => {
                let before = self.timeline.selected_line();
                self.timeline.replay(events);
                if self.timeline.selected_line() != before {
                    self.status_message = None;
                }
            }
            InputResult::Consumed | InputResult::Ignored => {}
        }
    }
}
