//! User interface components.
//!
//! Provides TUI widgets and drawing functions for the viewer's
//! terminal-based user interface using ratatui.

mod line_list;
mod timeline;
mod word_detail;

pub use line_list::draw_line_list;
pub use timeline::draw_timeline;
pub use word_detail::draw_word_detail;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::constants::ui::{DEFAULT_SPLIT_PERCENT, TRACK_HEIGHT};
use crate::lyrics::format_timestamp;

/// Render the full application UI to the terminal frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(TRACK_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(3), // Command/status bar at bottom
        ])
        .split(f.size());

    draw_header(f, app, chunks[0]);
    draw_timeline(f, app, chunks[1]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(DEFAULT_SPLIT_PERCENT),
            Constraint::Percentage(100 - DEFAULT_SPLIT_PERCENT),
        ])
        .split(chunks[2]);

    draw_line_list(f, app, panes[0]);
    draw_word_detail(f, app, panes[1]);
    draw_command_bar(f, app, chunks[3]);
}

/// Display a millisecond value the way every pane labels times.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn time_label(ms: f64) -> String {
    format_timestamp(ms.max(0.0).round() as u64)
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let title = app.source.as_ref().map_or_else(
        || app.config.app_name().to_string(),
        |p| p.file_name().map_or_else(|| p.display().to_string(), |n| n.to_string_lossy().into_owned()),
    );

    let block = create_titled_block(&title, true);

    let timeline = &app.timeline;
    let viewport = timeline.viewport();
    let scrub = timeline
        .scrub_position()
        .map_or_else(|| "-".to_string(), time_label);

    let summary = Line::from(vec![
        Span::styled(" Zoom ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.2}x", timeline.zoom()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Window ", Style::default().fg(Color::Gray)),
        Span::raw(format!(
            "{} - {}",
            time_label(viewport.pan_offset),
            time_label(viewport.end())
        )),
        Span::styled("  Length ", Style::default().fg(Color::Gray)),
        Span::raw(time_label(timeline.total_duration())),
        Span::styled("  Scrub ", Style::default().fg(Color::Gray)),
        Span::styled(scrub, Style::default().fg(Color::Red)),
    ]);

    f.render_widget(Paragraph::new(summary).block(block), area);
}

fn draw_command_bar(f: &mut Frame, app: &App, area: Rect) {
    let block = create_titled_block("Commands/Status", false);

    let mut text = create_help_text(&[
        ("click", "Scrub"),
        ("drag", "Pan"),
        ("wheel/+/-", "Zoom"),
        ("0", "Reset"),
        ("Up/Down", "Line"),
        ("r", "Reload"),
        ("q", "Quit"),
    ]);
    if let Some(status) = &app.status_message {
        text.push(Span::styled(format!(" | {status}"), Style::default().fg(Color::Gray)));
    }

    f.render_widget(
        Paragraph::new(Line::from(text))
            .style(Style::default().fg(Color::Gray))
            .block(block),
        area,
    );
}

/// Build styled help text spans from key-description pairs for the command bar.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")]; // Start with padding

    for (i, (key, description)) in commands.iter().enumerate() {
        text.push(Span::styled(*key, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)));
        text.push(Span::raw(format!(": {description}")));

        if i < commands.len() - 1 {
            text.push(Span::raw(" | "));
        }
    }

    text
}

/// Create a bordered block with a title, highlighted when focused.
pub fn create_titled_block(title: &str, is_focused: bool) -> Block<'_> {
    let title_style = if is_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}
