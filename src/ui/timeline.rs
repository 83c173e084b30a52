use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::constants::ui::GRIDLINE_SPACING_CELLS;
use crate::timeline::TimelineEngine;
use crate::ui::{create_titled_block, time_label};

type Cell = (char, Style);

/// Draw the zoomable track and remember where it is for mouse mapping.
pub fn draw_timeline(f: &mut Frame, app: &mut App, area: Rect) {
    let block = create_titled_block("Timeline", app.timeline.is_dragging());
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Mouse events are mapped against the area actually drawn
    app.track_area = inner;
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let rows: Vec<Line> = track_rows(&app.timeline, usize::from(inner.width))
        .into_iter()
        .take(usize::from(inner.height))
        .map(row_to_line)
        .collect();
    f.render_widget(Paragraph::new(rows), inner);
}

/// Cell grid of the track: gridline labels, ticks, lead bars, background
/// vocals and the selected line's words, with the scrub marker on top.
fn track_rows(timeline: &TimelineEngine, width: usize) -> Vec<Vec<Cell>> {
    let blank = vec![(' ', Style::default()); width];
    let mut labels = blank.clone();
    let mut ticks = blank.clone();
    let mut lead = blank.clone();
    let mut background = blank.clone();
    let mut words = blank;

    let grid_style = Style::default().fg(Color::DarkGray);
    for marker in timeline.gridlines_within(width / GRIDLINE_SPACING_CELLS) {
        if !(0.0..100.0).contains(&marker.position) {
            continue;
        }
        let col = column(marker.position, width);
        ticks[col] = ('┊', grid_style);
        write_text(&mut labels, col, &time_label_ms(marker.time), grid_style);
    }

    let selected = timeline.selected_line();
    for bar in timeline.line_bars() {
        let style = if Some(bar.index) == selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if bar.index % 2 == 0 {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::Cyan)
        };
        fill(&mut lead, span(bar.left, bar.right, width), '█', style);
    }

    let bg_style = Style::default().fg(Color::Magenta);
    for word in timeline.lines().iter().flat_map(|l| &l.words).filter(|w| w.is_background) {
        if let Some(cols) = word_span(timeline, word.begin, word.end, width) {
            fill(&mut background, cols, '▄', bg_style);
        }
    }

    if let Some(line) = timeline.selected() {
        for (i, word) in line.words.iter().enumerate().filter(|(_, w)| !w.is_background) {
            let Some((start, end)) = word_span(timeline, word.begin, word.end, width) else {
                continue;
            };
            let style = if i % 2 == 0 {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default().fg(Color::Black).bg(Color::LightGreen)
            };
            fill(&mut words, (start, end), ' ', style);
            let text = word.text.trim();
            // Wide glyphs would shift the grid, skip them
            if text.width() == text.chars().count() && text.width() <= end - start {
                write_text(&mut words, start, text, style);
            }
        }
    }

    let mut rows = vec![labels, ticks, lead, background, words];

    if let Some(scrub) = timeline.scrub_position() {
        let position = timeline.time_to_position(scrub);
        if (0.0..=100.0).contains(&position) {
            let col = column(position, width);
            for row in &mut rows {
                let cell = &mut row[col];
                if cell.0 == ' ' || cell.0 == '┊' {
                    cell.0 = '│';
                }
                cell.1 = cell.1.fg(Color::Red);
            }
        }
    }

    rows
}

#[allow(clippy::cast_precision_loss)]
fn time_label_ms(ms: u64) -> String {
    time_label(ms as f64)
}

/// Column of a percentage position, clamped to the grid.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn column(position: f64, width: usize) -> usize {
    let col = (position / 100.0 * width as f64).floor().max(0.0) as usize;
    col.min(width.saturating_sub(1))
}

/// Half-open column range covering `[left, right]` percent, at least one cell wide.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn span(left: f64, right: f64, width: usize) -> (usize, usize) {
    let start = column(left, width);
    let end = (right / 100.0 * width as f64).ceil().max(0.0) as usize;
    (start, end.clamp(start + 1, width.max(start + 1)))
}

#[allow(clippy::cast_precision_loss)]
fn word_span(timeline: &TimelineEngine, begin: u64, end: u64, width: usize) -> Option<(usize, usize)> {
    let left = timeline.time_to_position(begin as f64);
    let right = timeline.time_to_position(end as f64);
    (right >= 0.0 && left <= 100.0).then(|| span(left.max(0.0), right.min(100.0), width))
}

fn fill(row: &mut [Cell], (start, end): (usize, usize), ch: char, style: Style) {
    let end = end.min(row.len());
    for cell in row.iter_mut().take(end).skip(start) {
        *cell = (ch, style);
    }
}

fn write_text(row: &mut [Cell], start: usize, text: &str, style: Style) {
    for (cell, ch) in row.iter_mut().skip(start).zip(text.chars()) {
        *cell = (ch, style);
    }
}

fn row_to_line(row: Vec<Cell>) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();
    let mut current_style = Style::default();

    for (ch, style) in row {
        if style != current_style && !current.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut current), current_style));
        }
        current_style = style;
        current.push(ch);
    }
    if !current.is_empty() {
        spans.push(Span::styled(current, current_style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Line as LyricLine, Word};

    fn engine() -> TimelineEngine {
        TimelineEngine::new(vec![
            LyricLine {
                begin: 0,
                end: 2000,
                words: vec![
                    Word { begin: 0, end: 1000, text: "one".into(), is_background: false },
                    Word { begin: 1000, end: 2000, text: "(ah)".into(), is_background: true },
                ],
                ..LyricLine::default()
            },
            LyricLine { begin: 2000, end: 5000, ..LyricLine::default() },
        ])
    }

    fn chars(row: &[Cell]) -> String {
        row.iter().map(|(c, _)| *c).collect()
    }

    #[test]
    fn test_bars_cover_line_extents() {
        let rows = track_rows(&engine(), 100);
        let lead = chars(&rows[2]);
        assert_eq!(lead.chars().filter(|&c| c == '█').count(), 100);
        assert_eq!(rows[2][39].1.fg, Some(Color::Blue));
        assert_eq!(rows[2][40].1.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_background_row_marks_background_words() {
        let rows = track_rows(&engine(), 100);
        let bg = chars(&rows[3]);
        assert_eq!(bg.chars().filter(|&c| c == '▄').count(), 20);
        assert_eq!(bg.find('▄'), Some(20));
    }

    #[test]
    fn test_selected_words_and_scrub_marker() {
        let mut timeline = engine();
        timeline.select_line(0);
        let rows = track_rows(&timeline, 100);

        assert!(chars(&rows[4]).starts_with("one"));
        // Scrub sits at the selected line's start
        assert_eq!(rows[0][0].1.fg, Some(Color::Red));
        assert_eq!(rows[2][0].1.fg, Some(Color::Red));
    }

    #[test]
    fn test_long_document_gridlines_fit_the_track() {
        let timeline = TimelineEngine::new(vec![LyricLine { begin: 0, end: 360_000_000, ..LyricLine::default() }]);
        let rows = track_rows(&timeline, 80);
        let ticks = chars(&rows[1]).chars().filter(|&c| c == '┊').count();
        assert!(ticks > 1 && ticks <= 80 / GRIDLINE_SPACING_CELLS);
    }

    #[test]
    fn test_span_is_at_least_one_cell() {
        assert_eq!(span(50.0, 50.0, 10), (5, 6));
        assert_eq!(span(95.0, 100.0, 10), (9, 10));
        assert_eq!(column(100.0, 10), 9);
    }

    #[test]
    fn test_row_to_line_groups_styles() {
        let red = Style::default().fg(Color::Red);
        let row = vec![('a', red), ('b', red), ('c', Style::default())];
        let line = row_to_line(row);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "ab");
    }
}
