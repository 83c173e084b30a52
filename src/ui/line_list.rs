use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::app::App;
use crate::lyrics::format_timestamp;
use crate::ui::create_titled_block;

/// Draw the document's lines, highlighting the selected one.
pub fn draw_line_list(f: &mut Frame, app: &App, area: Rect) {
    let lines = app.timeline.lines();
    let block = create_titled_block("Lines", !lines.is_empty());

    let items: Vec<ListItem> = lines
        .iter()
        .map(|line| {
            let mut spans = vec![Span::styled(
                format!("{:>9} ", format_timestamp(line.begin)),
                Style::default().fg(Color::DarkGray),
            )];
            if let Some(agent) = &line.agent {
                spans.push(Span::styled(format!("[{agent}] "), Style::default().fg(Color::Cyan)));
            }
            spans.push(Span::raw(line.lead_text.clone()));
            if !line.bg_text.is_empty() {
                spans.push(Span::styled(
                    format!(" {}", line.bg_text),
                    Style::default().fg(Color::Magenta),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(app.timeline.selected_line());
    f.render_stateful_widget(list, area, &mut state);
}
