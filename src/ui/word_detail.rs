use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::lyrics::format_timestamp;
use crate::types::{Line as LyricLine, Word};
use crate::ui::create_titled_block;

/// Draw the selected line's metadata and word timings.
pub fn draw_word_detail(f: &mut Frame, app: &App, area: Rect) {
    let block = create_titled_block("Words", false);

    let content = app.timeline.selected().map_or_else(
        || {
            vec![Line::from(Span::styled(
                "Click the timeline or press Up/Down to select a line",
                Style::default().fg(Color::DarkGray),
            ))]
        },
        detail_lines,
    );

    f.render_widget(
        Paragraph::new(content).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn detail_lines(line: &LyricLine) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);
    let mut out = vec![Line::from(vec![
        Span::styled("Time ", label),
        Span::raw(format!(
            "{} - {}",
            format_timestamp(line.begin),
            format_timestamp(line.end)
        )),
    ])];

    let mut meta = Vec::new();
    if let Some(agent) = &line.agent {
        meta.push(Span::styled("Agent ", label));
        meta.push(Span::raw(format!("{agent}  ")));
    }
    if let Some(key) = &line.key {
        meta.push(Span::styled("Key ", label));
        meta.push(Span::raw(key.clone()));
    }
    if !meta.is_empty() {
        out.push(Line::from(meta));
    }

    out.push(Line::from(vec![
        Span::styled("Lead ", label),
        Span::styled(line.lead_text.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ]));
    if line.has_background() {
        out.push(Line::from(vec![
            Span::styled("Bg   ", label),
            Span::styled(line.bg_text.clone(), Style::default().fg(Color::Magenta)),
        ]));
    }

    out.push(Line::default());
    out.extend(line.words.iter().map(word_line));

    if let Some(translit) = &line.transliteration {
        out.push(Line::default());
        out.push(Line::from(vec![
            Span::styled("Transliteration ", label),
            Span::styled(translit.text.clone(), Style::default().fg(Color::Cyan)),
        ]));
        out.extend(translit.words.iter().map(word_line));
    }

    out
}

fn word_line(word: &Word) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(
                "{:>9} - {:>9}  ",
                format_timestamp(word.begin),
                format_timestamp(word.end)
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(word.text.clone()),
    ];
    if word.is_background {
        spans.push(Span::styled(" (bg)", Style::default().fg(Color::Magenta)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Transliteration;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_detail_lists_words_and_transliteration() {
        let line = LyricLine {
            begin: 1000,
            end: 3000,
            lead_text: "hi".into(),
            bg_text: "(oh)".into(),
            agent: Some("v1".into()),
            words: vec![
                Word { begin: 1000, end: 2000, text: "hi".into(), is_background: false },
                Word { begin: 2000, end: 3000, text: "(oh)".into(), is_background: true },
            ],
            transliteration: Some(Transliteration { text: "hai".into(), words: Vec::new() }),
            ..LyricLine::default()
        };

        let rendered: Vec<String> = detail_lines(&line).iter().map(text).collect();
        assert_eq!(rendered[0], "Time 0:01 - 0:03");
        assert!(rendered.iter().any(|l| l.starts_with("Agent v1")));
        assert!(rendered.iter().any(|l| l.ends_with("(oh) (bg)")));
        assert!(rendered.iter().any(|l| l == "Transliteration hai"));
    }

    #[test]
    fn test_plain_line_omits_optional_rows() {
        let line = LyricLine { begin: 0, end: 500, lead_text: "x".into(), ..LyricLine::default() };
        let rendered: Vec<String> = detail_lines(&line).iter().map(text).collect();
        assert!(!rendered.iter().any(|l| l.starts_with("Agent") || l.starts_with("Bg")));
    }
}
