//! Core lyric data model.
//!
//! These are the immutable records produced by one parse call. Times are
//! integer milliseconds; text is kept exactly as it appears in the source
//! unless a field says otherwise.

use serde::{Deserialize, Serialize};

/// A single timed syllable or word.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// Start time in milliseconds.
    pub begin: u64,
    /// End time in milliseconds.
    pub end: u64,
    /// Literal token content, never trimmed.
    pub text: String,
    /// Set when the word sits under a background-vocal marker.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_background: bool,
}

impl Word {
    /// Duration of the word in milliseconds.
    pub const fn duration(&self) -> u64 {
        self.end.saturating_sub(self.begin)
    }
}

/// Alternate-script rendering of a line, joined by the line key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transliteration {
    /// Full text of the transliteration entry.
    pub text: String,
    /// Timed words of the transliteration entry.
    pub words: Vec<Word>,
}

/// One lyric line (a paragraph of the source document).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Start time in milliseconds, as declared by the document.
    pub begin: u64,
    /// End time in milliseconds, as declared by the document.
    pub end: u64,
    /// Flattened text of the whole line, background runs included.
    pub text: String,
    /// Trimmed text of the lead (non-background) runs.
    pub lead_text: String,
    /// Trimmed text of the background-vocal runs.
    pub bg_text: String,
    /// Timed words in document order.
    pub words: Vec<Word>,
    /// Speaker identifier, if the line names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    /// Line identifier used to join transliterations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Transliteration joined by `key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<Transliteration>,
}

impl Line {
    /// Whether `time` (milliseconds) falls inside `[begin, end]`.
    pub fn contains(&self, time: f64) -> bool {
        #[allow(clippy::cast_precision_loss)]
        let (begin, end) = (self.begin as f64, self.end as f64);
        time >= begin && time <= end
    }

    /// Whether any word of the line is a background vocal.
    pub fn has_background(&self) -> bool {
        self.words.iter().any(|w| w.is_background)
    }
}

/// Structured "parsed view" of a document.
///
/// `score` comes from outside the parser and is passed through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedLyrics {
    /// Parsed lines in document order.
    pub lines: Vec<Line>,
    /// Externally supplied score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl ParsedLyrics {
    /// Wrap parsed lines with an optional external score.
    pub const fn new(lines: Vec<Line>, score: Option<f64>) -> Self {
        Self { lines, score }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_line_serializes_camel_case() {
        let line = Line {
            begin: 0,
            end: 1000,
            text: "hi (oh)".to_string(),
            lead_text: "hi".to_string(),
            bg_text: "(oh)".to_string(),
            words: vec![Word {
                begin: 0,
                end: 500,
                text: "hi".to_string(),
                is_background: false,
            }],
            agent: Some("v1".to_string()),
            key: None,
            transliteration: None,
        };

        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["leadText"], "hi");
        assert_eq!(json["bgText"], "(oh)");
        assert_eq!(json["agent"], "v1");
        assert!(json.get("key").is_none());
        // Primary words omit the flag entirely
        assert!(json["words"][0].get("isBackground").is_none());
    }

    #[test]
    fn test_background_flag_round_trips() {
        let json = r#"{"begin":1,"end":2,"text":"ah","isBackground":true}"#;
        let word: Word = serde_json::from_str(json).unwrap();
        assert!(word.is_background);
        assert_eq!(word.duration(), 1);
    }

    #[test]
    fn test_line_contains_is_inclusive() {
        let line = Line { begin: 2000, end: 5000, ..Line::default() };
        assert!(line.contains(2000.0));
        assert!(line.contains(5000.0));
        assert!(!line.contains(5000.5));
        assert!(!line.contains(1999.0));
    }

    #[test]
    fn test_parsed_view_omits_missing_score() {
        let view = ParsedLyrics::new(Vec::new(), None);
        assert_eq!(serde_json::to_string(&view).unwrap(), r#"{"lines":[]}"#);

        let view = ParsedLyrics::new(Vec::new(), Some(87.5));
        assert_eq!(serde_json::to_string(&view).unwrap(), r#"{"lines":[],"score":87.5}"#);
    }
}
