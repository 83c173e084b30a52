//! Timed-text document to [`Line`] model.
//!
//! Two passes over one node tree: transliteration entries are collected into
//! a join table first, then every paragraph is assembled into a line. Source
//! order between the two never matters.

use std::collections::HashMap;

use roxmltree::{Document, Node};

use crate::lyrics::markup::{ancestors_until, attr, is_named, parse_tree, text_content, MarkupError};
use crate::lyrics::time::parse_time;
use crate::types::{Line, Transliteration, Word};

/// Role value marking background vocals.
pub const BACKGROUND_ROLE: &str = "x-bg";

/// Element name of a lyric line.
const PARAGRAPH: &str = "p";

/// Element name grouping transliteration entries.
const TRANSLITERATION: &str = "transliteration";

/// Parse a document, degrading to an empty sequence on malformed input.
pub fn parse(markup: &str) -> Vec<Line> {
    match try_parse(markup) {
        Ok(lines) => lines,
        Err(e) => {
            tracing::warn!("Discarding unparseable lyrics markup: {e}");
            Vec::new()
        }
    }
}

/// Parse a document, reporting why the markup could not be read.
pub fn try_parse(markup: &str) -> Result<Vec<Line>, MarkupError> {
    let doc = parse_tree(markup)?;
    Ok(parse_document(&doc))
}

/// Assemble lines from an already built node tree.
pub fn parse_document(doc: &Document<'_>) -> Vec<Line> {
    let transliterations = collect_transliterations(doc);

    let lines: Vec<Line> = doc
        .descendants()
        .filter(|n| is_named(*n, PARAGRAPH))
        .map(|p| assemble_line(p, &transliterations))
        .collect();

    tracing::debug!(
        "Parsed {} lines ({} transliteration entries)",
        lines.len(),
        transliterations.len()
    );
    lines
}

/// Build the `for` key to transliteration table.
///
/// An entry is any element with a `for` attribute that is, or sits under, a
/// `transliteration` element. A repeated key keeps the last entry.
fn collect_transliterations(doc: &Document<'_>) -> HashMap<String, Transliteration> {
    let mut table = HashMap::new();

    for node in doc.descendants().filter(Node::is_element) {
        let Some(key) = attr(node, "for") else {
            continue;
        };
        if !node.ancestors().any(|a| is_named(a, TRANSLITERATION)) {
            continue;
        }

        table.insert(
            key.to_string(),
            Transliteration {
                text: text_content(node),
                words: timed_words(node),
            },
        );
    }

    table
}

fn assemble_line(
    paragraph: Node<'_, '_>,
    transliterations: &HashMap<String, Transliteration>,
) -> Line {
    let mut text = String::new();
    let mut lead_text = String::new();
    let mut bg_text = String::new();

    for node in paragraph.descendants().filter(Node::is_text) {
        let Some(run) = node.text() else {
            continue;
        };
        text.push_str(run);
        if is_background(node, paragraph) {
            bg_text.push_str(run);
        } else {
            lead_text.push_str(run);
        }
    }

    let key = attr(paragraph, "key").map(str::to_string);
    let transliteration = key
        .as_deref()
        .and_then(|k| transliterations.get(k))
        .cloned();

    Line {
        begin: time_attr(paragraph, "begin"),
        end: time_attr(paragraph, "end"),
        text,
        lead_text: lead_text.trim().to_string(),
        bg_text: bg_text.trim().to_string(),
        words: timed_words(paragraph),
        agent: attr(paragraph, "agent").map(str::to_string),
        key,
        transliteration,
    }
}

/// Every element below `root` with a `begin` or `end`, as words.
fn timed_words(root: Node<'_, '_>) -> Vec<Word> {
    root.descendants()
        .filter(|n| n.is_element() && *n != root)
        .filter(|n| attr(*n, "begin").is_some() || attr(*n, "end").is_some())
        .map(|n| Word {
            begin: time_attr(n, "begin"),
            end: time_attr(n, "end"),
            text: text_content(n),
            is_background: is_background(n, root),
        })
        .collect()
}

/// Whether `node` or any ancestor below `boundary` carries the background role.
fn is_background<'a, 'input>(node: Node<'a, 'input>, boundary: Node<'a, 'input>) -> bool {
    ancestors_until(node, boundary).any(|a| {
        attr(a, "role").is_some_and(|role| role.split_whitespace().any(|r| r == BACKGROUND_ROLE))
    })
}

fn time_attr(node: Node<'_, '_>, name: &str) -> u64 {
    parse_time(attr(node, name).unwrap_or_default())
}
