//! XML tree access for timed-text documents.
//!
//! The tree itself comes from `roxmltree`. Names and attributes are matched
//! on their local part, so `ttm:agent` and `agent` read the same.

use roxmltree::{Document, Node};

/// Errors raised while building the node tree.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    /// The document is not well formed.
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// Build the node tree, rejecting input that is not well formed.
pub fn parse_tree(text: &str) -> Result<Document<'_>, MarkupError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Ok(Document::parse(text)?)
}

/// Whether `node` is an element with the local name `name`.
pub fn is_named(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// Attribute value by local name, whatever its namespace.
pub fn attr<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|a| a.name() == name)
        .map(|a| a.value())
}

/// Concatenated text of every text run under `node`, untrimmed.
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}

/// `node` and its ancestors, stopping before `boundary`.
///
/// Runs to the document root when `boundary` is not an ancestor.
pub fn ancestors_until<'a, 'input>(
    node: Node<'a, 'input>,
    boundary: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.ancestors().take_while(move |a| *a != boundary)
}
