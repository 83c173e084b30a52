//! Lyrics document loading and parsing.
//!
//! Turns timed-text markup (syllable-synced song lyrics) into the
//! [`Line`](crate::types::Line) model consumed by the timeline.

pub mod markup;
pub mod parser;
pub mod time;

use std::path::Path;

pub use parser::{parse, parse_document, try_parse, BACKGROUND_ROLE};
pub use time::{format_timestamp, parse_time};

use crate::error::Result;
use crate::types::Line;

/// Read a lyrics document from disk and parse it.
///
/// I/O failures are errors; unparseable content is not, it yields no lines.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Line>> {
    let path = path.as_ref();
    let markup = fs_err::read_to_string(path)?;
    let lines = parse(&markup);
    tracing::info!("Loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
