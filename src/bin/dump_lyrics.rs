//! Debug tool to dump the parsed view of a lyrics document.
//!
//! Usage:
//!   `cargo run --bin dump_lyrics -- <file.ttml>`
//!   `cargo run --bin dump_lyrics -- <file.ttml> --score 87.5 --compact`
//!
//! Prints the lines and words as JSON so parser output can be diffed
//! between documents.

use anyhow::{bail, Context, Result};
use lyricline::lyrics;
use lyricline::types::ParsedLyrics;
use std::path::PathBuf;

struct Args {
    path: PathBuf,
    score: Option<f64>,
    compact: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut path = None;
    let mut score = None;
    let mut compact = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--compact" => compact = true,
            "--score" => {
                let value = args.next().context("--score needs a value")?;
                score = Some(
                    value
                        .parse::<f64>()
                        .with_context(|| format!("Invalid score: {value}"))?,
                );
            }
            flag if flag.starts_with("--") => bail!("Unknown option: {flag}"),
            _ if path.is_none() => path = Some(PathBuf::from(&arg)),
            _ => bail!("Unexpected argument: {arg}"),
        }
    }

    let path = path.context("Usage: dump_lyrics <file.ttml> [--score N] [--compact]")?;
    Ok(Args { path, score, compact })
}

fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;

    let lines = lyrics::load_file(&args.path)
        .with_context(|| format!("Failed to load {}", args.path.display()))?;
    let view = ParsedLyrics::new(lines, args.score);

    let json = if args.compact {
        serde_json::to_string(&view)?
    } else {
        serde_json::to_string_pretty(&view)?
    };
    println!("{json}");

    let background = view.lines.iter().filter(|l| l.has_background()).count();
    eprintln!(
        "{} lines, {} with background vocals, {} words",
        view.lines.len(),
        background,
        view.lines.iter().map(|l| l.words.len()).sum::<usize>()
    );
    Ok(())
}
