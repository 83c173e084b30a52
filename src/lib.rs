//! `Lyricline` - timed lyrics parser and timeline viewer.
//!
//! Parses syllable-synced lyric documents into lines and words, and drives
//! a zoomable, pannable timeline over them. The `lyricline` binary wraps
//! both in a terminal viewer.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod lyrics;
pub mod timeline;
pub mod types;
pub mod ui;
