//! Application error types.
//!
//! Parsing and timeline interaction never fail from the caller's point of
//! view; these errors cover file access, configuration and the strict
//! parsing entry point.

use thiserror::Error;

use crate::lyrics::markup::MarkupError;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error; file errors carry their path in the message
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Markup that is not well formed
    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

// Convenience conversions
impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("No lyrics file given", "Pass a path or set LYRICS_PATH");
        assert_eq!(
            err.to_string(),
            "Configuration error: No lyrics file given. Pass a path or set LYRICS_PATH"
        );
    }

    #[test]
    fn io_errors_keep_the_path() {
        let err: Error = fs_err::read_to_string("/no/such/lyrics.ttml").unwrap_err().into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("/no/such/lyrics.ttml"));
    }

    #[test]
    fn markup_errors_convert() {
        let markup_err = crate::lyrics::try_parse("<p>").unwrap_err();
        let err: Error = markup_err.into();
        assert!(matches!(err, Error::Markup(_)));
    }
}
