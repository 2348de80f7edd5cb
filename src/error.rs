//! Crate-level error types.

use std::fmt;

/// Errors produced by the pong3d crate.
///
/// Only the edges of the crate can fail (option presets, menu content,
/// the viewer event loop). Key routing and view transitions never do.
#[derive(Debug)]
pub enum PongError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Failed to fetch auxiliary content (menu HTML) from a remote source.
    ContentFetch(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for PongError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ContentFetch(msg) => {
                write!(f, "content fetch error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for PongError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PongError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
