//! Crate-level error types.

use std::fmt;

/// Errors produced by the glycomotif crate.
#[derive(Debug)]
pub enum GlycomotifError {
    /// A sugar abbreviation, group key, or item id was not found where the
    /// caller expected it. Display-only condition, never fatal to a page.
    NotFound(String),
    /// Malformed or structurally invalid result dataset.
    Dataset(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// External viewer creation or structure load failure. Always local to
    /// one slot; never propagated across a group.
    Viewer(String),
}

impl fmt::Display for GlycomotifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "not found: {what}"),
            Self::Dataset(msg) => write!(f, "dataset error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for GlycomotifError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GlycomotifError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for GlycomotifError {
    fn from(e: serde_json::Error) -> Self {
        Self::Dataset(e.to_string())
    }
}
