//! Error types for converter construction and project I/O.
//!
//! Converting a document never fails: matching and sanitizing degrade gracefully on
//! any UTF-8 input. Errors only come from building a [`Converter`](crate::Converter)
//! out of custom tables and from reading or writing script files.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::knowledge::Surface;

/// Errors that can occur while building a converter or processing script files.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A knowledge base produced a pattern the regex engine rejected.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A knowledge base is structurally unusable.
    #[error("Invalid knowledge base for {surface}: {message}")]
    InvalidKnowledgeBase { surface: Surface, message: String },

    /// IO error while reading or writing a script.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error while walking a project directory.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// File is not a `.cs` or `.js` script.
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    /// JSON parsing or serialization error.
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(String),
}

impl ConvertError {
    /// Create an invalid knowledge base error.
    pub fn invalid_knowledge_base(surface: Surface, message: impl Into<String>) -> Self {
        Self::InvalidKnowledgeBase {
            surface,
            message: message.into(),
        }
    }

    /// Create an IO error tagged with the offending path.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a JSON error.
    #[cfg(feature = "serde")]
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}

/// Result alias for fallible converter operations.
pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
