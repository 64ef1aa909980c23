//! Error types for formlint operations.
//!
//! Only the document loader can fail hard: once a document parses, missing or
//! oddly-shaped structure is normal authoring behavior, not an error, and the
//! extractors degrade silently instead of returning `Err`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the linting pipeline.
#[derive(Debug, Error)]
pub enum LintError {
    /// Raw text could not be parsed as an interview document set.
    #[error("malformed interview document{}: {message}", format_path(.path))]
    MalformedDocument {
        message: String,
        path: Option<PathBuf>,
    },

    /// File system failure while reading an interview or reference file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reference corpus (e.g. the word-frequency table) could not be loaded.
    #[error("reference data error: {0}")]
    Reference(String),
}

impl LintError {
    /// Attach a file path to a parse error that was produced without one.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            LintError::MalformedDocument { message, .. } => LintError::MalformedDocument {
                message,
                path: Some(path.into()),
            },
            other => other,
        }
    }
}

fn format_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" in {}", p.display()),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, LintError>;
