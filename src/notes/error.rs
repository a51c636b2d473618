//! Note registry error types
//!
//! Everything that can go wrong while building the registry from the
//! build step's output. Lookups never fail; a missing slug is `None`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating notes
#[derive(Error, Debug)]
pub enum NoteError {
    /// I/O operation failed
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest could not be parsed
    #[error("Invalid manifest {path:?}: {error}")]
    Manifest { path: PathBuf, error: String },

    /// Slug is empty or contains characters that are not URL-safe
    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    /// Note has an empty title
    #[error("Note '{0}' has an empty title")]
    EmptyTitle(String),

    /// Two notes share a slug
    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),

    /// Manifest entry has neither or both of `html` and `content_path`
    #[error("Note '{0}' must set exactly one of `html` or `content_path`")]
    AmbiguousContent(String),
}

impl From<serde_json::Error> for NoteError {
    fn from(err: serde_json::Error) -> Self {
        NoteError::Manifest {
            path: PathBuf::new(),
            error: err.to_string(),
        }
    }
}

/// Result type alias for note operations
pub type NoteResult<T> = Result<T, NoteError>;
