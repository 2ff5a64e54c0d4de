//! Error types for document rendering.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading documents for rendering.
///
/// Only filesystem access can fail. Every later pipeline stage is total:
/// malformed markdown or front matter degrades to text instead of erroring.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a source document.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to enumerate a documents directory.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        /// Path to the directory that could not be listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
