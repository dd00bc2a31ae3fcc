//! Extraction Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
/// All variants are `Clone` so downstream crates can embed the kind in their
/// own error trees.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file extension is not one of the supported ebook formats.
    #[display("'{}' is an unsupported ebook file format", _0.display())]
    Unsupported(#[error(not(source))] PathBuf),
    /// The file could not be read from disk.
    #[display("failed to read '{}': {detail}", path.display())]
    Read { path: PathBuf, detail: String },
    /// The document structure is too broken to process.
    #[display("malformed {format} document: {detail}")]
    Malformed { format: &'static str, detail: String },
    /// A required metadata field could not be found in the document.
    #[display("missing required field: {_0}")]
    MissingField(#[error(not(source))] &'static str),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The document is either valid or it's not; only reads can be
        // transient.
        matches!(self, Self::Read { .. })
    }
}
