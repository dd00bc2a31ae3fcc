//! Library Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use shelfmark_extract::error::{Error as ExtractError, ErrorKind as ExtractErrorKind};
use std::io::Error as IoError;
use std::path::PathBuf;

/// A library error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The file extension is not one of the supported ebook formats.
    #[display("'{}' is an unsupported ebook file format", _0.display())]
    UnsupportedFormat(#[error(not(source))] PathBuf),
    /// No free filename was found within the attempt budget.
    #[display("cannot find unique name after {attempts} attempts: {base}")]
    Exhausted { base: String, attempts: usize },
    /// Metadata extraction failed; the inner kind says why.
    #[display("metadata extraction failed: {_0}")]
    Extract(ExtractErrorKind),
    /// Underlying I/O error
    #[display("I/O error: {_0}")]
    Io(IoError),
}
impl From<IoError> for ErrorKind {
    fn from(err: IoError) -> Self {
        Self::Io(err)
    }
}
impl ErrorKind {
    /// Convert an extraction error into a library error, preserving the
    /// extract crate's `Exn` frame (error tree) as a child in its own
    /// error tree.
    #[track_caller]
    pub fn extract(err: ExtractError) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Extract(inner))
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
