//! Core renaming logic: filename sanitization, collision-safe unique
//! naming, and the rename pass that ties them to the metadata extractor.

pub mod error;
mod name;
mod rename;
pub mod sanitize;

pub use crate::name::{MAX_ATTEMPTS, unique_name, unique_name_with};
pub use crate::rename::{Action, rename_ebook, rename_ebooks};
pub use crate::sanitize::{Platform, forbidden_chars, sanitize, sanitize_for};
