//! Collision-safe filename generation.
//!
//! Builds `"{authors} - {title}{ext}"` candidates and probes for the first
//! name not already taken, appending `-1`, `-2`, … as needed. The probe is
//! a plain existence check with no locking; a race window exists between
//! probing and the caller's rename, which is acceptable for a single-user
//! interactive tool.

use crate::error::{ErrorKind, Result};
use crate::sanitize::sanitize;
use std::path::Path;

/// How many numeric suffixes to try before giving up.
pub const MAX_ATTEMPTS: usize = 100;

/// Builds the sanitized `"{authors} - {title}"` stem shared by every
/// candidate.
pub(crate) fn base_name(authors: &str, title: &str) -> String {
    sanitize(&format!("{authors} - {title}"))
}

/// Returns a filename (no directory component) of the form
/// `"{authors} - {title}{ext}"` that does not collide with any existing
/// file in `dir`, suffixing `-1` … `-100` on collision.
///
/// # Errors
/// [`ErrorKind::Exhausted`] when every candidate within the attempt budget
/// is taken.
pub fn unique_name(dir: &Path, authors: &str, title: &str, ext: &str) -> Result<String> {
    unique_name_with(authors, title, ext, MAX_ATTEMPTS, |candidate| dir.join(candidate).exists())
}

/// [`unique_name`] with an explicit attempt budget and existence predicate.
///
/// The predicate receives each candidate filename in probe order and returns
/// whether it is already taken. Splitting this out keeps the probe loop
/// testable without touching a filesystem.
pub fn unique_name_with(
    authors: &str,
    title: &str,
    ext: &str,
    max_attempts: usize,
    exists: impl Fn(&str) -> bool,
) -> Result<String> {
    let base = base_name(authors, title);

    let candidate = format!("{base}{ext}");
    if !exists(&candidate) {
        return Ok(candidate);
    }
    for counter in 1..=max_attempts {
        let candidate = format!("{base}-{counter}{ext}");
        if !exists(&candidate) {
            return Ok(candidate);
        }
    }
    exn::bail!(ErrorKind::Exhausted { base: format!("{base}{ext}"), attempts: max_attempts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn taken(names: &[&str]) -> HashSet<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_no_collision_returns_base() {
        let name = unique_name_with("A", "T", ".epub", MAX_ATTEMPTS, |_| false).unwrap();
        assert_eq!(name, "A - T.epub");
    }

    #[test]
    fn test_first_collision_appends_suffix() {
        let existing = taken(&["A - T.epub"]);
        let name =
            unique_name_with("A", "T", ".epub", MAX_ATTEMPTS, |c| existing.contains(c)).unwrap();
        assert_eq!(name, "A - T-1.epub");
    }

    #[test]
    fn test_probes_sequentially() {
        let existing = taken(&["A - T.epub", "A - T-1.epub", "A - T-2.epub"]);
        let name =
            unique_name_with("A", "T", ".epub", MAX_ATTEMPTS, |c| existing.contains(c)).unwrap();
        assert_eq!(name, "A - T-3.epub");
    }

    #[test]
    fn test_returned_name_never_exists() {
        let existing = taken(&["A - T.fb2", "A - T-1.fb2", "A - T-4.fb2"]);
        let exists = |c: &str| existing.contains(c);
        let name = unique_name_with("A", "T", ".fb2", MAX_ATTEMPTS, exists).unwrap();
        assert!(!exists(&name));
    }

    #[test]
    fn test_exhaustion_after_max_attempts() {
        let err = unique_name_with("A", "T", ".epub", 100, |_| true).unwrap_err();
        assert!(matches!(*err, ErrorKind::Exhausted { attempts: 100, .. }));
        let message = (*err).to_string();
        assert!(message.contains("100 attempts"), "unexpected message: {message}");
        assert!(message.contains("A - T.epub"), "unexpected message: {message}");
    }

    #[test]
    fn test_base_is_sanitized_before_probing() {
        // '/' is forbidden on every platform the tests run on.
        let name = unique_name_with("A/C", "D/C", ".fb2", MAX_ATTEMPTS, |_| false).unwrap();
        assert_eq!(name, "AC - DC.fb2");
    }
}
