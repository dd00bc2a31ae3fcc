//! Rename orchestration: single files and recursive directory passes.

use crate::error::{ErrorKind, Result};
use crate::name::{base_name, unique_name};
use shelfmark_extract::{Format, get_metadata};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

/// The outcome of (successfully) renaming a single file.
#[derive(Debug)]
pub enum Action {
    /// File was moved to its metadata-derived name.
    Renamed(PathBuf),
    /// File already carries its metadata-derived name; no work performed.
    AlreadyCorrect(PathBuf),
}

/// Renames a single ebook file within its parent directory to
/// `"{authors} - {title}{ext}"`, suffixing `-1` … `-100` on collision.
///
/// Returns [`Action::AlreadyCorrect`] without touching the filesystem when
/// the file already has exactly that name, so repeated passes don't shuffle
/// files through numeric suffixes.
///
/// # Errors
/// - [`ErrorKind::UnsupportedFormat`] when the extension isn't `.fb2`/`.epub`.
/// - [`ErrorKind::Extract`] when metadata extraction fails.
/// - [`ErrorKind::Exhausted`] when no free name was found within the budget.
/// - [`ErrorKind::Io`] when the rename itself fails; no rollback is
///   attempted.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn rename_ebook(path: &Path) -> Result<Action> {
    let format = match Format::from_path(path) {
        Some(format) => format,
        None => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
    };
    let meta = get_metadata(path).map_err(ErrorKind::extract)?;
    let authors = meta.author_list_to_string();
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    let wanted = format!("{}{}", base_name(&authors, &meta.title), format.extension());
    if path.file_name().and_then(OsStr::to_str) == Some(wanted.as_str()) {
        debug!("already carries its metadata-derived name");
        return Ok(Action::AlreadyCorrect(path.to_path_buf()));
    }

    let target = parent.join(unique_name(parent, &authors, &meta.title, format.extension())?);
    fs::rename(path, &target).map_err(ErrorKind::Io)?;
    info!(to = %target.display(), "renamed");
    Ok(Action::Renamed(target))
}

/// Applies [`rename_ebook`] to every `.fb2`/`.epub` file under `directory`,
/// recursively, skipping everything else. Returns the number of files that
/// were actually moved.
///
/// The batch aborts on the first error; files renamed before the failure
/// stay renamed.
#[instrument(skip_all, fields(directory = %directory.display()))]
pub fn rename_ebooks(directory: &Path) -> Result<usize> {
    // Snapshot the candidate list up front so files renamed mid-pass are
    // never re-encountered under their new names.
    let mut candidates = Vec::new();
    for entry in WalkDir::new(directory) {
        let entry = entry.map_err(|e| ErrorKind::Io(e.into()))?;
        if entry.file_type().is_file() && Format::from_path(entry.path()).is_some() {
            candidates.push(entry.into_path());
        }
    }

    let mut renamed = 0;
    for path in candidates {
        if let Action::Renamed(_) = rename_ebook(&path)? {
            renamed += 1;
        }
    }
    debug!(renamed, "directory pass complete");
    Ok(renamed)
}
