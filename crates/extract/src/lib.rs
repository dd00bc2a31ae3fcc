//! Thin metadata extraction for ebook files.
//!
//! Recovers the author list and title embedded in `.fb2` and `.epub` files,
//! which is all the information needed to derive a filename. The heavy
//! lifting is delegated: EPUB containers are opened with the [`epub`] crate,
//! FB2 documents are streamed with [`quick_xml`].

pub mod error;
mod extract;
mod format;
pub mod models;

use crate::error::{ErrorKind, Result};
use crate::models::Metadata;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::instrument;

pub use crate::format::Format;

/// Easy, top-level entrypoint: reads the metadata of the ebook at `path`.
///
/// The format is detected from the file extension. Returns
/// [`ErrorKind::Unsupported`] for anything that isn't a `.fb2` or `.epub`
/// file.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn get_metadata(path: &Path) -> Result<Metadata> {
    let format = match Format::from_path(path) {
        Some(format) => format,
        None => exn::bail!(ErrorKind::Unsupported(path.to_path_buf())),
    };
    let metadata = match format {
        Format::Epub => extract::from_epub(path)?,
        Format::Fb2 => {
            let file = File::open(path)
                .map_err(|e| ErrorKind::Read { path: path.to_path_buf(), detail: e.to_string() })?;
            extract::from_fb2(BufReader::new(file))?
        },
    };
    tracing::debug!(%format, title = %metadata.title, authors = %metadata.author_list_to_string(), "extracted");
    Ok(metadata)
}
