use std::ffi::OsStr;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::Path;

/// Supported ebook container formats, detected by file extension.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Format {
    /// FictionBook 2.0, a single XML document.
    Fb2,
    /// EPUB, a zip container with OPF metadata.
    Epub,
}
impl Format {
    /// Detects the format from a path's extension. Returns `None` for
    /// anything that isn't a supported ebook file.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        match path.as_ref().extension().and_then(OsStr::to_str) {
            Some("fb2") => Some(Self::Fb2),
            Some("epub") => Some(Self::Epub),
            _ => None,
        }
    }

    /// The canonical file extension, dot included.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Fb2 => ".fb2",
            Self::Epub => ".epub",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Fb2 => write!(f, "fb2"),
            Self::Epub => write!(f, "epub"),
        }
    }
}
