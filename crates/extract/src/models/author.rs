use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// A person credited as an author of an ebook.
///
/// FB2 splits the name into parts; EPUB carries a single `creator` string.
/// Both converge on one display name here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Author {
    /// Display name, e.g. `"Leo Tolstoy"`.
    pub name: String,
}
impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Assembles a display name from FB2 name parts, falling back to the
    /// nickname when no proper name parts are present. Returns `None` when
    /// every part is empty.
    pub fn from_parts(
        first: Option<&str>,
        middle: Option<&str>,
        last: Option<&str>,
        nickname: Option<&str>,
    ) -> Option<Self> {
        let name = [first, middle, last]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        match name.is_empty() {
            false => Some(Self::new(name)),
            true => nickname.map(str::trim).filter(|n| !n.is_empty()).map(Self::new),
        }
    }
}

impl FromStr for Author {
    type Err = Infallible;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(name))
    }
}
impl From<String> for Author {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name)
    }
}
