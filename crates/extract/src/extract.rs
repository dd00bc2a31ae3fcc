//! Per-format metadata readers.
//!
//! Each reader does the minimum needed to recover title and authors; full
//! document parsing is the underlying library's job (`epub` for EPUB, a
//! streaming `quick-xml` pass for FB2).

use crate::error::{ErrorKind, Result};
use crate::models::{Author, Metadata};
use epub::doc::EpubDoc;
use exn::OptionExt;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::BufRead;
use std::path::Path;

/// Reads title and creators from an EPUB's OPF metadata.
pub(crate) fn from_epub(path: &Path) -> Result<Metadata> {
    let doc = EpubDoc::new(path)
        .map_err(|e| ErrorKind::Malformed { format: "epub", detail: e.to_string() })?;
    let title = doc
        .mdata("title")
        .map(|item| item.value.clone())
        .ok_or_raise(|| ErrorKind::MissingField("title"))?;
    let authors = doc
        .metadata
        .iter()
        .filter(|item| item.property == "creator")
        .map(|item| Author::from(item.value.clone()))
        .collect();
    Ok(Metadata { title, authors })
}

/// Which text node of the FB2 `<title-info>` block is currently open.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    FirstName,
    MiddleName,
    LastName,
    Nickname,
}
impl Field {
    fn element(&self) -> &'static [u8] {
        match self {
            Self::Title => b"book-title",
            Self::FirstName => b"first-name",
            Self::MiddleName => b"middle-name",
            Self::LastName => b"last-name",
            Self::Nickname => b"nickname",
        }
    }
}

#[derive(Default)]
struct NameParts {
    first: Option<String>,
    middle: Option<String>,
    last: Option<String>,
    nickname: Option<String>,
}

/// Streams through an FB2 document and collects `<book-title>` and `<author>`
/// name parts from the first `<title-info>` block.
///
/// Only the `<description>` header is of interest, so parsing stops as soon
/// as `</title-info>` is seen rather than reading the whole body.
pub(crate) fn from_fb2<R: BufRead>(reader: R) -> Result<Metadata> {
    let mut xml = Reader::from_reader(reader);
    let mut buf = Vec::new();

    let mut title: Option<String> = None;
    let mut authors: Vec<Author> = Vec::new();
    let mut in_title_info = false;
    let mut current_author: Option<NameParts> = None;
    let mut field: Option<Field> = None;
    let mut text = String::new();

    loop {
        let event = xml
            .read_event_into(&mut buf)
            .map_err(|e| ErrorKind::Malformed { format: "fb2", detail: e.to_string() })?;
        match event {
            Event::Start(e) => {
                let open = match e.local_name().as_ref() {
                    b"title-info" => {
                        in_title_info = true;
                        None
                    },
                    b"author" if in_title_info => {
                        current_author = Some(NameParts::default());
                        None
                    },
                    b"book-title" if in_title_info => Some(Field::Title),
                    b"first-name" if current_author.is_some() => Some(Field::FirstName),
                    b"middle-name" if current_author.is_some() => Some(Field::MiddleName),
                    b"last-name" if current_author.is_some() => Some(Field::LastName),
                    b"nickname" if current_author.is_some() => Some(Field::Nickname),
                    _ => None,
                };
                if open.is_some() {
                    field = open;
                    text.clear();
                }
            },
            Event::Text(t) if field.is_some() => {
                let chunk = t
                    .unescape()
                    .map_err(|e| ErrorKind::Malformed { format: "fb2", detail: e.to_string() })?;
                text.push_str(&chunk);
            },
            // CDATA carries raw character data; no entity unescaping applies.
            Event::CData(t) if field.is_some() => {
                let chunk = xml
                    .decoder()
                    .decode(&t)
                    .map_err(|e| ErrorKind::Malformed { format: "fb2", detail: e.to_string() })?;
                text.push_str(&chunk);
            },
            Event::End(e) => match e.local_name().as_ref() {
                // Further <src-title-info> blocks describe the translation
                // source, not the book itself.
                b"title-info" => break,
                b"author" => {
                    if let Some(parts) = current_author.take()
                        && let Some(author) = Author::from_parts(
                            parts.first.as_deref(),
                            parts.middle.as_deref(),
                            parts.last.as_deref(),
                            parts.nickname.as_deref(),
                        )
                    {
                        authors.push(author);
                    }
                },
                other => {
                    // Inline markup (e.g. <emphasis>) inside a field keeps the
                    // field open; only the field's own end tag commits it.
                    if let Some(open) = field
                        && open.element() == other
                    {
                        field = None;
                        let value = text.trim().to_string();
                        match (open, &mut current_author) {
                            (Field::Title, _) => title = Some(value),
                            (Field::FirstName, Some(parts)) => parts.first = Some(value),
                            (Field::MiddleName, Some(parts)) => parts.middle = Some(value),
                            (Field::LastName, Some(parts)) => parts.last = Some(value),
                            (Field::Nickname, Some(parts)) => parts.nickname = Some(value),
                            _ => {}
                        }
                    }
                },
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    let title = title.ok_or_raise(|| ErrorKind::MissingField("book-title"))?;
    Ok(Metadata { title, authors })
}
