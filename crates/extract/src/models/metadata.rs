use super::Author;

/// The subset of ebook metadata needed to derive a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Book title
    pub title: String,
    /// List of authors (may be empty for anonymous works)
    pub authors: Vec<Author>,
}
impl Metadata {
    /// Joins all author display names with `", "`.
    ///
    /// An anonymous work yields the empty string; callers decide what a
    /// nameless author slot looks like in a filename.
    pub fn author_list_to_string(&self) -> String {
        self.authors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_list_joins_with_comma() {
        let meta = Metadata {
            title: "Good Omens".to_string(),
            authors: vec![Author::new("Terry Pratchett"), Author::new("Neil Gaiman")],
        };
        assert_eq!(meta.author_list_to_string(), "Terry Pratchett, Neil Gaiman");
    }

    #[test]
    fn test_author_list_empty() {
        let meta = Metadata { title: "Anon".to_string(), authors: vec![] };
        assert_eq!(meta.author_list_to_string(), "");
    }
}
