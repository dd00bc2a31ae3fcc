//! Filename sanitization.
//!
//! Maps free-text metadata (author names, titles) to strings that are safe
//! to use as filenames on the host operating system. Forbidden characters
//! are *deleted*, never substituted or escaped, so the mapping is total but
//! not injective: two different inputs may sanitize to the same output.

use std::sync::LazyLock;

/// The flavour of filename rules to sanitize against.
///
/// Selecting the set by value (rather than probing process-global state)
/// keeps [`sanitize_for`] a pure function.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Platform {
    /// NTFS/exFAT rules: `< > : " / \ | ? *` and NUL are forbidden.
    Windows,
    /// POSIX rules: only `/` and NUL are forbidden.
    Unix,
}
impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }
}

/// Returns the characters forbidden in filenames on the given platform.
pub fn forbidden_chars(platform: Platform) -> &'static [char] {
    match platform {
        Platform::Windows => &['<', '>', ':', '"', '/', '\\', '|', '?', '*', '\0'],
        Platform::Unix => &['/', '\0'],
    }
}

/// Forbidden set for the current platform, computed once per process.
static FORBIDDEN: LazyLock<&'static [char]> = LazyLock::new(|| forbidden_chars(Platform::current()));

/// Deletes the current platform's forbidden characters from `text`.
///
/// Every other character is preserved in original order and count. Total on
/// any input, including the empty string, and idempotent.
pub fn sanitize(text: &str) -> String {
    strip(text, *FORBIDDEN)
}

/// [`sanitize`] against an explicit platform's rules instead of the host's.
pub fn sanitize_for(platform: Platform, text: &str) -> String {
    strip(text, forbidden_chars(platform))
}

fn strip(text: &str, forbidden: &[char]) -> String {
    text.chars().filter(|c| !forbidden.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Platform::Windows, "file:name?.txt", "filename.txt")]
    #[case(Platform::Windows, "<book|title>", "booktitle")]
    #[case(Platform::Windows, "a/b\\c*d", "abcd")]
    #[case(Platform::Windows, "valid_name.txt", "valid_name.txt")]
    #[case(Platform::Windows, "\"quote\"", "quote")]
    #[case(Platform::Windows, "file\0name.txt", "filename.txt")]
    #[case(Platform::Windows, "", "")]
    #[case(Platform::Unix, "file:name?.txt", "file:name?.txt")]
    #[case(Platform::Unix, "<book|title>", "<book|title>")]
    #[case(Platform::Unix, "a/b\\c*d", "ab\\c*d")]
    #[case(Platform::Unix, "file/name", "filename")]
    #[case(Platform::Unix, "file\0name.txt", "filename.txt")]
    #[case(Platform::Unix, "", "")]
    fn test_strips_forbidden_characters(
        #[case] platform: Platform,
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(sanitize_for(platform, input), expected);
    }

    #[rstest]
    #[case(Platform::Windows)]
    #[case(Platform::Unix)]
    fn test_output_contains_no_forbidden_characters(#[case] platform: Platform) {
        let input = "a<b>c:d\"e/f\\g|h?i*j\0k";
        let output = sanitize_for(platform, input);
        for c in forbidden_chars(platform) {
            assert!(!output.contains(*c), "output still contains {c:?}");
        }
    }

    #[rstest]
    #[case(Platform::Windows)]
    #[case(Platform::Unix)]
    fn test_idempotent(#[case] platform: Platform) {
        let once = sanitize_for(platform, "a<b>c:d\"e/f\\g|h?i*j");
        assert_eq!(sanitize_for(platform, &once), once);
    }

    #[test]
    fn test_preserves_order_and_count() {
        assert_eq!(sanitize_for(Platform::Unix, "aa//bb//aa"), "aabbaa");
    }

    #[test]
    fn test_current_platform_sanitize_matches_explicit() {
        let input = "file/name:with?everything";
        assert_eq!(sanitize(input), sanitize_for(Platform::current(), input));
    }
}
