//! URL extraction from free-form message text.
//!
//! Finds URL-like substrings in first-match order: optional scheme, optional
//! `www.`, dot-separated labels ending in a top-level label of two letters or
//! more, optional path/query tail. Bare domains match without a scheme.

use regex::Regex;
use std::sync::LazyLock;

/// Matches URL-like substrings in chat text.
///
/// Deliberately loose: a scheme is optional so `example.com` style links are
/// caught, and the path tail runs to the next whitespace. Surrounding
/// Cyrillic or mixed-script words never match because labels are ASCII-only.
const URL_PATTERN: &str =
    r"(?:(?:https?|ftp)://)?(?:www\.)?(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}(?:/\S*)?";

/// Helper function to safely compile a regex pattern, panicking with a detailed error message
/// if compilation fails. Used for static regex patterns that are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static URL_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(URL_PATTERN, "URL_RE"));

/// A URL-like substring found in a message.
///
/// Keeps the original spelling for display alongside the canonical form the
/// resolver and reputation client operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedUrl {
    /// The substring exactly as it appeared in the message.
    pub as_typed: String,
    /// The as-typed form with `http://` prefixed when no scheme was present.
    pub canonical: String,
}

impl ExtractedUrl {
    pub fn new(as_typed: &str) -> Self {
        ExtractedUrl {
            as_typed: as_typed.to_string(),
            canonical: ensure_scheme(as_typed),
        }
    }
}

/// Prefixes `http://` when the URL carries no scheme.
///
/// URLs that already start with `http://`, `https://`, or `ftp://` are
/// returned unchanged.
pub fn ensure_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("ftp://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

/// Extracts URL-like substrings from `text` in first-match order.
///
/// Duplicate literal URLs are kept: each occurrence in the input gets its own
/// entry, and later its own report line.
///
/// # Arguments
///
/// * `text` - The raw message text
///
/// # Returns
///
/// A vector of `ExtractedUrl` values, empty when the text contains nothing
/// URL-like.
pub fn extract_urls(text: &str) -> Vec<ExtractedUrl> {
    URL_RE
        .find_iter(text)
        .map(|m| ExtractedUrl::new(m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extracts_schemed_url() {
        let urls = extract_urls("see https://example.com/login for details");
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].as_typed, "https://example.com/login");
        assert_eq!(urls[0].canonical, "https://example.com/login");
    }

    #[test]
    fn test_extracts_bare_domain_and_prefixes_scheme() {
        let urls = extract_urls("check example.com today");
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].as_typed, "example.com");
        assert_eq!(urls[0].canonical, "http://example.com");
    }

    #[test]
    fn test_extracts_www_form() {
        let urls = extract_urls("go to www.example.com now");
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].as_typed, "www.example.com");
        assert_eq!(urls[0].canonical, "http://www.example.com");
    }

    #[test]
    fn test_ftp_scheme_is_kept() {
        let urls = extract_urls("legacy mirror ftp://files.example.org/pub");
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].canonical, "ftp://files.example.org/pub");
    }

    #[test]
    fn test_multiple_urls_in_input_order() {
        let urls = extract_urls("first bit.ly/abc then https://example.com and last evil.test/x");
        let typed: Vec<&str> = urls.iter().map(|u| u.as_typed.as_str()).collect();
        assert_eq!(typed, ["bit.ly/abc", "https://example.com", "evil.test/x"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let urls = extract_urls("example.com and again example.com");
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], urls[1]);
    }

    #[test]
    fn test_no_match_in_plain_text() {
        assert!(extract_urls("hello there, nothing to see").is_empty());
        assert!(extract_urls("").is_empty());
    }

    #[test]
    fn test_version_numbers_do_not_match() {
        // "2.0" has a non-alphabetic top-level label
        assert!(extract_urls("released version 2.0 yesterday").is_empty());
    }

    #[test]
    fn test_single_letter_tld_does_not_match() {
        assert!(extract_urls("a.b is not a url").is_empty());
    }

    #[test]
    fn test_trailing_punctuation_excluded() {
        let urls = extract_urls("Have you seen example.com, or example.org?");
        let typed: Vec<&str> = urls.iter().map(|u| u.as_typed.as_str()).collect();
        assert_eq!(typed, ["example.com", "example.org"]);
    }

    #[test]
    fn test_cyrillic_text_around_url() {
        let urls = extract_urls("проверьте сайт example.com срочно");
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].as_typed, "example.com");
    }

    #[test]
    fn test_cyrillic_words_alone_do_not_match() {
        assert!(extract_urls("привет как дела").is_empty());
    }

    #[test]
    fn test_path_stops_at_whitespace() {
        let urls = extract_urls("link http://example.com/a?b=1&c=2 trailing words");
        assert_eq!(urls[0].as_typed, "http://example.com/a?b=1&c=2");
    }

    #[test]
    fn test_ensure_scheme() {
        assert_eq!(ensure_scheme("example.com"), "http://example.com");
        assert_eq!(ensure_scheme("https://example.com"), "https://example.com");
        assert_eq!(ensure_scheme("http://example.com"), "http://example.com");
        assert_eq!(
            ensure_scheme("ftp://files.example.org"),
            "ftp://files.example.org"
        );
    }

    proptest! {
        #[test]
        fn prop_extracted_substrings_appear_in_input(text in "[ -~]{0,200}") {
            for url in extract_urls(&text) {
                prop_assert!(text.contains(&url.as_typed));
            }
        }

        #[test]
        fn prop_canonical_always_has_scheme(text in "\\PC{0,200}") {
            for url in extract_urls(&text) {
                prop_assert!(
                    url.canonical.starts_with("http://")
                        || url.canonical.starts_with("https://")
                        || url.canonical.starts_with("ftp://")
                );
            }
        }

        #[test]
        fn prop_dotless_words_never_match(word in "[a-zA-Z ]{0,60}") {
            prop_assert!(extract_urls(&word).is_empty());
        }
    }
}
