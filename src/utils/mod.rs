//! Utility functions and helpers.

pub mod http;

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static HTTP_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://\S+").expect("valid URL pattern"));

/// Check whether a string is an absolute http(s) URL.
pub fn is_http_url(s: &str) -> bool {
    HTTP_URL_RE.is_match(s.trim())
}

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Make an href absolute against a base URL string.
pub fn ensure_absolute(href: &str, base: &str) -> String {
    if href.is_empty() {
        return String::new();
    }
    if is_http_url(href) {
        return href.trim().to_string();
    }
    Url::parse(base)
        .map(|b| resolve_url(&b, href))
        .unwrap_or_else(|_| href.to_string())
}

/// Flatten all whitespace runs to single spaces and trim.
pub fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Largest char-boundary index not exceeding `idx`.
///
/// Byte-window slicing over scraped HTML must not split a UTF-8 sequence.
pub fn clamp_to_char_boundary(s: &str, idx: usize) -> usize {
    if idx >= s.len() {
        return s.len();
    }
    let mut idx = idx;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://example.com/path"));
        assert!(is_http_url("  http://example.com  "));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("/relative/path"));
        assert!(!is_http_url(""));
        assert!(!is_http_url("https://"));
    }

    #[test]
    fn test_ensure_absolute() {
        assert_eq!(
            ensure_absolute("/news-events/events/x", "https://example.com"),
            "https://example.com/news-events/events/x"
        );
        assert_eq!(
            ensure_absolute("page_en", "https://example.com"),
            "https://example.com/page_en"
        );
        assert_eq!(
            ensure_absolute("https://other.com/x", "https://example.com"),
            "https://other.com/x"
        );
        assert_eq!(ensure_absolute("", "https://example.com"), "");
    }

    #[test]
    fn test_collapse_ws() {
        assert_eq!(collapse_ws("  a \t b \n\n c "), "a b c");
    }

    #[test]
    fn test_clamp_to_char_boundary() {
        let s = "aé€b";
        for idx in 0..=s.len() + 2 {
            let clamped = clamp_to_char_boundary(s, idx);
            assert!(s.is_char_boundary(clamped));
            assert!(clamped <= s.len());
        }
        assert_eq!(clamp_to_char_boundary("abc", 2), 2);
        assert_eq!(clamp_to_char_boundary("abc", 10), 3);
    }
}
