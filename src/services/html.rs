//! HTML fragment to plain text conversion.
//!
//! Keeps the line-oriented structure downstream date search relies on:
//! break and block-closing tags become newlines before the remaining tags
//! are stripped.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::collapse_ws;

static BR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid tag pattern"));

static BLOCK_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(p|li|div|section|article|h\d)>").expect("valid tag pattern")
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

static HSPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("valid whitespace pattern"));

static BLANK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid whitespace pattern"));

/// Convert an HTML fragment into readable plain text.
pub fn html_to_text(html: &str) -> String {
    let text = BR_RE.replace_all(html, "\n");
    let text = BLOCK_CLOSE_RE.replace_all(&text, "\n");
    let text = TAG_RE.replace_all(&text, " ");
    let text = html_escape::decode_html_entities(&text);
    let text = text.replace('\r', "").replace('\u{a0}', " ");
    let text = HSPACE_RE.replace_all(&text, " ");
    let text = BLANK_RE.replace_all(&text, "\n");
    text.trim().to_string()
}

/// One-line plain text of an HTML fragment.
pub fn text_of(html: &str) -> String {
    collapse_ws(&html_to_text(html))
}
