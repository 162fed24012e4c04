//! Syndication feed parsing.
//!
//! The source feed shape is byte-stable, so `<item>` blocks are cut out
//! with bounded-greedy matching instead of a full XML parser. Per-block
//! fields prefer CDATA-wrapped content over the plain tag form.

use std::sync::LazyLock;

use regex::Regex;

static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<item[^>]*>(.*?)</item>").expect("valid item pattern"));

static TITLE: LazyLock<TagPattern> = LazyLock::new(|| TagPattern::new("title"));
static LINK: LazyLock<TagPattern> = LazyLock::new(|| TagPattern::new("link"));
static DESCRIPTION: LazyLock<TagPattern> = LazyLock::new(|| TagPattern::new("description"));
static PUB_DATE: LazyLock<TagPattern> = LazyLock::new(|| TagPattern::new("pubDate"));
static GUID: LazyLock<TagPattern> = LazyLock::new(|| TagPattern::new("guid"));

/// One syndication entry, fields empty when the tag is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    /// Item link, may be empty or a non-URL
    pub link: String,
    /// Description as an HTML fragment
    pub description: String,
    /// Raw publication timestamp as published (RFC 2822 in practice)
    pub pub_date: String,
    /// Fallback identifier, sometimes the only usable URL
    pub guid: String,
}

/// Extractor for one named subfield, CDATA form preferred.
struct TagPattern {
    cdata: Regex,
    plain: Regex,
}

impl TagPattern {
    fn new(tag: &str) -> Self {
        let cdata = Regex::new(&format!(
            r"(?is)<{tag}[^>]*><!\[CDATA\[(.*?)\]\]></{tag}>"
        ))
        .expect("valid tag pattern");
        let plain =
            Regex::new(&format!(r"(?is)<{tag}[^>]*>(.*?)</{tag}>")).expect("valid tag pattern");
        Self { cdata, plain }
    }

    fn extract(&self, block: &str) -> String {
        let raw = self
            .cdata
            .captures(block)
            .or_else(|| self.plain.captures(block))
            .map(|c| c[1].to_string())
            .unwrap_or_default();
        html_escape::decode_html_entities(&raw).trim().to_string()
    }
}

/// Extract all feed items from raw feed XML.
pub fn parse_feed(xml: &str) -> Vec<FeedItem> {
    ITEM_RE
        .captures_iter(xml)
        .map(|c| parse_item(&c[1]))
        .collect()
}

fn parse_item(block: &str) -> FeedItem {
    FeedItem {
        title: TITLE.extract(block),
        link: LINK.extract(block),
        description: DESCRIPTION.extract(block),
        pub_date: PUB_DATE.extract(block),
        guid: GUID.extract(block),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel>
<title>Funding calls</title>
<item>
  <title><![CDATA[LIFE call & info]]></title>
  <link>https://example.com/call/1</link>
  <description><![CDATA[<p>Submission deadline 15 April 2026</p>]]></description>
  <pubDate>Tue, 10 Feb 2026 09:30:00 +0100</pubDate>
  <guid>https://example.com/guid/1</guid>
</item>
<item>
  <title>Plain &amp; simple</title>
  <description>no deadline here</description>
</item>
</channel></rss>"#;

    #[test]
    fn extracts_all_items() {
        let items = parse_feed(SAMPLE);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn cdata_preferred_and_markers_removed() {
        let items = parse_feed(SAMPLE);
        assert_eq!(items[0].title, "LIFE call & info");
        assert!(!items[0].description.contains("CDATA"));
        assert_eq!(
            items[0].description,
            "<p>Submission deadline 15 April 2026</p>"
        );
    }

    #[test]
    fn plain_tags_are_decoded() {
        let items = parse_feed(SAMPLE);
        assert_eq!(items[1].title, "Plain & simple");
    }

    #[test]
    fn missing_tags_leave_fields_empty() {
        let items = parse_feed(SAMPLE);
        assert_eq!(items[1].link, "");
        assert_eq!(items[1].pub_date, "");
        assert_eq!(items[1].guid, "");
    }

    #[test]
    fn channel_title_is_not_an_item_field() {
        // The channel-level <title> sits outside any <item> block.
        let items = parse_feed(SAMPLE);
        assert_ne!(items[0].title, "Funding calls");
    }

    #[test]
    fn empty_feed_yields_no_items() {
        assert!(parse_feed("<rss><channel></channel></rss>").is_empty());
        assert!(parse_feed("").is_empty());
    }
}
