//! Homepage events block extraction.
//!
//! Best-effort structural scrape: the events block is located by a fixed
//! anchor attribute, a large trailing window becomes the working region,
//! and each date-block day span seeds a bounded lookahead chunk that is
//! searched for the month abbreviation, year, and nearest link. Missing
//! optional matches leave fields empty instead of failing the item; a
//! missing anchor yields an empty collection.
//!
//! The heuristic is fragile against upstream markup changes, so it stays
//! behind this one function and can be swapped for an HTML-tree query
//! without touching callers.

use std::sync::LazyLock;

use regex::Regex;

use crate::infer::dates::{iso, iso_from_day_block};
use crate::infer::{classify, location};
use crate::models::{Event, SourcesConfig};
use crate::services::html::text_of;
use crate::utils::{clamp_to_char_boundary, ensure_absolute};

/// Working region taken after the anchor; large enough for every homepage
/// event, regardless of where the block's real closing tag sits.
const BLOCK_WINDOW: usize = 60_000;

/// Lookahead harvested per day-span occurrence.
const CHUNK_WINDOW: usize = 4_000;

/// Navigation link rendered inside the block, not an event.
const SEE_ALL_TITLE: &str = "See all our events";

static DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<span[^>]*class="ecl-date-block__day"[^>]*>(.*?)</span>"#)
        .expect("valid day pattern")
});

static MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<abbr[^>]*class="ecl-date-block__month"[^>]*>(.*?)</abbr>"#)
        .expect("valid month pattern")
});

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<span[^>]*class="ecl-date-block__year"[^>]*>(.*?)</span>"#)
        .expect("valid year pattern")
});

static EVENT_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a[^>]+href="([^"]*/news-events/events/[^"]+)"[^>]*>(.*?)</a>"#)
        .expect("valid link pattern")
});

static ANY_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a[^>]+href="([^"]+)"[^>]*>(.*?)</a>"#).expect("valid link pattern")
});

/// Extract event records from a full homepage document.
pub fn extract_events(html: &str, sources: &SourcesConfig) -> Vec<Event> {
    let Some(block) = events_block(html, &sources.events_anchor) else {
        return Vec::new();
    };

    let mut events = Vec::new();
    for day_caps in DAY_RE.captures_iter(block) {
        let Some(whole) = day_caps.get(0) else {
            continue;
        };
        let end = clamp_to_char_boundary(block, whole.start() + CHUNK_WINDOW);
        let chunk = &block[whole.start()..end];

        let day_raw = text_of(&day_caps[1]);
        let month = MONTH_RE
            .captures(chunk)
            .map(|c| text_of(&c[1]))
            .unwrap_or_default();
        let year = YEAR_RE
            .captures(chunk)
            .map(|c| text_of(&c[1]))
            .unwrap_or_default();

        let (start_date, end_date) = iso_from_day_block(&day_raw, &month, &year);
        let Some(start_date) = start_date else {
            continue;
        };

        let link_caps = EVENT_LINK_RE
            .captures(chunk)
            .or_else(|| ANY_LINK_RE.captures(chunk));
        let (link, title) = match &link_caps {
            Some(c) => (
                ensure_absolute(c[1].trim(), &sources.site_base),
                text_of(&c[2]),
            ),
            None => (String::new(), String::new()),
        };
        if title.is_empty() || title.eq_ignore_ascii_case(SEE_ALL_TITLE) {
            continue;
        }

        let chunk_text = text_of(chunk);
        events.push(Event {
            title,
            date: iso(start_date),
            end_date: end_date.map(iso).unwrap_or_default(),
            date_label: format!("{day_raw} {month} {year}"),
            kind: classify::classify_event_type(&chunk_text)
                .map(str::to_string)
                .unwrap_or_default(),
            venue: location::infer_venue(&chunk_text),
            link,
            source: sources.events_source_label.clone(),
        });
    }
    events
}

/// Locate the events block and return the trailing working region.
fn events_block<'a>(html: &'a str, anchor: &str) -> Option<&'a str> {
    let anchor_re = Regex::new(&format!("(?i){}", regex::escape(anchor))).ok()?;
    let found = anchor_re.find(html)?;
    let end = clamp_to_char_boundary(html, found.start() + BLOCK_WINDOW);
    Some(&html[found.start()..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Articles are padded apart so each lookahead chunk covers one item.
    fn sample_page() -> String {
        let filler = "x".repeat(CHUNK_WINDOW + 100);
        format!(
            r#"<html><body><div>unrelated content</div>
<div id="block-eventsglobal" class="block">
  <article>
    <span class="ecl-date-block__day">02-06</span>
    <abbr class="ecl-date-block__month" title="March">Mar</abbr>
    <span class="ecl-date-block__year">2026</span>
    <a href="/news-events/events/clean-energy-week_en">Clean energy week</a>
    <ul><li>Conferences and summits</li><li>Venue: Brussels, Belgium (onsite)</li></ul>
  </article>
  <!-- {filler} -->
  <article>
    <span class="ecl-date-block__day">17</span>
    <abbr class="ecl-date-block__month">Feb</abbr>
    <span class="ecl-date-block__year">2026</span>
    <a href="https://example.com/events/online-info-day">Online info day</a>
    <ul><li>Info days</li><li>Online only</li></ul>
  </article>
  <a href="/news-events/events_en">See all our events</a>
</div></body></html>"#
        )
    }

    #[test]
    fn extracts_multi_day_event() {
        let events = extract_events(&sample_page(), &SourcesConfig::default());
        assert_eq!(events.len(), 2);

        let first = &events[0];
        assert_eq!(first.title, "Clean energy week");
        assert_eq!(first.date, "2026-03-02");
        assert_eq!(first.end_date, "2026-03-06");
        assert_eq!(first.date_label, "02-06 Mar 2026");
        assert_eq!(first.kind, "Conferences and summits");
        assert_eq!(first.venue, "Brussels, Belgium");
        assert_eq!(
            first.link,
            "https://cinea.ec.europa.eu/news-events/events/clean-energy-week_en"
        );
        assert_eq!(first.source, "CINEA homepage events");
    }

    #[test]
    fn extracts_single_day_online_event() {
        let events = extract_events(&sample_page(), &SourcesConfig::default());
        let second = &events[1];
        assert_eq!(second.title, "Online info day");
        assert_eq!(second.date, "2026-02-17");
        assert_eq!(second.end_date, "");
        assert_eq!(second.kind, "Info days");
        assert_eq!(second.venue, "Online only");
        assert_eq!(second.link, "https://example.com/events/online-info-day");
    }

    #[test]
    fn missing_anchor_yields_empty() {
        let events = extract_events("<html><body>no block here</body></html>", &SourcesConfig::default());
        assert!(events.is_empty());
    }

    #[test]
    fn unparsable_date_block_is_skipped() {
        let html = r#"<div id="block-eventsglobal">
            <span class="ecl-date-block__day">soon</span>
            <abbr class="ecl-date-block__month">Feb</abbr>
            <span class="ecl-date-block__year">2026</span>
            <a href="/news-events/events/x_en">Some event</a>
        </div>"#;
        assert!(extract_events(html, &SourcesConfig::default()).is_empty());
    }

    #[test]
    fn see_all_link_is_not_an_event() {
        let html = r#"<div id="block-eventsglobal">
            <span class="ecl-date-block__day">17</span>
            <abbr class="ecl-date-block__month">Feb</abbr>
            <span class="ecl-date-block__year">2026</span>
            <a href="/news-events/events_en">See all our events</a>
        </div>"#;
        assert!(extract_events(html, &SourcesConfig::default()).is_empty());
    }

    #[test]
    fn missing_month_leaves_no_record_rather_than_failing() {
        let html = r#"<div id="block-eventsglobal">
            <span class="ecl-date-block__day">17</span>
            <span class="ecl-date-block__year">2026</span>
            <a href="/news-events/events/x_en">Some event</a>
        </div>"#;
        assert!(extract_events(html, &SourcesConfig::default()).is_empty());
    }
}
