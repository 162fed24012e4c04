// src/pipeline/opportunities.rs

//! Funding-opportunity pipeline.
//!
//! One linear batch: fetch the feed, decode items, infer structured
//! fields, enrich missing deadlines from detail pages, rank, filter, and
//! replace the snapshot. Only the primary feed fetch is fatal.

use std::time::Duration;

use chrono::{NaiveDate, Utc};

use crate::error::Result;
use crate::infer::classify::{classify_beneficiary, classify_program};
use crate::infer::dates::{infer_deadline, iso, parse_pub_date};
use crate::models::{Config, Opportunity};
use crate::pipeline::rank;
use crate::services::enrich::{DeadlineEnricher, HttpPageFetcher};
use crate::services::{html, rss};
use crate::storage::SnapshotStorage;
use crate::utils::{http, is_http_url};

/// Fixed issuing jurisdiction for all opportunity records.
const COUNTRY: &str = "EU";

/// Title fallback when a feed item has none.
const UNTITLED: &str = "Untitled call";

/// Counters reported after an opportunities run.
#[derive(Debug, Default)]
pub struct OpportunitiesSummary {
    /// Items present in the feed
    pub fetched: usize,
    /// Records kept after the URL check
    pub kept: usize,
    /// Detail pages fetched by enrichment
    pub enrich_attempted: usize,
    /// Deadlines recovered by enrichment
    pub enrich_found: usize,
    /// Records in the written snapshot
    pub written: usize,
}

/// Run the opportunities pipeline end to end.
pub async fn run(config: &Config, storage: &dyn SnapshotStorage) -> Result<OpportunitiesSummary> {
    let client = http::create_client(&config.http)?;
    let today = Utc::now().date_naive();

    log::info!(
        "Fetching opportunities feed: {}",
        config.sources.opportunities_feed
    );
    let xml = http::fetch_text(&client, &config.sources.opportunities_feed).await?;

    let items = rss::parse_feed(&xml);
    let fetched = items.len();

    let mut records: Vec<Opportunity> = items
        .into_iter()
        .take(config.limits.max_feed_items)
        .filter_map(|item| build_record(&item, today))
        .collect();
    let kept = records.len();
    log::info!("Parsed {fetched} feed items, kept {kept} with usable URLs");

    let fetcher =
        HttpPageFetcher::new(client, Duration::from_secs(config.http.enrich_timeout_secs));
    let mut enricher = DeadlineEnricher::new(fetcher, config.limits.enrich_quota);
    enricher.enrich(&mut records, today).await;
    log::info!(
        "Enrichment tried {} pages, recovered {} deadlines",
        enricher.attempted(),
        enricher.found()
    );

    rank::sort_opportunities(&mut records, &iso(today));
    let records = rank::apply_recency_filter(
        records,
        today,
        config.limits.recency_days,
        config.limits.fallback_keep,
    );

    let summary = storage.write_opportunities(&records).await?;
    log::info!(
        "Saved {} opportunities to {}",
        summary.count,
        summary.snapshot_location
    );

    Ok(OpportunitiesSummary {
        fetched,
        kept,
        enrich_attempted: enricher.attempted(),
        enrich_found: enricher.found(),
        written: summary.count,
    })
}

/// Build a record from one feed item.
///
/// The link is preferred, the guid is the fallback; items with neither
/// usable are dropped.
fn build_record(item: &rss::FeedItem, today: NaiveDate) -> Option<Opportunity> {
    let mut url = item.link.trim().to_string();
    if !is_http_url(&url) {
        url = item.guid.trim().to_string();
    }
    if !is_http_url(&url) {
        return None;
    }

    let title = if item.title.is_empty() {
        UNTITLED.to_string()
    } else {
        item.title.clone()
    };
    let description = html::text_of(&item.description);
    let haystack = format!("{title} {description}");

    Some(Opportunity {
        program: classify_program(&haystack),
        beneficiary: classify_beneficiary(&description),
        country: COUNTRY.to_string(),
        published: parse_pub_date(&item.pub_date).map(iso).unwrap_or_default(),
        deadline: infer_deadline(&description, today).map(iso).unwrap_or_default(),
        title,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::rss::FeedItem;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn builds_fully_inferred_record() {
        let item = FeedItem {
            title: "New call open".into(),
            link: "https://example.com/call/1".into(),
            description:
                "<p>Applications close 15 April 2026 for SMEs under Horizon Europe</p>".into(),
            pub_date: "Tue, 10 Feb 2026 09:30:00 +0100".into(),
            guid: String::new(),
        };

        let record = build_record(&item, today()).unwrap();
        assert_eq!(record.program, "HORIZON EUROPE");
        assert_eq!(record.beneficiary, "SMEs");
        assert_eq!(record.deadline, "2026-04-15");
        assert_eq!(record.published, "2026-02-10");
        assert_eq!(record.country, "EU");
    }

    #[test]
    fn guid_is_the_url_fallback() {
        let item = FeedItem {
            title: "Call".into(),
            link: "not-a-url".into(),
            guid: "https://example.com/guid/9".into(),
            ..FeedItem::default()
        };
        let record = build_record(&item, today()).unwrap();
        assert_eq!(record.url, "https://example.com/guid/9");
    }

    #[test]
    fn item_without_url_is_dropped() {
        let item = FeedItem {
            title: "Complete but unlinked".into(),
            description: "Submission deadline 15 April 2026".into(),
            ..FeedItem::default()
        };
        assert!(build_record(&item, today()).is_none());
    }

    #[test]
    fn empty_title_falls_back() {
        let item = FeedItem {
            link: "https://example.com/call/2".into(),
            ..FeedItem::default()
        };
        let record = build_record(&item, today()).unwrap();
        assert_eq!(record.title, "Untitled call");
        assert_eq!(record.program, "EU (F&T Portal)");
        assert_eq!(record.deadline, "");
        assert_eq!(record.published, "");
    }
}
