// src/pipeline/events.rs

//! Event pipelines.
//!
//! Two ingestion strategies exist for the same responsibility: scraping
//! the homepage events block (`run`) and reading the events feed
//! (`run_rss`). Each produces its own record shape and replaces the
//! events snapshot.

use crate::error::{AppError, Result};
use crate::infer::dates::{infer_event_date, iso, parse_pub_date};
use crate::infer::location::infer_location;
use crate::models::{Config, RssEvent};
use crate::pipeline::rank::dedup_by_key;
use crate::services::{homepage, html, rss};
use crate::storage::SnapshotStorage;
use crate::utils::{http, is_http_url};

/// Counters reported after an events run.
#[derive(Debug, Default)]
pub struct EventsSummary {
    /// Records extracted from the source
    pub extracted: usize,
    /// Records in the written snapshot
    pub written: usize,
}

/// Run the homepage-scrape events pipeline.
pub async fn run(config: &Config, storage: &dyn SnapshotStorage) -> Result<EventsSummary> {
    let client = http::create_client(&config.http)?;

    log::info!("Fetching events page: {}", config.sources.events_page);
    let body = http::fetch_text(&client, &config.sources.events_page).await?;

    let events = homepage::extract_events(&body, &config.sources);
    let extracted = events.len();

    let mut events = dedup_by_key(events, |e| (e.title.clone(), e.date.clone()));
    events.sort_by(|a, b| a.date.cmp(&b.date));

    let summary = storage
        .write_events(&events, &config.sources.events_page)
        .await?;
    log::info!(
        "Saved {} events to {}",
        summary.count,
        summary.snapshot_location
    );

    Ok(EventsSummary {
        extracted,
        written: summary.count,
    })
}

/// Run the RSS-variant events pipeline.
pub async fn run_rss(config: &Config, storage: &dyn SnapshotStorage) -> Result<EventsSummary> {
    if config.sources.events_feed.trim().is_empty() {
        return Err(AppError::config("sources.events_feed is not set"));
    }

    let client = http::create_client(&config.http)?;

    log::info!("Fetching events feed: {}", config.sources.events_feed);
    let xml = http::fetch_text(&client, &config.sources.events_feed).await?;

    let items = rss::parse_feed(&xml);
    let extracted = items.len();

    let events: Vec<RssEvent> = items
        .into_iter()
        .take(config.limits.max_feed_items)
        .filter_map(build_rss_event)
        .collect();

    let mut events = dedup_by_key(events, |e| (e.title.clone(), e.date.clone()));
    events.sort_by(|a, b| a.date.cmp(&b.date));

    let summary = storage
        .write_rss_events(&events, &config.sources.events_feed)
        .await?;
    log::info!(
        "Saved {} events to {}",
        summary.count,
        summary.snapshot_location
    );

    Ok(EventsSummary {
        extracted,
        written: summary.count,
    })
}

/// Build an RSS event record; items without a usable URL are dropped.
fn build_rss_event(item: rss::FeedItem) -> Option<RssEvent> {
    let mut url = item.link.trim().to_string();
    if !is_http_url(&url) {
        url = item.guid.trim().to_string();
    }
    if !is_http_url(&url) {
        return None;
    }

    let description = html::text_of(&item.description);
    let text = format!("{} {}", item.title, description);
    let (city, country) = infer_location(&text);

    Some(RssEvent {
        date: infer_event_date(&text, parse_pub_date(&item.pub_date))
            .map(iso)
            .unwrap_or_default(),
        title: item.title,
        country,
        city,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::rss::FeedItem;

    #[test]
    fn builds_online_event_from_text() {
        let item = FeedItem {
            title: "Clean transport webinar".into(),
            link: "https://example.com/events/1".into(),
            description: "<p>Held online on 05/03/2026</p>".into(),
            ..FeedItem::default()
        };
        let event = build_rss_event(item).unwrap();
        assert_eq!(event.date, "2026-03-05");
        assert_eq!(event.city, "Online");
        assert_eq!(event.country, "EU");
    }

    #[test]
    fn falls_back_to_publication_date() {
        let item = FeedItem {
            title: "Annual forum".into(),
            link: "https://example.com/events/2".into(),
            description: "in Brussels, Belgium".into(),
            pub_date: "Mon, 02 Mar 2026 08:00:00 +0100".into(),
            ..FeedItem::default()
        };
        let event = build_rss_event(item).unwrap();
        assert_eq!(event.date, "2026-03-02");
        assert_eq!(event.city, "Brussels");
        assert_eq!(event.country, "Belgium");
    }

    #[test]
    fn event_without_url_is_dropped() {
        let item = FeedItem {
            title: "Unlinked".into(),
            description: "2026-03-05".into(),
            ..FeedItem::default()
        };
        assert!(build_rss_event(item).is_none());
    }
}
