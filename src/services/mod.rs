//! Service layer for the crawler application.
//!
//! This module contains the ingestion building blocks:
//! - Feed parsing (`rss`)
//! - HTML fragment decoding (`html`)
//! - Homepage events scraping (`homepage`)
//! - Deadline enrichment (`enrich`)

pub mod enrich;
pub mod homepage;
pub mod html;
pub mod rss;

pub use enrich::{DeadlineEnricher, HttpPageFetcher, PageFetcher};
pub use homepage::extract_events;
pub use rss::{FeedItem, parse_feed};
