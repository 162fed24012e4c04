//! Pipeline entry points for crawler operations.
//!
//! - `opportunities::run`: Fetch, infer, enrich, rank, and persist calls
//! - `events::run`: Scrape homepage events and persist them
//! - `events::run_rss`: Ingest the events feed instead of scraping

pub mod events;
pub mod opportunities;
pub mod rank;
