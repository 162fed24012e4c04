//! Deadline enrichment worker.
//!
//! Opportunities whose feed text yielded no deadline get one more chance:
//! their own detail page is fetched and every date-like pattern in the raw
//! body is harvested. Fetches run sequentially under a hard per-run quota;
//! a failed page never aborts the run.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::infer::dates::{earliest_on_or_after, harvest_page_dates, iso};
use crate::models::Opportunity;
use crate::utils::http::fetch_text_with_timeout;
use crate::utils::is_http_url;

/// Fetches a record's own detail page. Seam for tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

/// Production fetcher with a bounded per-request timeout.
pub struct HttpPageFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpPageFetcher {
    pub fn new(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        fetch_text_with_timeout(&self.client, url, self.timeout).await
    }
}

/// Sequential enrichment worker owning the run's attempt counters.
pub struct DeadlineEnricher<F: PageFetcher> {
    fetcher: F,
    quota: usize,
    attempted: usize,
    found: usize,
}

impl<F: PageFetcher> DeadlineEnricher<F> {
    pub fn new(fetcher: F, quota: usize) -> Self {
        Self {
            fetcher,
            quota,
            attempted: 0,
            found: 0,
        }
    }

    /// Fill missing deadlines in place, spending at most the quota.
    ///
    /// The quota counts fetch attempts, not successes: once consumed,
    /// remaining unresolved records stay unresolved for this run.
    pub async fn enrich(&mut self, records: &mut [Opportunity], today: NaiveDate) {
        for record in records.iter_mut() {
            if self.attempted >= self.quota {
                break;
            }
            if !record.deadline.is_empty() || !is_http_url(&record.url) {
                continue;
            }

            self.attempted += 1;
            let body = match self.fetcher.fetch_page(&record.url).await {
                Ok(body) => body,
                Err(error) => {
                    log::warn!("Enrichment fetch failed for {}: {}", record.url, error);
                    continue;
                }
            };

            let dates = harvest_page_dates(&body);
            if let Some(date) = earliest_on_or_after(&dates, today) {
                record.deadline = iso(date);
                self.found += 1;
            }
        }
    }

    /// Detail-page fetches attempted this run.
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Deadlines recovered this run.
    pub fn found(&self) -> usize {
        self.found
    }
}
