//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Feed and page sources
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Run bounds and quotas
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        if self.http.enrich_timeout_secs == 0 {
            return Err(AppError::config("http.enrich_timeout_secs must be > 0"));
        }
        if self.sources.opportunities_feed.trim().is_empty() {
            return Err(AppError::config("sources.opportunities_feed is empty"));
        }
        if self.sources.events_page.trim().is_empty() {
            return Err(AppError::config("sources.events_page is empty"));
        }
        if url::Url::parse(&self.sources.site_base).is_err() {
            return Err(AppError::config("sources.site_base is not a valid URL"));
        }
        if self.limits.max_feed_items == 0 {
            return Err(AppError::config("limits.max_feed_items must be > 0"));
        }
        if self.limits.fallback_keep == 0 {
            return Err(AppError::config("limits.fallback_keep must be > 0"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Accept-Language header (some agency pages localize by it)
    #[serde(default = "defaults::accept_language")]
    pub accept_language: String,

    /// Per-request timeout for detail-page enrichment fetches, in seconds
    #[serde(default = "defaults::enrich_timeout")]
    pub enrich_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            accept_language: defaults::accept_language(),
            enrich_timeout_secs: defaults::enrich_timeout(),
        }
    }
}

/// Feed and page source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Funding-opportunity RSS feed URL
    #[serde(default = "defaults::opportunities_feed")]
    pub opportunities_feed: String,

    /// Agency homepage with the events block
    #[serde(default = "defaults::events_page")]
    pub events_page: String,

    /// Events RSS feed URL (alternative to the homepage scrape; empty = unset)
    #[serde(default)]
    pub events_feed: String,

    /// Attribute that anchors the events block inside the homepage HTML
    #[serde(default = "defaults::events_anchor")]
    pub events_anchor: String,

    /// Base URL for resolving relative event links
    #[serde(default = "defaults::site_base")]
    pub site_base: String,

    /// Source label written into homepage-scraped event records
    #[serde(default = "defaults::events_source_label")]
    pub events_source_label: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            opportunities_feed: defaults::opportunities_feed(),
            events_page: defaults::events_page(),
            events_feed: String::new(),
            events_anchor: defaults::events_anchor(),
            site_base: defaults::site_base(),
            events_source_label: defaults::events_source_label(),
        }
    }
}

/// Run bounds and quotas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum feed items taken per run
    #[serde(default = "defaults::max_feed_items")]
    pub max_feed_items: usize,

    /// Hard cap on detail-page enrichment fetches per run
    #[serde(default = "defaults::enrich_quota")]
    pub enrich_quota: usize,

    /// Trailing window for the publication recency filter, in days
    #[serde(default = "defaults::recency_days")]
    pub recency_days: i64,

    /// Prefix kept when the recency filter would empty the snapshot
    #[serde(default = "defaults::fallback_keep")]
    pub fallback_keep: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_feed_items: defaults::max_feed_items(),
            enrich_quota: defaults::enrich_quota(),
            recency_days: defaults::recency_days(),
            fallback_keep: defaults::fallback_keep(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120 Safari/537.36"
            .into()
    }
    pub fn accept_language() -> String {
        "en-GB,en;q=0.9".into()
    }
    pub fn enrich_timeout() -> u64 {
        12
    }

    // Source defaults
    pub fn opportunities_feed() -> String {
        "https://ec.europa.eu/newsroom/cinea/feed?item_type_id=2512&lang=en&orderby=item_date"
            .into()
    }
    pub fn events_page() -> String {
        "https://cinea.ec.europa.eu/index_en".into()
    }
    pub fn events_anchor() -> String {
        r#"id="block-eventsglobal""#.into()
    }
    pub fn site_base() -> String {
        "https://cinea.ec.europa.eu".into()
    }
    pub fn events_source_label() -> String {
        "CINEA homepage events".into()
    }

    // Limit defaults
    pub fn max_feed_items() -> usize {
        60
    }
    pub fn enrich_quota() -> usize {
        20
    }
    pub fn recency_days() -> i64 {
        365
    }
    pub fn fallback_keep() -> usize {
        100
    }
}
