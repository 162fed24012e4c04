//! Storage abstractions for snapshot persistence.
//!
//! Each pipeline run fully replaces its snapshot files:
//! - `opportunities.json` + `meta.json`
//! - `events.json` + `meta_events.json`
//!
//! Metadata is written after the collection it describes and always
//! carries the persisted count, never a pre-filter count.

pub mod local;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Event, Opportunity, RssEvent};

/// Metadata for the opportunities snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunitiesMeta {
    /// ISO 8601 timestamp of the run
    pub last_updated: String,
    /// Persisted record count
    pub opportunities_count: usize,
}

/// Metadata for the events snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsMeta {
    /// ISO 8601 timestamp of the run
    pub last_updated: String,
    /// Persisted record count
    pub count: usize,
    /// Source URL the events were read from
    pub source: String,
}

/// Outcome of a snapshot write, for logging.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    pub count: usize,
    pub snapshot_location: String,
}

/// Trait for snapshot storage backends.
#[async_trait]
pub trait SnapshotStorage: Send + Sync {
    /// Replace the opportunities snapshot and its metadata.
    async fn write_opportunities(&self, records: &[Opportunity]) -> Result<WriteSummary>;

    /// Replace the events snapshot and its metadata (homepage variant).
    async fn write_events(&self, events: &[Event], source: &str) -> Result<WriteSummary>;

    /// Replace the events snapshot and its metadata (RSS variant).
    async fn write_rss_events(&self, events: &[RssEvent], source: &str) -> Result<WriteSummary>;
}

// Re-export for convenience
pub use local::LocalStorage;
