//! Local filesystem storage implementation.
//!
//! Writes are atomic (write to temp, then rename) so a crashed run leaves
//! the previous snapshot in place rather than a truncated file.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::{Event, Opportunity, RssEvent};
use crate::storage::{EventsMeta, OpportunitiesMeta, SnapshotStorage, WriteSummary};

const OPPORTUNITIES_FILE: &str = "opportunities.json";
const OPPORTUNITIES_META_FILE: &str = "meta.json";
const EVENTS_FILE: &str = "events.json";
const EVENTS_META_FILE: &str = "meta_events.json";

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Write JSON data.
    async fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(key, &bytes).await
    }

    /// Read JSON data, returning None if the file doesn't exist.
    pub async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match tokio::fs::read(self.path(key)).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    fn now_rfc3339() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn summary(&self, key: &str, count: usize) -> WriteSummary {
        WriteSummary {
            count,
            snapshot_location: self.path(key).display().to_string(),
        }
    }
}

#[async_trait]
impl SnapshotStorage for LocalStorage {
    async fn write_opportunities(&self, records: &[Opportunity]) -> Result<WriteSummary> {
        self.write_json(OPPORTUNITIES_FILE, records).await?;

        let meta = OpportunitiesMeta {
            last_updated: Self::now_rfc3339(),
            opportunities_count: records.len(),
        };
        self.write_json(OPPORTUNITIES_META_FILE, &meta).await?;

        Ok(self.summary(OPPORTUNITIES_FILE, records.len()))
    }

    async fn write_events(&self, events: &[Event], source: &str) -> Result<WriteSummary> {
        self.write_json(EVENTS_FILE, events).await?;

        let meta = EventsMeta {
            last_updated: Self::now_rfc3339(),
            count: events.len(),
            source: source.to_string(),
        };
        self.write_json(EVENTS_META_FILE, &meta).await?;

        Ok(self.summary(EVENTS_FILE, events.len()))
    }

    async fn write_rss_events(&self, events: &[RssEvent], source: &str) -> Result<WriteSummary> {
        self.write_json(EVENTS_FILE, events).await?;

        let meta = EventsMeta {
            last_updated: Self::now_rfc3339(),
            count: events.len(),
            source: source.to_string(),
        };
        self.write_json(EVENTS_META_FILE, &meta).await?;

        Ok(self.summary(EVENTS_FILE, events.len()))
    }
}
