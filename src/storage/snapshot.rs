// src/storage/snapshot.rs

//! Snapshot slot adapter over the key-value store.
//!
//! Owns the per-hostname key scheme and the rotation invariant: `latest`
//! only ever receives what was `current` at the moment of rotation, never
//! freshly downloaded content.

use std::sync::Arc;

use crate::error::Result;
use crate::storage::KvStore;

/// Read/write access to the two snapshot slots and the last-checked
/// marker for monitored hostnames.
#[derive(Clone)]
pub struct SnapshotStore {
    store: Arc<dyn KvStore>,
}

impl SnapshotStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    fn current_key(host: &str) -> String {
        format!("{host}:current")
    }

    fn latest_key(host: &str) -> String {
        format!("{host}:latest")
    }

    fn last_update_key(host: &str) -> String {
        format!("{host}:lastUpdate")
    }

    /// Newest fetched sitemap text for the host, if any fetch has occurred.
    pub async fn current(&self, host: &str) -> Result<Option<String>> {
        self.store.get(&Self::current_key(host)).await
    }

    /// Previous `current`, absent until a second successful fetch.
    pub async fn latest(&self, host: &str) -> Result<Option<String>> {
        self.store.get(&Self::latest_key(host)).await
    }

    /// `YYYY-MM-DD` of the last successful fetch, if any.
    pub async fn last_checked(&self, host: &str) -> Result<Option<String>> {
        self.store.get(&Self::last_update_key(host)).await
    }

    /// Commit a successful fetch: rotate the old `current` (when present)
    /// into `latest`, store the downloaded content, then mark the date.
    ///
    /// Content is written before the marker. A crash in between leaves the
    /// marker stale, which only costs one redundant fetch on the next run.
    pub async fn commit_fetch(
        &self,
        host: &str,
        downloaded: &str,
        previous_current: Option<&str>,
        today: &str,
    ) -> Result<()> {
        if let Some(previous) = previous_current {
            self.store.put(&Self::latest_key(host), previous).await?;
        }
        self.store.put(&Self::current_key(host), downloaded).await?;
        self.store.put(&Self::last_update_key(host), today).await?;
        Ok(())
    }
}
