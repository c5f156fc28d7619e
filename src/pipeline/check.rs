// src/pipeline/check.rs

//! Refresh decision logic and snapshot rotation.
//!
//! Per hostname, one fetch per UTC calendar day at most. A same-day
//! re-check answers from the stored snapshot pair without touching the
//! network or the store's write path. Failed fetches mutate nothing, so
//! the next scheduled run retries from the same state.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::models::{CheckOutcome, CheckStatus};
use crate::pipeline::diff::diff_sitemaps;
use crate::services::fetcher::SitemapFetcher;
use crate::storage::SnapshotStore;
use crate::utils::host_key;

/// Source of today's date, `YYYY-MM-DD` in UTC.
///
/// Injected so tests can pin the calendar; the once-per-day gate is the
/// only consumer.
pub trait Clock: Send + Sync {
    fn today(&self) -> String;
}

/// Real UTC clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn today(&self) -> String {
        Utc::now().format("%Y-%m-%d").to_string()
    }
}

/// The snapshot/diff engine for monitored sites.
///
/// Owns the refresh gate and the two-slot rotation. Collaborators are
/// injected: the key-value store (via [`SnapshotStore`]), the fetcher,
/// and the clock.
pub struct SiteChecker {
    snapshots: SnapshotStore,
    fetcher: Arc<dyn SitemapFetcher>,
    clock: Arc<dyn Clock>,
    // Single writer per hostname: two concurrent checks of the same host
    // would otherwise race the read-rotate-write sequence and lose a
    // snapshot generation. Different hosts proceed independently.
    host_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SiteChecker {
    pub fn new(snapshots: SnapshotStore, fetcher: Arc<dyn SitemapFetcher>) -> Self {
        Self::with_clock(snapshots, fetcher, Arc::new(UtcClock))
    }

    pub fn with_clock(
        snapshots: SnapshotStore,
        fetcher: Arc<dyn SitemapFetcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            snapshots,
            fetcher,
            clock,
            host_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn lock_for_host(&self, host: &str) -> Arc<Mutex<()>> {
        let mut locks = self.host_locks.lock().await;
        Arc::clone(locks.entry(host.to_string()).or_default())
    }

    /// Check one monitored site: apply the refresh gate, fetch if due,
    /// rotate the snapshot slots, and return the new-URL list.
    pub async fn check(&self, url: &str) -> Result<CheckOutcome> {
        let host = host_key(url)?;
        let guard = self.lock_for_host(&host).await;
        let _held = guard.lock().await;

        let today = self.clock.today();
        let last_checked = self.snapshots.last_checked(&host).await?;
        log::debug!(
            "{host}: today={today}, last checked={}",
            last_checked.as_deref().unwrap_or("never")
        );

        if last_checked.as_deref() == Some(today.as_str()) {
            // Already fetched today: answer from the stored pair, no writes.
            let new_urls = self.stored_diff(&host).await?;
            log::info!(
                "{host}: already fetched today, {} new URL(s) from stored snapshots",
                new_urls.len()
            );
            return Ok(CheckOutcome {
                url: url.to_string(),
                host,
                new_urls,
                status: CheckStatus::SkippedToday,
            });
        }

        // Fetch is due. A failure here returns before any write.
        let downloaded = self.fetcher.fetch(url).await?;
        let previous = self.snapshots.current(&host).await?;

        let (new_urls, status) = match &previous {
            Some(current) => (diff_sitemaps(&downloaded, current), CheckStatus::Fetched),
            None => (Vec::new(), CheckStatus::FirstFetch),
        };

        self.snapshots
            .commit_fetch(&host, &downloaded, previous.as_deref(), &today)
            .await?;

        log::info!("{host}: fetched, {} new URL(s)", new_urls.len());
        Ok(CheckOutcome {
            url: url.to_string(),
            host,
            new_urls,
            status,
        })
    }

    /// Read-only comparison of the two stored snapshots for a site.
    ///
    /// Never fetches and never writes, regardless of the date marker.
    /// Empty when either slot is absent.
    pub async fn compare_stored(&self, url: &str) -> Result<Vec<String>> {
        let host = host_key(url)?;
        self.stored_diff(&host).await
    }

    async fn stored_diff(&self, host: &str) -> Result<Vec<String>> {
        let current = self.snapshots.current(host).await?;
        let latest = self.snapshots.latest(host).await?;

        match (current, latest) {
            (Some(current), Some(latest)) => Ok(diff_sitemaps(&current, &latest)),
            _ => Ok(Vec::new()),
        }
    }
}
