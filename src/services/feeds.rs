// src/services/feeds.rs

//! Registry of monitored sitemap URLs.
//!
//! The feed list lives in the key-value store as a JSON array under a
//! single key, matching the snapshot storage backend so one store handle
//! serves both.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::storage::KvStore;

const FEEDS_KEY: &str = "feeds";

/// Add/remove/list access to the monitored URL list.
#[derive(Clone)]
pub struct FeedRegistry {
    store: Arc<dyn KvStore>,
}

impl FeedRegistry {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// All monitored sitemap URLs, empty when none registered yet.
    pub async fn list(&self) -> Result<Vec<String>> {
        match self.store.get(FEEDS_KEY).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Register a URL. Adding an existing URL is a no-op, not an error,
    /// so re-adding refreshes nothing but also breaks nothing.
    pub async fn add(&self, url: &str) -> Result<bool> {
        let mut feeds = self.list().await?;
        if feeds.iter().any(|f| f == url) {
            return Ok(false);
        }
        feeds.push(url.to_string());
        self.save(&feeds).await?;
        Ok(true)
    }

    /// Remove a URL. Unknown URLs are an error so the caller can report
    /// the typo instead of silently succeeding.
    pub async fn remove(&self, url: &str) -> Result<()> {
        let feeds = self.list().await?;
        if !feeds.iter().any(|f| f == url) {
            return Err(AppError::feed(format!("not monitored: {url}")));
        }
        let remaining: Vec<String> = feeds.into_iter().filter(|f| f != url).collect();
        self.save(&remaining).await?;
        Ok(())
    }

    async fn save(&self, feeds: &[String]) -> Result<()> {
        let json = serde_json::to_string(feeds)?;
        self.store.put(FEEDS_KEY, &json).await
    }
}
