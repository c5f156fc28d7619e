// src/services/fetcher.rs

//! Sitemap download service.
//!
//! One GET per check, no retries. The client identifies itself with a
//! browser User-Agent because some sites refuse sitemap requests from
//! unknown clients.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::FetchConfig;

/// Trait for fetching sitemap text by URL.
#[async_trait]
pub trait SitemapFetcher: Send + Sync {
    /// Fetch the body text of a sitemap URL.
    ///
    /// Non-2xx responses and transport failures both surface as errors.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// reqwest-backed fetcher.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher from the configured identity and timeout.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SitemapFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(url, status.as_u16()));
        }
        Ok(response.text().await?)
    }
}
