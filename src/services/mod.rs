// src/services/mod.rs

//! Collaborator services around the snapshot/diff engine.
//!
//! - `fetcher`: HTTP download of sitemap documents
//! - `feeds`: registry of monitored sitemap URLs
//! - `telegram`: notification channel
//! - `run`: scheduled and on-demand passes over the feed list

pub mod feeds;
pub mod fetcher;
pub mod run;
pub mod telegram;

pub use feeds::FeedRegistry;
pub use fetcher::{HttpFetcher, SitemapFetcher};
pub use run::{RunReport, add_feed, check_all, summarize_all};
pub use telegram::TelegramNotifier;
