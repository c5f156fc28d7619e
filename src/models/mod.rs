// src/models/mod.rs

//! Domain models for the sitemap watcher.

mod check;
mod config;

// Re-export all public types
pub use check::{CheckOutcome, CheckStatus};
pub use config::{Config, FetchConfig, TelegramConfig};
