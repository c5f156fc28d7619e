// src/pipeline/mod.rs

//! The snapshot/diff engine.
//!
//! - `extract`: pull `<loc>` values out of raw sitemap text
//! - `diff`: ordered set difference between two sitemap payloads
//! - `check`: refresh gate, fetch, and two-slot snapshot rotation

pub mod check;
pub mod diff;
pub mod extract;

pub use check::{Clock, SiteChecker, UtcClock};
pub use diff::diff_sitemaps;
pub use extract::extract_urls;
