// src/lib.rs

//! sitewatch library
//!
//! Watches XML sitemaps for newly published URLs. Keeps a two-slot snapshot
//! (`current`/`latest`) per hostname, refetches at most once per UTC day, and
//! reports the set difference as the list of new URLs.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
