// src/storage/mod.rs

//! Key-value storage abstractions for snapshot persistence.
//!
//! The engine never touches a backend directly; it talks to the `KvStore`
//! trait so a filesystem store, an in-memory fake, or a remote KV service
//! can be swapped in at construction time.
//!
//! ## Keys used per monitored hostname
//!
//! ```text
//! {host}:current      # newest successfully fetched sitemap text
//! {host}:latest       # previous current, promoted at rotation
//! {host}:lastUpdate   # YYYY-MM-DD (UTC) of the last successful fetch
//! feeds               # JSON array of monitored sitemap URLs
//! ```

pub mod local;
pub mod memory;
pub mod snapshot;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStorage;
pub use memory::MemoryStore;
pub use snapshot::SnapshotStore;

/// Trait for key-value storage backends.
///
/// No multi-key transaction guarantee is assumed; callers order their
/// writes so a crash between two puts is recoverable.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read the value for a key, `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the value for a key, overwriting any previous value.
    async fn put(&self, key: &str, value: &str) -> Result<()>;
}
