// src/storage/memory.rs

//! In-memory key-value store.
//!
//! Used by tests and available as a throwaway backend for dry runs.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::storage::KvStore;

/// Hash-map backed store. Cheap to clone the contents out for assertions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries, for test assertions.
    pub fn entries(&self) -> HashMap<String, String> {
        self.entries.lock().expect("store mutex poisoned").clone()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| AppError::store("memory store mutex poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::store("memory store mutex poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_put_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);

        store.put("k", "v1").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("v1".to_string()));

        store.put("k", "v2").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("v2".to_string()));
    }
}
