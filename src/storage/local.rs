// src/storage/local.rs

//! Local filesystem key-value store.
//!
//! One file per key under a root directory. Writes go through a temp file
//! and an atomic rename so a crash never leaves a half-written snapshot
//! behind. Missing files read as `None`.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::storage::KvStore;

/// Filesystem-backed store rooted at a directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a store rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// File path for a key. Keys are flat names (`host:slot`), never paths.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    async fn ensure_root(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root_dir).await?;
        Ok(())
    }
}

#[async_trait]
impl KvStore for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_root().await?;
        let path = self.path(key);

        // Append rather than with_extension: keys contain dots.
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(value.as_bytes()).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_and_read() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage
            .put("example.com:current", "<urlset/>")
            .await
            .unwrap();
        let data = storage.get("example.com:current").await.unwrap();
        assert_eq!(data, Some("<urlset/>".to_string()));
    }

    #[tokio::test]
    async fn test_read_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        assert!(storage.get("nope:current").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.put("example.com:lastUpdate", "2026-08-26").await.unwrap();
        storage.put("example.com:lastUpdate", "2026-08-27").await.unwrap();

        assert_eq!(
            storage.get("example.com:lastUpdate").await.unwrap(),
            Some("2026-08-27".to_string())
        );
    }

    #[tokio::test]
    async fn test_no_temp_files_left_behind() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.put("example.com:current", "data").await.unwrap();

        let names: Vec<String> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["example.com:current"]);
    }
}
