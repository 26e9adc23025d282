//! Local filesystem snapshot storage.
//!
//! The snapshot is a single JSON object mapping each course key to a
//! sorted list of instructor names:
//!
//! ```text
//! {
//!   "CS101": ["Alice", "Bob"],
//!   "CS102": ["Carol"]
//! }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::Snapshot;
use crate::storage::SnapshotStore;

/// Snapshot store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct LocalSnapshotStore {
    path: PathBuf,
}

impl LocalSnapshotStore {
    /// Create a store reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Read bytes, returning None if the file doesn't exist.
    async fn read_bytes(&self) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[async_trait]
impl SnapshotStore for LocalSnapshotStore {
    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(snapshot)?;
        self.write_bytes(&bytes).await?;
        log::info!(
            "Snapshot saved to {} ({} courses)",
            self.path.display(),
            snapshot.course_count()
        );
        Ok(())
    }

    async fn load(&self) -> Result<Option<Snapshot>> {
        match self.read_bytes().await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => {
                log::debug!("No snapshot found at {}", self.path.display());
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Snapshot {
        [
            ("CS101", vec!["Bob", "Alice"]),
            ("CS102", vec!["Carol"]),
            ("ART100", vec![]),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn test_load_missing_is_none() {
        let tmp = TempDir::new().unwrap();
        let store = LocalSnapshotStore::new(tmp.path().join("teachers_list.json"));

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let store = LocalSnapshotStore::new(tmp.path().join("state/teachers_list.json"));

        store.save(&sample()).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();

        assert_eq!(loaded, sample());
        assert!(!store.path().with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous() {
        let tmp = TempDir::new().unwrap();
        let store = LocalSnapshotStore::new(tmp.path().join("teachers_list.json"));

        store.save(&sample()).await.unwrap();
        let next: Snapshot = [("CS103", vec!["Dave"])].into_iter().collect();
        store.save(&next).await.unwrap();

        assert_eq!(store.load().await.unwrap().unwrap(), next);
    }

    #[tokio::test]
    async fn test_loads_legacy_unsorted_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("teachers_list.json");
        std::fs::write(&path, r#"{"CS101": ["Bob", "Alice", "Bob"]}"#).unwrap();

        let loaded = LocalSnapshotStore::new(&path).load().await.unwrap().unwrap();
        let expected: Snapshot = [("CS101", vec!["Alice", "Bob"])].into_iter().collect();
        assert_eq!(loaded, expected);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("teachers_list.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let result = LocalSnapshotStore::new(&path).load().await;
        assert!(matches!(result, Err(AppError::Json(_))));
    }
}
