use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};

/// Small persistent string map, the equivalent of device key-value storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Store kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|e| Error::storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|e| Error::storage(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|e| Error::storage(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Store persisted as a JSON object in a single file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/citizen-report/state.json`
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("citizen-report").join("state.json"))
            .ok_or_else(|| Error::storage("could not determine the user data directory"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                Error::storage(format!("corrupt state file {}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(Error::storage(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::storage(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, content).await.map_err(|e| {
            Error::storage(format!("failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.save(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let store = FileStore::new(&path);
        assert_eq!(store.get("isLoggedIn").await.unwrap(), None);
        store.set("isLoggedIn", "true").await.unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("isLoggedIn").await.unwrap().as_deref(), Some("true"));

        reopened.remove("isLoggedIn").await.unwrap();
        assert_eq!(store.get("isLoggedIn").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unwritable_parent_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "a file, not a directory").unwrap();

        let store = FileStore::new(blocker.join("state.json"));
        let err = store.save(&BTreeMap::new()).await.unwrap_err();
        assert!(matches!(err, Error::Storage(msg) if msg.contains("failed to create")));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileStore::new(&path).get("isLoggedIn").await.unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::default();
        store.set("a", "1").await.unwrap();
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));
        store.remove("a").await.unwrap();
        assert!(store.get("a").await.unwrap().is_none());
    }
}
