//! Key/value stores for persisted settings.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{debug, info};

use crate::error::ConfigError;

/// Asynchronous string-keyed JSON storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, ConfigError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), ConfigError>;

    async fn remove(&self, key: &str) -> Result<(), ConfigError>;
}

/// Store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, ConfigError> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), ConfigError> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), ConfigError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk.
///
/// The file is read on every access and rewritten on every change, so two
/// processes sharing it see each other's writes.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Map<String, Value>, ConfigError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Storage file {} does not exist yet", self.path.display());
                return Ok(Map::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(ConfigError::Storage(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
        }
    }

    async fn write_all(&self, map: Map<String, Value>) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
                info!("Created storage directory: {}", parent.display());
            }
        }

        let content = serde_json::to_string_pretty(&Value::Object(map))?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, ConfigError> {
        let mut map = self.read_all().await?;
        Ok(map.remove(key))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), ConfigError> {
        let mut map = self.read_all().await?;
        map.insert(key.to_string(), value);
        self.write_all(map).await
    }

    async fn remove(&self, key: &str) -> Result<(), ConfigError> {
        let mut map = self.read_all().await?;
        if map.remove(key).is_some() {
            self.write_all(map).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("k", json!({"a": 1})).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!({"a": 1})));
        assert_eq!(store.len(), 1);

        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("storage.json"));
        assert_eq!(store.get("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let store = JsonFileStore::new(&path);

        store.set("tldrSettings", json!({"style": "bullet"})).await.unwrap();
        assert!(path.exists());

        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.get("tldrSettings").await.unwrap(),
            Some(json!({"style": "bullet"}))
        );
    }

    #[tokio::test]
    async fn test_file_store_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("storage.json"));

        store.set("one", json!(1)).await.unwrap();
        store.set("two", json!(2)).await.unwrap();
        store.remove("one").await.unwrap();

        assert_eq!(store.get("one").await.unwrap(), None);
        assert_eq!(store.get("two").await.unwrap(), Some(json!(2)));
    }

    #[tokio::test]
    async fn test_file_store_rejects_non_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let store = JsonFileStore::new(&path);
        let result = store.get("key").await;
        assert!(matches!(result, Err(ConfigError::Storage(_))));
    }

    #[tokio::test]
    async fn test_file_store_corrupt_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("key").await, Err(ConfigError::Json(_))));
    }
}
