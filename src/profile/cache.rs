//! Local key-value cache used to remember profile data across sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[async_trait]
pub trait KeyValueCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
    async fn remove(&self, key: &str) -> Result<(), CacheError>;
}

/// Process-local cache, forgotten on exit
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.entries.write().await.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// Cache persisted as a JSON object in a single file.
///
/// The whole map is read lazily on first access and rewritten on every change.
#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    entries: RwLock<Option<HashMap<String, String>>>,
}

impl FileCache {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            entries: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<HashMap<String, String>, CacheError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(HashMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply `change` to a copy of the map and keep it only once it is on disk.
    /// `change` returns whether anything was modified.
    async fn update<F>(&self, change: F) -> Result<(), CacheError>
    where
        F: FnOnce(&mut HashMap<String, String>) -> bool + Send,
    {
        let mut guard = self.entries.write().await;
        let current = match guard.take() {
            Some(entries) => entries,
            None => self.load().await?,
        };

        let mut updated = current.clone();
        if !change(&mut updated) {
            *guard = Some(current);
            return Ok(());
        }

        match self.persist(&updated).await {
            Ok(()) => {
                *guard = Some(updated);
                Ok(())
            }
            Err(e) => {
                *guard = Some(current);
                Err(e)
            }
        }
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueCache for FileCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut guard = self.entries.write().await;
        if guard.is_none() {
            *guard = Some(self.load().await?);
        }
        Ok(guard.as_ref().and_then(|entries| entries.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.update(|entries| entries.insert(key.to_string(), value.to_string()).as_deref() != Some(value))
            .await
    }

    async fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.update(|entries| entries.remove(key).is_some()).await
    }
}
