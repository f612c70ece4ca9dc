//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::infrastructure::error::StorageError;
use crate::ports::outbound::StorageProvider;

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/hearthsheet/storage.json
/// - macOS: ~/Library/Application Support/io.hearthsheet.player/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\hearthsheet\player\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a storage provider at the platform config directory
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("io", "hearthsheet", "player") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("hearthsheet_storage.json")
        };
        Self::at_path(storage_path)
    }

    /// Create a storage provider backed by an explicit file
    ///
    /// Loads existing data from the file if it exists. An unreadable or
    /// corrupt file starts an empty cache.
    pub fn at_path(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = match read_cache(&storage_path) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("Failed to load storage file: {}", e);
                HashMap::new()
            }
        };

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Write the cache to disk
    pub fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = {
            let cache = self.cache.read().map_err(|_| StorageError::LockPoisoned)?;
            serde_json::to_string_pretty(&*cache)?
        };
        fs::write(&self.storage_path, data)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.flush() {
            tracing::error!("Failed to write storage file: {}", e);
        }
    }
}

fn read_cache(path: &Path) -> Result<HashMap<String, String>, StorageError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                let removed = guard.remove(key).is_some();
                drop(guard);
                if removed {
                    self.persist();
                }
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("storage.json");

        let storage = DesktopStorageProvider::at_path(&path);
        storage.save("hs:character:1:identity", r#"{"name":"Ash"}"#);
        storage.save("hs:character:1:experience", "3");
        storage.remove("hs:character:1:experience");

        let reopened = DesktopStorageProvider::at_path(&path);
        assert_eq!(
            reopened.load("hs:character:1:identity").as_deref(),
            Some(r#"{"name":"Ash"}"#)
        );
        assert_eq!(reopened.load("hs:character:1:experience"), None);
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").expect("write");

        let storage = DesktopStorageProvider::at_path(&path);
        assert_eq!(storage.load("anything"), None);

        storage.save("k", "v");
        let reopened = DesktopStorageProvider::at_path(&path);
        assert_eq!(reopened.load("k").as_deref(), Some("v"));
    }
}
