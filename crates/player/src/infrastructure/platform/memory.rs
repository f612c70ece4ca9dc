//! In-memory platform implementations
//!
//! Used by tests and by hosts without durable storage.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ports::outbound::{StorageProvider, TimeProvider};

/// Storage that lives as long as its clones.
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    entries: Arc<RwLock<HashMap<String, String>>>,
    writes: Arc<AtomicU64>,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls so far.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    /// Snapshot of all keys.
    pub fn keys(&self) -> Vec<String> {
        match self.entries.read() {
            Ok(guard) => {
                let mut keys: Vec<String> = guard.keys().cloned().collect();
                keys.sort();
                keys
            }
            Err(_) => Vec::new(),
        }
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.entries.write() {
            guard.insert(key.to_string(), value.to_string());
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.entries.write() {
            guard.remove(key);
        }
    }
}

/// Wall-clock time provider
#[derive(Clone, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Manually advanced clock
#[derive(Clone, Default)]
pub struct ManualTimeProvider {
    millis: Arc<AtomicU64>,
}

impl ManualTimeProvider {
    pub fn starting_at(millis: u64) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(millis)),
        }
    }

    pub fn advance(&self, millis: u64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl TimeProvider for ManualTimeProvider {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}
