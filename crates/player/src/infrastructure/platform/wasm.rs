//! WASM platform implementations
//!
//! Browser `localStorage` backs the storage port.

use crate::ports::outbound::StorageProvider;

/// Browser localStorage provider
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable; dropping write to {}", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::error!("Failed to write {} to localStorage", key);
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
