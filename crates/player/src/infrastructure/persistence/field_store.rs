//! Typed JSON reads and writes over the key-value storage port.
//!
//! Reads never fail: a missing key, unparsable JSON, a schema mismatch or a
//! rejected value all fall back to the caller's default.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::migrations::FieldMigration;
use crate::ports::outbound::StorageProvider;

#[derive(Clone)]
pub struct FieldStore<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> FieldStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        self.read_validated(key, fallback, |_| true)
    }

    /// Like [`read`](Self::read), but also rejects parsed values failing `validator`.
    pub fn read_validated<T, F>(&self, key: &str, fallback: T, validator: F) -> T
    where
        T: DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let Some(raw) = self.load_json(key) else {
            return fallback;
        };
        match serde_json::from_value::<T>(raw) {
            Ok(value) if validator(&value) => value,
            Ok(_) => {
                tracing::debug!(key, "Stored value rejected by validator; using default");
                fallback
            }
            Err(e) => {
                tracing::debug!(key, error = %e, "Stored value has wrong shape; using default");
                fallback
            }
        }
    }

    /// Reads a field whose persisted shape may predate the current one.
    ///
    /// On a shape mismatch the migrations are tried in order against the raw
    /// JSON; the first output that parses wins.
    pub fn read_migrated<T: DeserializeOwned>(
        &self,
        key: &str,
        fallback: T,
        migrations: &[FieldMigration],
    ) -> T {
        let Some(raw) = self.load_json(key) else {
            return fallback;
        };
        if let Ok(value) = serde_json::from_value::<T>(raw.clone()) {
            return value;
        }
        for migration in migrations {
            let Some(upgraded) = (migration.apply)(raw.clone()) else {
                continue;
            };
            if let Ok(value) = serde_json::from_value::<T>(upgraded) {
                tracing::debug!(key, migration = migration.name, "Migrated stored value");
                return value;
            }
        }
        tracing::debug!(key, "No migration matched stored value; using default");
        fallback
    }

    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.storage.save(key, &json),
            Err(e) => tracing::error!(key, error = %e, "Failed to encode value for storage"),
        }
    }

    pub fn remove(&self, key: &str) {
        self.storage.remove(key);
    }

    fn load_json(&self, key: &str) -> Option<Value> {
        let raw = self.storage.load(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(key, error = %e, "Stored value is not valid JSON; using default");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::migrations::LEGACY_THRESHOLDS_V1;
    use crate::infrastructure::platform::MemoryStorageProvider;
    use hearthsheet_domain::character::{ResourcePool, ThresholdSettings};

    fn store() -> FieldStore<MemoryStorageProvider> {
        FieldStore::new(MemoryStorageProvider::new())
    }

    #[test]
    fn missing_and_garbage_fall_back() {
        let store = store();
        assert_eq!(store.read::<u32>("absent", 7), 7);

        store.storage().save("garbage", "{oops");
        assert_eq!(store.read::<u32>("garbage", 7), 7);

        store.storage().save("wrong", r#""text""#);
        assert_eq!(store.read::<u32>("wrong", 7), 7);
    }

    #[test]
    fn validator_rejects_out_of_range_pool() {
        let store = store();
        store.storage().save("pool", r#"{"current":9,"max":3}"#);
        let pool = store.read_validated("pool", ResourcePool::full(6), ResourcePool::is_valid);
        assert_eq!(pool, ResourcePool::full(6));
    }

    #[test]
    fn write_then_read() {
        let store = store();
        store.write("pool", &ResourcePool::new(2, 5));
        assert_eq!(
            store.read("pool", ResourcePool::full(1)),
            ResourcePool::new(2, 5)
        );
    }

    #[test]
    fn migrations_upgrade_legacy_shape() {
        let store = store();
        store.storage().save("thresholds", r#"{"major":5,"severe":11}"#);
        let migrated: Option<ThresholdSettings> =
            store.read_migrated("thresholds", None, &[LEGACY_THRESHOLDS_V1]);
        assert_eq!(migrated, Some(ThresholdSettings::manual(5, 11)));
    }

    #[test]
    fn unmatched_migration_falls_back() {
        let store = store();
        store.storage().save("thresholds", r#"{"major":"x"}"#);
        let migrated: Option<ThresholdSettings> = store.read_migrated(
            "thresholds",
            Some(ThresholdSettings::manual(1, 2)),
            &[LEGACY_THRESHOLDS_V1],
        );
        assert_eq!(migrated, Some(ThresholdSettings::manual(1, 2)));
    }
}
