//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. State and persistence code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with in-memory implementations

use chrono::{DateTime, Utc};

/// Time operations abstraction
pub trait TimeProvider: Clone + 'static {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;

    /// Current time as a UTC timestamp
    fn now_utc(&self) -> DateTime<Utc> {
        i64::try_from(self.now_millis())
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or_default()
    }
}

/// Persistent key-value storage abstraction (localStorage/file-based)
///
/// A passive surface: no transactions across keys.
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key builders
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    use hearthsheet_domain::{CampaignId, CharacterId};

    pub const DEFAULT_PREFIX: &str = "hearthsheet";

    /// Per-field key of a character: `{prefix}:character:{id}:{field}`.
    pub fn character_field(prefix: &str, id: CharacterId, field: &str) -> String {
        format!("{}:character:{}:{}", prefix, id, field)
    }

    /// Per-field key of a campaign: `{prefix}:campaign:{id}:{field}`.
    pub fn campaign_field(prefix: &str, id: CampaignId, field: &str) -> String {
        format!("{}:campaign:{}:{}", prefix, id, field)
    }

    /// Persisted soundboard volume.
    pub fn soundboard_volume(prefix: &str) -> String {
        format!("{}:soundboard:volume", prefix)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn keys_are_namespaced_per_id_and_field() {
            let id = CharacterId::new();
            let key = character_field("hs", id, "resources");
            assert_eq!(key, format!("hs:character:{}:resources", id));
            assert_eq!(soundboard_volume("hs"), "hs:soundboard:volume");
        }
    }
}
