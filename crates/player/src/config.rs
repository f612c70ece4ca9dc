//! Player configuration loaded from the environment.
//!
//! Supported environment variables:
//! - HEARTHSHEET_STORAGE_PATH: explicit desktop storage file
//! - HEARTHSHEET_KEY_PREFIX: namespace for every storage key (default `hearthsheet`)
//! - HEARTHSHEET_CHARACTER_ID: character the binary opens on start

use std::path::PathBuf;

use anyhow::Context;
use hearthsheet_domain::CharacterId;

use crate::ports::outbound::storage_keys::DEFAULT_PREFIX;

const STORAGE_PATH: &str = "HEARTHSHEET_STORAGE_PATH";
const KEY_PREFIX: &str = "HEARTHSHEET_KEY_PREFIX";
const CHARACTER_ID: &str = "HEARTHSHEET_CHARACTER_ID";

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub storage_path: Option<PathBuf>,
    pub key_prefix: String,
    pub character_id: Option<CharacterId>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            key_prefix: DEFAULT_PREFIX.to_string(),
            character_id: None,
        }
    }
}

impl PlayerConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source. Blank values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(path) = var(STORAGE_PATH) {
            config.storage_path = Some(PathBuf::from(path));
        }
        if let Some(prefix) = var(KEY_PREFIX) {
            config.key_prefix = prefix;
        }
        if let Some(raw) = var(CHARACTER_ID) {
            let id = raw
                .parse::<CharacterId>()
                .with_context(|| format!("{CHARACTER_ID} is not a valid character id"))?;
            config.character_id = Some(id);
        }

        Ok(config)
    }
}
