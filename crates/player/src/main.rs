//! Hearthsheet Player - composition root binary.

use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hearthsheet_player::infrastructure::platform;
use hearthsheet_player::ports::outbound::StorageProvider;
use hearthsheet_player::{CharacterRegistry, PlayerConfig};

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hearthsheet_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Hearthsheet Player");

    let config = PlayerConfig::from_env().context("failed to load player configuration")?;

    #[cfg(not(target_arch = "wasm32"))]
    let storage = match &config.storage_path {
        Some(path) => platform::DesktopStorageProvider::at_path(path),
        None => platform::DesktopStorageProvider::new(),
    };
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!(path = %storage.path().display(), "Using desktop storage");

    #[cfg(target_arch = "wasm32")]
    let storage = platform::WasmStorageProvider::new();

    run(&config, storage);
    Ok(())
}

fn run<S: StorageProvider>(config: &PlayerConfig, storage: S) {
    let Some(id) = config.character_id else {
        tracing::info!("No character configured; set HEARTHSHEET_CHARACTER_ID to open one");
        return;
    };

    let mut registry = CharacterRegistry::new(storage, config.key_prefix.clone());
    let record = registry.open(id).record();
    let resources = &record.resources;
    tracing::info!(
        character = %id,
        name = %record.identity.name,
        level = record.progression.current_level,
        tier = record.progression.current_tier,
        hp = %format!("{}/{}", resources.hp.current, resources.hp.max),
        stress = %format!("{}/{}", resources.stress.current, resources.stress.max),
        hope = %format!("{}/{}", resources.hope.current, resources.hope.max),
        active_cards = record.domains.active_cards.len(),
        vault_cards = record.domains.vault_cards.len(),
        conditions = record.conditions.len(),
        "Character summary"
    );
}
