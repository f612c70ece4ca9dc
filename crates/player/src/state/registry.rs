//! Registry of open character stores, one per character id.

use std::collections::HashMap;

use hearthsheet_domain::CharacterId;

use super::character_store::CharacterStore;
use crate::infrastructure::persistence::CharacterPersistence;
use crate::ports::outbound::StorageProvider;

/// Keyed cache of character stores.
///
/// The first `open` of an id hydrates the record from storage and attaches a
/// write-through persistence subscriber. Later calls return the same store
/// until it is disposed.
pub struct CharacterRegistry<S: StorageProvider> {
    persistence: CharacterPersistence<S>,
    stores: HashMap<CharacterId, CharacterStore>,
}

impl<S: StorageProvider> CharacterRegistry<S> {
    pub fn new(storage: S, key_prefix: impl Into<String>) -> Self {
        Self {
            persistence: CharacterPersistence::new(storage, key_prefix),
            stores: HashMap::new(),
        }
    }

    pub fn open(&mut self, id: CharacterId) -> &mut CharacterStore {
        let persistence = &self.persistence;
        self.stores.entry(id).or_insert_with(|| {
            let record = persistence.load(id);
            tracing::info!(character = %id, "Opened character store");

            let mut store = CharacterStore::new(id, record);
            let writer = persistence.clone();
            store.subscribe(move |record| writer.save(id, record));
            store
        })
    }

    pub fn get(&self, id: CharacterId) -> Option<&CharacterStore> {
        self.stores.get(&id)
    }

    pub fn is_open(&self, id: CharacterId) -> bool {
        self.stores.contains_key(&id)
    }

    /// Drop the cached store. Persisted data stays.
    pub fn dispose(&mut self, id: CharacterId) -> bool {
        let removed = self.stores.remove(&id).is_some();
        if removed {
            tracing::info!(character = %id, "Disposed character store");
        }
        removed
    }

    pub fn open_ids(&self) -> Vec<CharacterId> {
        let mut ids: Vec<CharacterId> = self.stores.keys().copied().collect();
        ids.sort();
        ids
    }
}
