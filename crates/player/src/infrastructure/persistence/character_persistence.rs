//! Per-field persistence of a character record.
//!
//! Each top-level field lives under its own key so one corrupt field never
//! blocks the others from loading.

use hearthsheet_domain::character::{
    BeastformSelection, CharacterTraits, ClassDraft, ConditionList, LoadoutSelection, Progression,
    Resources,
};
use hearthsheet_domain::{CharacterId, CharacterRecord};

use super::field_store::FieldStore;
use super::migrations::THRESHOLD_MIGRATIONS;
use crate::ports::outbound::{storage_keys, StorageProvider};

pub mod fields {
    pub const IDENTITY: &str = "identity";
    pub const CLASS: &str = "class";
    pub const DOMAINS: &str = "domains";
    pub const EQUIPMENT: &str = "equipment";
    pub const INVENTORY: &str = "inventory";
    pub const PROGRESSION: &str = "progression";
    pub const RESOURCES: &str = "resources";
    pub const TRAITS: &str = "traits";
    pub const CONDITIONS: &str = "conditions";
    pub const FEATURES: &str = "features";
    pub const CUSTOM_FEATURES: &str = "customFeatures";
    pub const THRESHOLDS: &str = "thresholds";
    pub const LEVELING: &str = "leveling";
    pub const EXPERIENCE: &str = "experience";
    pub const EXPERIENCES: &str = "experiences";
    pub const BEASTFORM: &str = "beastform";

    pub const ALL: [&str; 16] = [
        IDENTITY,
        CLASS,
        DOMAINS,
        EQUIPMENT,
        INVENTORY,
        PROGRESSION,
        RESOURCES,
        TRAITS,
        CONDITIONS,
        FEATURES,
        CUSTOM_FEATURES,
        THRESHOLDS,
        LEVELING,
        EXPERIENCE,
        EXPERIENCES,
        BEASTFORM,
    ];
}

/// Reads and writes character records field by field.
#[derive(Clone)]
pub struct CharacterPersistence<S: StorageProvider> {
    fields: FieldStore<S>,
    prefix: String,
}

impl<S: StorageProvider> CharacterPersistence<S> {
    pub fn new(storage: S, prefix: impl Into<String>) -> Self {
        Self {
            fields: FieldStore::new(storage),
            prefix: prefix.into(),
        }
    }

    fn key(&self, id: CharacterId, field: &str) -> String {
        storage_keys::character_field(&self.prefix, id, field)
    }

    /// Whether any field of the character has been stored.
    pub fn exists(&self, id: CharacterId) -> bool {
        fields::ALL
            .iter()
            .any(|field| self.fields.storage().load(&self.key(id, field)).is_some())
    }

    /// Hydrate a record. Every field falls back to its default independently.
    pub fn load(&self, id: CharacterId) -> CharacterRecord {
        let d = CharacterRecord::default();
        let f = &self.fields;

        CharacterRecord {
            identity: f.read(&self.key(id, fields::IDENTITY), d.identity),
            class_draft: f.read::<ClassDraft>(&self.key(id, fields::CLASS), d.class_draft),
            domains: f.read_validated(
                &self.key(id, fields::DOMAINS),
                d.domains,
                LoadoutSelection::is_disjoint,
            ),
            equipment: f.read(&self.key(id, fields::EQUIPMENT), d.equipment),
            inventory: f.read(&self.key(id, fields::INVENTORY), d.inventory),
            progression: f.read_validated(
                &self.key(id, fields::PROGRESSION),
                d.progression,
                Progression::is_valid,
            ),
            resources: f.read_validated(
                &self.key(id, fields::RESOURCES),
                d.resources,
                Resources::is_valid,
            ),
            traits: f.read::<CharacterTraits>(&self.key(id, fields::TRAITS), d.traits),
            conditions: f.read_validated(
                &self.key(id, fields::CONDITIONS),
                d.conditions,
                ConditionList::is_normalized,
            ),
            features: f.read(&self.key(id, fields::FEATURES), d.features),
            custom_features: f.read(&self.key(id, fields::CUSTOM_FEATURES), d.custom_features),
            thresholds: f.read_migrated(
                &self.key(id, fields::THRESHOLDS),
                d.thresholds,
                THRESHOLD_MIGRATIONS,
            ),
            leveling: f.read(&self.key(id, fields::LEVELING), d.leveling),
            experience: f.read(&self.key(id, fields::EXPERIENCE), d.experience),
            experiences: f.read(&self.key(id, fields::EXPERIENCES), d.experiences),
            beastform: f.read_validated(
                &self.key(id, fields::BEASTFORM),
                d.beastform,
                BeastformSelection::is_consistent,
            ),
        }
    }

    /// Write every field of the record.
    pub fn save(&self, id: CharacterId, record: &CharacterRecord) {
        let f = &self.fields;
        f.write(&self.key(id, fields::IDENTITY), &record.identity);
        f.write(&self.key(id, fields::CLASS), &record.class_draft);
        f.write(&self.key(id, fields::DOMAINS), &record.domains);
        f.write(&self.key(id, fields::EQUIPMENT), &record.equipment);
        f.write(&self.key(id, fields::INVENTORY), &record.inventory);
        f.write(&self.key(id, fields::PROGRESSION), &record.progression);
        f.write(&self.key(id, fields::RESOURCES), &record.resources);
        f.write(&self.key(id, fields::TRAITS), &record.traits);
        f.write(&self.key(id, fields::CONDITIONS), &record.conditions);
        f.write(&self.key(id, fields::FEATURES), &record.features);
        f.write(&self.key(id, fields::CUSTOM_FEATURES), &record.custom_features);
        f.write(&self.key(id, fields::THRESHOLDS), &record.thresholds);
        f.write(&self.key(id, fields::LEVELING), &record.leveling);
        f.write(&self.key(id, fields::EXPERIENCE), &record.experience);
        f.write(&self.key(id, fields::EXPERIENCES), &record.experiences);
        f.write(&self.key(id, fields::BEASTFORM), &record.beastform);
    }

    /// Remove every stored field of the character.
    pub fn delete(&self, id: CharacterId) {
        for field in fields::ALL {
            self.fields.remove(&self.key(id, field));
        }
    }
}
