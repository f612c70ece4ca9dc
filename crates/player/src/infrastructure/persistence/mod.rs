//! Field-level persistence over the storage port.

mod campaign_persistence;
mod character_persistence;
mod field_store;
mod migrations;

pub use campaign_persistence::CampaignPersistence;
pub use character_persistence::{fields as character_fields, CharacterPersistence};
pub use field_store::FieldStore;
pub use migrations::{FieldMigration, LEGACY_THRESHOLDS_V1, THRESHOLD_MIGRATIONS};
