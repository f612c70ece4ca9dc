pub mod campaign;
pub mod character;
pub mod error;
pub mod game_data;
pub mod ids;

pub use error::DomainError;

// Re-export ID types
pub use ids::{CampaignId, CharacterId, CustomFeatureId, NpcId, SessionNoteId};

// Re-export the aggregates
pub use campaign::{CampaignMetadata, CampaignRecord, Npc, SessionNote};
pub use character::CharacterRecord;

// Re-export the game data lookup seam
pub use game_data::{GameData, StaticGameData};
