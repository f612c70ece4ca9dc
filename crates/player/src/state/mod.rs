//! Sheet state: the character and campaign stores plus the interactive
//! flows (beastform wizard, loadout, class selection, soundboard) that
//! drive them.

pub mod beastform_wizard;
pub mod campaign_store;
pub mod card_pool;
pub mod character_store;
pub mod class_selection;
pub mod loadout;
pub mod registry;
pub mod soundboard;

pub use beastform_wizard::{BeastformDraft, BeastformWizard, WizardStep, EVOLUTION_TRAIT_BONUS};
pub use campaign_store::CampaignStore;
pub use card_pool::{CardFilter, CardPool};
pub use character_store::{CharacterStore, SubscriptionId};
pub use class_selection::{ClassSelectionWizard, ClassStep};
pub use loadout::{LoadoutManager, MoveRequest, PendingSwap, SwapSource};
pub use registry::CharacterRegistry;
pub use soundboard::{
    PlaybackState, PlaybackStatus, Soundboard, DEFAULT_VOLUME_DEBOUNCE_MS,
};
