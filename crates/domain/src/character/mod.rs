//! The character aggregate and its value objects.

mod beastform;
mod conditions;
mod features;
mod identity;
mod loadout;
mod progression;
mod record;
mod resources;
mod thresholds;
mod traits;

pub use beastform::{
    ActivationMethod, ActivationPath, BeastformActivation, BeastformSelection, SpecialConfig,
};
pub use conditions::{Condition, ConditionChange, ConditionList, MAX_CONDITIONS};
pub use features::{CustomFeature, FeatureMap, FeatureValue};
pub use identity::{
    Armor, CharacterIdentity, ClassDraft, Companion, Equipment, InventoryItem, Weapon,
};
pub use loadout::{LoadoutMode, LoadoutRules, LoadoutSelection};
pub use progression::{Experience, LevelUpEntry, Progression};
pub use record::CharacterRecord;
pub use resources::{ResourceKind, ResourcePool, Resources};
pub use thresholds::{ThresholdSettings, ThresholdValue};
pub use traits::{CharacterTraits, TraitValue, TRAIT_KEYS};
