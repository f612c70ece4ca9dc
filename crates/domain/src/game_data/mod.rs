//! Static game data: beastforms, classes, domain cards, tiers, conditions.
//!
//! These are read-only inputs. Nothing in this crate writes to them.

mod beastform;
mod catalog;
mod class;
mod conditions;
mod domain_card;
mod tier;

pub use beastform::{
    available_base_forms, hybrid_advantage_pool, hybrid_feature_pool, Beastform,
    BeastformAttack, BeastformFeature, DamageType, HybridConfig, SpecialForm, SpecialFormKind,
    TraitBonus,
};
pub use catalog::{GameData, StaticGameData};
pub use class::{CompanionSpec, GameClass, Subclass};
pub use conditions::default_condition_description;
pub use domain_card::{CardType, DomainCard, KNOWN_DOMAINS};
pub use tier::{clamp_level, tier_for_level, tier_label, MAX_LEVEL, MIN_LEVEL};
