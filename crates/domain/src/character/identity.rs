//! Structural character fields: identity, class draft, equipment, inventory.

use serde::{Deserialize, Serialize};

use super::progression::Experience;
use super::resources::ResourcePool;
use crate::game_data::CompanionSpec;

/// Who the character is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterIdentity {
    pub name: String,
    pub pronouns: String,
    pub ancestry: String,
    pub community: String,
    pub description: String,
    pub portrait_url: Option<String>,
}

/// Companion state for subclasses that grant one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Companion {
    #[serde(default)]
    pub name: String,
    pub kind: String,
    pub evasion: i32,
    pub stress: ResourcePool,
    pub damage_die: String,
    #[serde(default)]
    pub experiences: Vec<Experience>,
}

impl Companion {
    pub fn from_spec(spec: &CompanionSpec) -> Self {
        Self {
            name: String::new(),
            kind: spec.kind.clone(),
            evasion: spec.starting_evasion,
            stress: ResourcePool::empty(spec.starting_stress),
            damage_die: spec.damage_die.clone(),
            experiences: Vec::new(),
        }
    }
}

/// The class/subclass choice, persisted under the `class` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassDraft {
    pub class_name: Option<String>,
    pub subclass_name: Option<String>,
    pub domains: Vec<String>,
    pub companion: Option<Companion>,
}

impl ClassDraft {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.class_name.is_some() && self.subclass_name.is_some()
    }
}

/// A wielded weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub name: String,
    #[serde(rename = "trait")]
    pub trait_name: String,
    pub range: String,
    pub damage: String,
    #[serde(default)]
    pub feature: Option<String>,
}

/// Worn armor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Armor {
    pub name: String,
    pub base_major: u32,
    pub base_severe: u32,
    pub base_score: i32,
    #[serde(default)]
    pub feature: Option<String>,
}

/// Equipped gear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Equipment {
    pub primary_weapon: Option<Weapon>,
    pub secondary_weapon: Option<Weapon>,
    pub armor: Option<Armor>,
}

/// A carried item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub notes: String,
}

fn default_quantity() -> u32 {
    1
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            notes: String::new(),
        }
    }
}
