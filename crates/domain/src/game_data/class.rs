//! Classes and subclasses.

use serde::{Deserialize, Serialize};

/// A character class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameClass {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// The two domains this class draws cards from.
    pub domains: Vec<String>,
    pub starting_evasion: i32,
    pub starting_hit_points: i32,
}

/// Companion granted by some subclasses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionSpec {
    pub kind: String,
    pub starting_evasion: i32,
    pub starting_stress: i32,
    pub damage_die: String,
    #[serde(default)]
    pub experience_slots: u8,
}

/// A subclass of a class.
///
/// Subclasses that grant a companion carry an explicit `companion` spec;
/// all others leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subclass {
    pub name: String,
    pub class_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub spellcast_trait: Option<String>,
    #[serde(default)]
    pub companion: Option<CompanionSpec>,
}

impl Subclass {
    #[inline]
    pub fn grants_companion(&self) -> bool {
        self.companion.is_some()
    }
}
