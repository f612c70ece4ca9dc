//! Character traits (agility, strength, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The six core traits.
pub const TRAIT_KEYS: [&str; 6] = [
    "agility",
    "strength",
    "finesse",
    "instinct",
    "presence",
    "knowledge",
];

/// Score of a single trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitValue {
    pub value: i32,
    #[serde(default)]
    pub bonus: i32,
    /// Marked traits cannot be raised again until the next tier.
    #[serde(default)]
    pub marked: bool,
}

impl TraitValue {
    #[inline]
    pub fn total(&self) -> i32 {
        self.value + self.bonus
    }
}

/// Trait key to score map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterTraits(BTreeMap<String, TraitValue>);

impl Default for CharacterTraits {
    fn default() -> Self {
        Self(
            TRAIT_KEYS
                .iter()
                .map(|key| (key.to_string(), TraitValue::default()))
                .collect(),
        )
    }
}

impl CharacterTraits {
    pub fn get(&self, key: &str) -> Option<&TraitValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TraitValue)> {
        self.0.iter()
    }

    pub fn set_value(&mut self, key: &str, value: i32) -> bool {
        let entry = self.0.entry(key.to_string()).or_default();
        let changed = entry.value != value;
        entry.value = value;
        changed
    }

    pub fn set_bonus(&mut self, key: &str, bonus: i32) -> bool {
        let entry = self.0.entry(key.to_string()).or_default();
        let changed = entry.bonus != bonus;
        entry.bonus = bonus;
        changed
    }

    /// Flip the marked flag. Unknown keys are ignored.
    pub fn toggle_marked(&mut self, key: &str) -> bool {
        match self.0.get_mut(key) {
            Some(entry) => {
                entry.marked = !entry.marked;
                true
            }
            None => false,
        }
    }

    pub fn clear_marked(&mut self) -> bool {
        let mut changed = false;
        for entry in self.0.values_mut().filter(|e| e.marked) {
            entry.marked = false;
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_core_traits() {
        let traits = CharacterTraits::default();
        for key in TRAIT_KEYS {
            assert_eq!(traits.get(key), Some(&TraitValue::default()));
        }
    }

    #[test]
    fn marking_and_clearing() {
        let mut traits = CharacterTraits::default();
        assert!(traits.toggle_marked("agility"));
        assert!(traits.get("agility").is_some_and(|t| t.marked));
        assert!(!traits.toggle_marked("luck"));
        assert!(traits.clear_marked());
        assert!(!traits.clear_marked());
    }

    #[test]
    fn total_includes_bonus() {
        let mut traits = CharacterTraits::default();
        traits.set_value("strength", 2);
        traits.set_bonus("strength", 1);
        assert_eq!(traits.get("strength").map(TraitValue::total), Some(3));
    }
}
