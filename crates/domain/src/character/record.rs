//! CharacterRecord aggregate - every mutable field of one character.
//!
//! Resource fields change only through delta operations so that clamping is
//! always enforced. Structural fields (identity, class, equipment, ...) are
//! patched wholesale by the owning store.
//!
//! Operations return whether they changed anything; none of them fail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::beastform::{BeastformActivation, BeastformSelection};
use super::conditions::{ConditionChange, ConditionList};
use super::features::{CustomFeature, FeatureMap, FeatureValue};
use super::identity::{CharacterIdentity, ClassDraft, Equipment, InventoryItem};
use super::loadout::LoadoutSelection;
use super::progression::{Experience, LevelUpEntry, Progression};
use super::resources::{ResourceKind, Resources};
use super::thresholds::ThresholdSettings;
use super::traits::CharacterTraits;
use crate::game_data::{clamp_level, tier_for_level, MAX_LEVEL};
use crate::ids::CustomFeatureId;

/// All persisted fields of one character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    pub identity: CharacterIdentity,
    #[serde(rename = "class")]
    pub class_draft: ClassDraft,
    pub domains: LoadoutSelection,
    pub equipment: Equipment,
    pub inventory: Vec<InventoryItem>,
    pub progression: Progression,
    pub resources: Resources,
    pub traits: CharacterTraits,
    pub conditions: ConditionList,
    pub features: FeatureMap,
    pub custom_features: Vec<CustomFeature>,
    pub thresholds: Option<ThresholdSettings>,
    pub leveling: Vec<LevelUpEntry>,
    pub experience: u32,
    pub experiences: Vec<Experience>,
    pub beastform: BeastformSelection,
}

impl CharacterRecord {
    // =========================================================================
    // Resources
    // =========================================================================

    /// `current' = clamp(current + delta, floor, max)`.
    pub fn update_resource(&mut self, kind: ResourceKind, delta: i32) -> bool {
        self.resources.apply(kind, delta)
    }

    /// `max' = max(floor, max + delta)`, then `current` is pulled into range.
    pub fn update_resource_max(&mut self, kind: ResourceKind, delta: i32) -> bool {
        self.resources.apply_max(kind, delta)
    }

    // =========================================================================
    // Level and tier
    // =========================================================================

    /// Clamp to `[1, 10]` and derive the tier in the same write.
    pub fn set_level(&mut self, level: i32) -> bool {
        let level = clamp_level(level);
        let tier = tier_for_level(level);
        let changed =
            self.progression.current_level != level || self.progression.current_tier != tier;
        self.progression.current_level = level;
        self.progression.current_tier = tier;
        changed
    }

    /// Advance one level, keeping a history entry of the selections made.
    pub fn record_level_up(&mut self, selections: Vec<String>, now: DateTime<Utc>) -> bool {
        if self.progression.current_level >= MAX_LEVEL {
            return false;
        }
        let previous_level = self.progression.current_level;
        self.set_level(i32::from(previous_level) + 1);
        for selection in &selections {
            *self
                .progression
                .spent_options
                .entry(selection.clone())
                .or_insert(0) += 1;
        }
        self.leveling.push(LevelUpEntry {
            level: self.progression.current_level,
            previous_level: Some(previous_level),
            tier: self.progression.current_tier,
            selections,
            recorded_at: now,
        });
        true
    }

    /// Revert the most recent level-up entry.
    ///
    /// The level returns to the one held before the entry only while the
    /// character is still at the entry's level; a level set since then stays.
    pub fn undo_last_level_up(&mut self) -> bool {
        let Some(entry) = self.leveling.pop() else {
            return false;
        };
        for selection in &entry.selections {
            if let Some(count) = self.progression.spent_options.get_mut(selection) {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    self.progression.spent_options.remove(selection);
                }
            }
        }
        if self.progression.current_level == entry.level {
            self.set_level(i32::from(entry.level_before()));
        }
        true
    }

    // =========================================================================
    // Traits
    // =========================================================================

    pub fn set_trait_value(&mut self, key: &str, value: i32) -> bool {
        self.traits.set_value(key, value)
    }

    pub fn set_trait_bonus(&mut self, key: &str, bonus: i32) -> bool {
        self.traits.set_bonus(key, bonus)
    }

    pub fn toggle_trait_marked(&mut self, key: &str) -> bool {
        self.traits.toggle_marked(key)
    }

    pub fn clear_marked_traits(&mut self) -> bool {
        self.traits.clear_marked()
    }

    // =========================================================================
    // Conditions
    // =========================================================================

    pub fn add_condition(&mut self, label: &str, description: Option<&str>) -> ConditionChange {
        self.conditions.add(label, description)
    }

    pub fn remove_condition(&mut self, name: &str) -> bool {
        self.conditions.remove(name)
    }

    pub fn clear_conditions(&mut self) -> bool {
        self.conditions.clear()
    }

    // =========================================================================
    // Features
    // =========================================================================

    pub fn set_feature(&mut self, key: &str, value: FeatureValue) -> bool {
        let key = key.trim();
        if key.is_empty() {
            return false;
        }
        self.features.insert(key.to_string(), value.clone()) != Some(value)
    }

    pub fn remove_feature(&mut self, key: &str) -> bool {
        self.features.remove(key).is_some()
    }

    pub fn add_custom_feature(&mut self, feature: CustomFeature) -> CustomFeatureId {
        let id = feature.id;
        self.custom_features.push(feature);
        id
    }

    pub fn update_custom_feature(
        &mut self,
        id: CustomFeatureId,
        patch: impl FnOnce(&mut CustomFeature),
    ) -> bool {
        match self.custom_features.iter_mut().find(|f| f.id == id) {
            Some(feature) => {
                patch(feature);
                // The id is the address; patches cannot move it.
                feature.id = id;
                true
            }
            None => false,
        }
    }

    pub fn remove_custom_feature(&mut self, id: CustomFeatureId) -> bool {
        let before = self.custom_features.len();
        self.custom_features.retain(|f| f.id != id);
        self.custom_features.len() != before
    }

    // =========================================================================
    // Experience
    // =========================================================================

    /// Add (or remove, with a negative delta) experience points, never
    /// going below zero.
    pub fn add_experience_points(&mut self, delta: i64) -> bool {
        let next = (i64::from(self.experience) + delta).clamp(0, i64::from(u32::MAX)) as u32;
        let changed = next != self.experience;
        self.experience = next;
        changed
    }

    /// Add a named experience. Blank and duplicate names are ignored.
    pub fn add_experience(&mut self, name: &str, bonus: i32) -> bool {
        let name = name.trim();
        if name.is_empty()
            || self
                .experiences
                .iter()
                .any(|e| e.name.eq_ignore_ascii_case(name))
        {
            return false;
        }
        self.experiences.push(Experience::new(name, bonus));
        true
    }

    pub fn remove_experience(&mut self, name: &str) -> bool {
        let before = self.experiences.len();
        self.experiences.retain(|e| e.name != name);
        self.experiences.len() != before
    }

    // =========================================================================
    // Thresholds and beastform
    // =========================================================================

    pub fn set_thresholds(&mut self, thresholds: Option<ThresholdSettings>) -> bool {
        let changed = self.thresholds != thresholds;
        self.thresholds = thresholds;
        changed
    }

    pub fn activate_beastform(&mut self, activation: &BeastformActivation) {
        self.beastform = BeastformSelection::from_activation(activation);
    }

    pub fn deactivate_beastform(&mut self) -> bool {
        let changed = self.beastform.is_transformed();
        self.beastform = BeastformSelection::default();
        changed
    }

    // =========================================================================
    // Inventory helpers
    // =========================================================================

    /// Add `quantity` of an item, stacking onto an entry with the same name.
    pub fn add_item(&mut self, name: &str, quantity: u32) -> bool {
        let name = name.trim();
        if name.is_empty() || quantity == 0 {
            return false;
        }
        match self.inventory.iter_mut().find(|i| i.name == name) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.inventory.push(InventoryItem::new(name, quantity)),
        }
        true
    }

    /// Remove `quantity` of an item; the entry disappears at zero.
    pub fn remove_item(&mut self, name: &str, quantity: u32) -> bool {
        let Some(index) = self.inventory.iter().position(|i| i.name == name) else {
            return false;
        };
        let item = &mut self.inventory[index];
        if quantity >= item.quantity {
            self.inventory.remove(index);
        } else {
            item.quantity -= quantity;
        }
        true
    }
}
