//! Character store - the single mutable cell behind one character sheet.
//!
//! All mutation funnels through named operations. Subscribers run after
//! every operation that changed the record, in registration order; the
//! registry attaches persistence as one such subscriber.

use chrono::{DateTime, Utc};

use hearthsheet_domain::character::{
    BeastformActivation, CharacterIdentity, ClassDraft, ConditionChange, CustomFeature, Equipment,
    FeatureValue, InventoryItem, LoadoutSelection, Progression, ResourceKind, ThresholdSettings,
};
use hearthsheet_domain::{CharacterId, CharacterRecord, CustomFeatureId};

/// Handle returned by [`CharacterStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&CharacterRecord)>;

pub struct CharacterStore {
    id: CharacterId,
    record: CharacterRecord,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl std::fmt::Debug for CharacterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterStore")
            .field("id", &self.id)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl CharacterStore {
    pub fn new(id: CharacterId, record: CharacterRecord) -> Self {
        Self {
            id,
            record,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn record(&self) -> &CharacterRecord {
        &self.record
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&CharacterRecord) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.record);
        }
    }

    /// Run an operation that reports whether it changed the record.
    fn mutate(&mut self, op: &str, apply: impl FnOnce(&mut CharacterRecord) -> bool) -> bool {
        let changed = apply(&mut self.record);
        if changed {
            self.notify();
        } else {
            tracing::debug!(character = %self.id, op, "Operation left character unchanged");
        }
        changed
    }

    /// Run a structural patch. Patches always notify.
    fn patch(&mut self, apply: impl FnOnce(&mut CharacterRecord)) {
        apply(&mut self.record);
        self.notify();
    }

    // =========================================================================
    // Resources
    // =========================================================================

    pub fn update_resource(&mut self, kind: ResourceKind, delta: i32) -> bool {
        self.mutate("update_resource", |r| r.update_resource(kind, delta))
    }

    pub fn update_resource_max(&mut self, kind: ResourceKind, delta: i32) -> bool {
        self.mutate("update_resource_max", |r| r.update_resource_max(kind, delta))
    }

    pub fn update_hp(&mut self, delta: i32) -> bool {
        self.update_resource(ResourceKind::Hp, delta)
    }

    pub fn update_hp_max(&mut self, delta: i32) -> bool {
        self.update_resource_max(ResourceKind::Hp, delta)
    }

    pub fn update_stress(&mut self, delta: i32) -> bool {
        self.update_resource(ResourceKind::Stress, delta)
    }

    pub fn update_stress_max(&mut self, delta: i32) -> bool {
        self.update_resource_max(ResourceKind::Stress, delta)
    }

    pub fn update_hope(&mut self, delta: i32) -> bool {
        self.update_resource(ResourceKind::Hope, delta)
    }

    pub fn update_hope_max(&mut self, delta: i32) -> bool {
        self.update_resource_max(ResourceKind::Hope, delta)
    }

    pub fn update_armor_score(&mut self, delta: i32) -> bool {
        self.update_resource(ResourceKind::ArmorScore, delta)
    }

    pub fn update_armor_score_max(&mut self, delta: i32) -> bool {
        self.update_resource_max(ResourceKind::ArmorScore, delta)
    }

    // =========================================================================
    // Level
    // =========================================================================

    pub fn set_level(&mut self, level: i32) -> bool {
        self.mutate("set_level", |r| r.set_level(level))
    }

    pub fn record_level_up(&mut self, selections: Vec<String>, now: DateTime<Utc>) -> bool {
        self.mutate("record_level_up", |r| r.record_level_up(selections, now))
    }

    pub fn undo_last_level_up(&mut self) -> bool {
        self.mutate("undo_last_level_up", CharacterRecord::undo_last_level_up)
    }

    // =========================================================================
    // Traits
    // =========================================================================

    pub fn set_trait_value(&mut self, key: &str, value: i32) -> bool {
        self.mutate("set_trait_value", |r| r.set_trait_value(key, value))
    }

    pub fn set_trait_bonus(&mut self, key: &str, bonus: i32) -> bool {
        self.mutate("set_trait_bonus", |r| r.set_trait_bonus(key, bonus))
    }

    pub fn toggle_trait_marked(&mut self, key: &str) -> bool {
        self.mutate("toggle_trait_marked", |r| r.toggle_trait_marked(key))
    }

    pub fn clear_marked_traits(&mut self) -> bool {
        self.mutate("clear_marked_traits", CharacterRecord::clear_marked_traits)
    }

    // =========================================================================
    // Conditions
    // =========================================================================

    pub fn add_condition(&mut self, label: &str, description: Option<&str>) -> ConditionChange {
        let mut outcome = ConditionChange::Ignored;
        self.mutate("add_condition", |r| {
            outcome = r.add_condition(label, description);
            matches!(outcome, ConditionChange::Added | ConditionChange::Updated)
        });
        outcome
    }

    pub fn remove_condition(&mut self, name: &str) -> bool {
        self.mutate("remove_condition", |r| r.remove_condition(name))
    }

    pub fn clear_conditions(&mut self) -> bool {
        self.mutate("clear_conditions", CharacterRecord::clear_conditions)
    }

    // =========================================================================
    // Features
    // =========================================================================

    pub fn set_feature(&mut self, key: &str, value: impl Into<FeatureValue>) -> bool {
        let value = value.into();
        self.mutate("set_feature", |r| r.set_feature(key, value))
    }

    pub fn remove_feature(&mut self, key: &str) -> bool {
        self.mutate("remove_feature", |r| r.remove_feature(key))
    }

    pub fn add_custom_feature(&mut self, feature: CustomFeature) -> CustomFeatureId {
        let mut id = feature.id;
        self.mutate("add_custom_feature", |r| {
            id = r.add_custom_feature(feature);
            true
        });
        id
    }

    pub fn update_custom_feature(
        &mut self,
        id: CustomFeatureId,
        patch: impl FnOnce(&mut CustomFeature),
    ) -> bool {
        self.mutate("update_custom_feature", |r| r.update_custom_feature(id, patch))
    }

    pub fn remove_custom_feature(&mut self, id: CustomFeatureId) -> bool {
        self.mutate("remove_custom_feature", |r| r.remove_custom_feature(id))
    }

    // =========================================================================
    // Experience, thresholds, beastform
    // =========================================================================

    pub fn add_experience_points(&mut self, delta: i64) -> bool {
        self.mutate("add_experience_points", |r| r.add_experience_points(delta))
    }

    pub fn add_experience(&mut self, name: &str, bonus: i32) -> bool {
        self.mutate("add_experience", |r| r.add_experience(name, bonus))
    }

    pub fn remove_experience(&mut self, name: &str) -> bool {
        self.mutate("remove_experience", |r| r.remove_experience(name))
    }

    pub fn set_thresholds(&mut self, thresholds: Option<ThresholdSettings>) -> bool {
        self.mutate("set_thresholds", |r| r.set_thresholds(thresholds))
    }

    pub fn activate_beastform(&mut self, activation: &BeastformActivation) {
        tracing::debug!(character = %self.id, form = %activation.form_id, "Beastform activated");
        self.patch(|r| r.activate_beastform(activation));
    }

    pub fn deactivate_beastform(&mut self) -> bool {
        self.mutate("deactivate_beastform", CharacterRecord::deactivate_beastform)
    }

    pub fn add_item(&mut self, name: &str, quantity: u32) -> bool {
        self.mutate("add_item", |r| r.add_item(name, quantity))
    }

    pub fn remove_item(&mut self, name: &str, quantity: u32) -> bool {
        self.mutate("remove_item", |r| r.remove_item(name, quantity))
    }

    // =========================================================================
    // Structural patches
    // =========================================================================

    pub fn update_identity(&mut self, patch: impl FnOnce(&mut CharacterIdentity)) {
        self.patch(|r| patch(&mut r.identity));
    }

    pub fn update_class_draft(&mut self, patch: impl FnOnce(&mut ClassDraft)) {
        self.patch(|r| patch(&mut r.class_draft));
    }

    pub fn set_domains(&mut self, selection: LoadoutSelection) {
        self.patch(|r| r.domains = selection);
    }

    pub fn update_equipment(&mut self, patch: impl FnOnce(&mut Equipment)) {
        self.patch(|r| patch(&mut r.equipment));
    }

    pub fn update_inventory(&mut self, patch: impl FnOnce(&mut Vec<InventoryItem>)) {
        self.patch(|r| patch(&mut r.inventory));
    }

    pub fn update_progression(&mut self, patch: impl FnOnce(&mut Progression)) {
        self.patch(|r| patch(&mut r.progression));
    }
}
