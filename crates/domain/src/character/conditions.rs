//! Active conditions on a character.
//!
//! Conditions are deduplicated by a trimmed, lowercased key and capped at
//! [`MAX_CONDITIONS`]. Once full, a new distinct condition is dropped; the
//! oldest entries survive.

use serde::{Deserialize, Serialize};

use crate::game_data::default_condition_description;

/// Maximum number of tracked conditions.
pub const MAX_CONDITIONS: usize = 12;

/// A single condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Condition {
    fn key(&self) -> String {
        condition_key(&self.name)
    }
}

/// Outcome of [`ConditionList::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionChange {
    /// A new entry was appended.
    Added,
    /// An entry with the same key already existed.
    Updated,
    /// The list was full; nothing was stored.
    Dropped,
    /// The label was blank.
    Ignored,
}

/// Ordered, deduplicated, capped list of conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionList(Vec<Condition>);

fn condition_key(label: &str) -> String {
    label.trim().to_lowercase()
}

impl ConditionList {
    /// Insert or update a condition.
    ///
    /// A missing description resolves to the standard description for that
    /// condition. An existing entry keeps the casing of its first name and
    /// is overwritten with the resolved description; with none resolved, its
    /// stored description stays.
    pub fn add(&mut self, label: &str, description: Option<&str>) -> ConditionChange {
        let key = condition_key(label);
        if key.is_empty() {
            return ConditionChange::Ignored;
        }
        let description = description.or_else(|| default_condition_description(&key));

        if let Some(existing) = self.0.iter_mut().find(|c| c.key() == key) {
            if let Some(description) = description {
                existing.description = description.to_string();
            }
            return ConditionChange::Updated;
        }

        self.0.push(Condition {
            name: label.trim().to_string(),
            description: description.unwrap_or_default().to_string(),
        });

        if self.0.len() > MAX_CONDITIONS {
            self.0.truncate(MAX_CONDITIONS);
            return ConditionChange::Dropped;
        }
        ConditionChange::Added
    }

    /// Remove by exact display name.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c.name != name);
        self.0.len() != before
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.0.is_empty();
        self.0.clear();
        changed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a condition with this label's key is present.
    pub fn contains(&self, label: &str) -> bool {
        let key = condition_key(label);
        self.0.iter().any(|c| c.key() == key)
    }

    /// Whether the list respects the dedup and capacity rules.
    pub fn is_normalized(&self) -> bool {
        if self.0.len() > MAX_CONDITIONS {
            return false;
        }
        let mut keys: Vec<String> = self.0.iter().map(Condition::key).collect();
        keys.sort();
        keys.windows(2).all(|w| w[0] != w[1]) && keys.iter().all(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_casing_and_updates_description() {
        let mut list = ConditionList::default();
        assert_eq!(list.add("Prone", Some("on the ground")), ConditionChange::Added);
        assert_eq!(
            list.add("PRONE", Some("flat on the ground")),
            ConditionChange::Updated
        );

        assert_eq!(list.len(), 1);
        let only = list.iter().next().expect("one condition");
        assert_eq!(only.name, "Prone");
        assert_eq!(only.description, "flat on the ground");
    }

    #[test]
    fn re_adding_standard_condition_restores_default_description() {
        let mut list = ConditionList::default();
        list.add("Vulnerable", Some("custom text"));
        assert_eq!(list.add("VULNERABLE", None), ConditionChange::Updated);

        let entry = list.iter().next().expect("entry");
        assert_eq!(entry.name, "Vulnerable");
        assert_eq!(entry.description, "Rolls targeting you have advantage.");
    }

    #[test]
    fn re_adding_unlisted_condition_keeps_description() {
        let mut list = ConditionList::default();
        list.add("Dazed", Some("custom"));
        list.add("dazed", None);
        assert_eq!(list.iter().next().map(|c| c.description.as_str()), Some("custom"));
    }

    #[test]
    fn standard_conditions_get_default_description() {
        let mut list = ConditionList::default();
        list.add("  Vulnerable ", None);
        let entry = list.iter().next().expect("entry");
        assert_eq!(entry.name, "Vulnerable");
        assert!(!entry.description.is_empty());
    }

    #[test]
    fn thirteenth_condition_is_dropped() {
        let mut list = ConditionList::default();
        for i in 0..MAX_CONDITIONS {
            assert_eq!(list.add(&format!("cond-{i}"), None), ConditionChange::Added);
        }
        assert_eq!(list.add("one too many", None), ConditionChange::Dropped);
        assert_eq!(list.len(), MAX_CONDITIONS);
        assert!(!list.contains("one too many"));
        assert!(list.contains("cond-0"));
    }

    #[test]
    fn updating_when_full_still_works() {
        let mut list = ConditionList::default();
        for i in 0..MAX_CONDITIONS {
            list.add(&format!("cond-{i}"), None);
        }
        assert_eq!(list.add("COND-3", Some("new")), ConditionChange::Updated);
        assert_eq!(list.len(), MAX_CONDITIONS);
    }

    #[test]
    fn remove_uses_exact_display_name() {
        let mut list = ConditionList::default();
        list.add("Prone", None);
        assert!(!list.remove("prone"));
        assert!(list.remove("Prone"));
        assert!(list.is_empty());
    }

    #[test]
    fn blank_labels_are_ignored() {
        let mut list = ConditionList::default();
        assert_eq!(list.add("   ", None), ConditionChange::Ignored);
        assert!(list.is_empty());
    }

    #[test]
    fn normalization_check_detects_duplicates() {
        let list: ConditionList = serde_json::from_str(
            r#"[{"name":"Prone","description":""},{"name":"prone","description":""}]"#,
        )
        .expect("deserialize");
        assert!(!list.is_normalized());
    }
}
