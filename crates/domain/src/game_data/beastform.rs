//! Beastform templates.
//!
//! A beastform is a transformation a character can assume. Most forms are
//! picked directly; "special" forms need extra configuration first:
//!
//! - **Evolved** forms build on a single regular base form.
//! - **Hybrid** forms combine several base forms and pick a fixed number of
//!   their advantages and features.

use serde::{Deserialize, Serialize};

/// A trait bonus granted by a form (or by the Evolution activation path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitBonus {
    #[serde(rename = "trait")]
    pub trait_name: String,
    pub value: i32,
}

impl TraitBonus {
    pub fn new(trait_name: impl Into<String>, value: i32) -> Self {
        Self {
            trait_name: trait_name.into(),
            value,
        }
    }
}

/// Damage type of a beastform attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DamageType {
    #[default]
    Physical,
    Magic,
}

/// Attack profile while transformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeastformAttack {
    #[serde(rename = "trait")]
    pub trait_name: String,
    pub range: String,
    pub damage_dice: String,
    #[serde(default)]
    pub damage_type: DamageType,
}

/// A named beastform feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeastformFeature {
    pub name: String,
    pub description: String,
}

impl BeastformFeature {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Selection counts for a hybrid form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridConfig {
    pub base_form_count: usize,
    pub advantage_count: usize,
    pub feature_count: usize,
}

/// What kind of extra configuration a special form needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SpecialFormKind {
    Evolved,
    Hybrid(HybridConfig),
}

/// Special-form configuration attached to a beastform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialForm {
    pub kind: SpecialFormKind,
    /// Tiers a base form may come from.
    pub allowed_tiers: Vec<u8>,
}

/// A beastform template from the static game data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beastform {
    pub id: String,
    pub name: String,
    pub tier: u8,
    #[serde(default)]
    pub examples: Vec<String>,
    pub trait_bonus: TraitBonus,
    #[serde(default)]
    pub evasion_bonus: i32,
    pub attack: BeastformAttack,
    #[serde(default)]
    pub advantages: Vec<String>,
    #[serde(default)]
    pub features: Vec<BeastformFeature>,
    #[serde(default)]
    pub special: Option<SpecialForm>,
}

impl Beastform {
    #[inline]
    pub fn is_special(&self) -> bool {
        self.special.is_some()
    }

    #[inline]
    pub fn is_evolved(&self) -> bool {
        matches!(
            self.special,
            Some(SpecialForm {
                kind: SpecialFormKind::Evolved,
                ..
            })
        )
    }

    /// Hybrid selection counts, if this is a hybrid form.
    pub fn hybrid_config(&self) -> Option<HybridConfig> {
        match self.special.as_ref().map(|s| s.kind) {
            Some(SpecialFormKind::Hybrid(config)) => Some(config),
            _ => None,
        }
    }

    #[inline]
    pub fn is_hybrid(&self) -> bool {
        self.hybrid_config().is_some()
    }
}

/// Forms that can serve as the base of a special form.
///
/// Candidates come from the special form's allowed tiers and are never
/// special themselves. Returns nothing for regular forms.
pub fn available_base_forms<'a>(special: &Beastform, all: &'a [Beastform]) -> Vec<&'a Beastform> {
    let Some(config) = special.special.as_ref() else {
        return Vec::new();
    };
    all.iter()
        .filter(|form| !form.is_special())
        .filter(|form| config.allowed_tiers.contains(&form.tier))
        .collect()
}

/// Advantages offered by a set of hybrid base forms, deduplicated in order.
pub fn hybrid_advantage_pool(bases: &[&Beastform]) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();
    for advantage in bases.iter().flat_map(|form| form.advantages.iter()) {
        if !pool.contains(advantage) {
            pool.push(advantage.clone());
        }
    }
    pool
}

/// Features offered by a set of hybrid base forms, deduplicated by name.
pub fn hybrid_feature_pool(bases: &[&Beastform]) -> Vec<BeastformFeature> {
    let mut pool: Vec<BeastformFeature> = Vec::new();
    for feature in bases.iter().flat_map(|form| form.features.iter()) {
        if !pool.iter().any(|f| f.name == feature.name) {
            pool.push(feature.clone());
        }
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str, tier: u8, advantages: &[&str], features: &[&str]) -> Beastform {
        Beastform {
            id: id.to_string(),
            name: id.to_string(),
            tier,
            examples: vec![],
            trait_bonus: TraitBonus::new("agility", 1),
            evasion_bonus: 0,
            attack: BeastformAttack {
                trait_name: "agility".to_string(),
                range: "Melee".to_string(),
                damage_dice: "d6".to_string(),
                damage_type: DamageType::Physical,
            },
            advantages: advantages.iter().map(|a| a.to_string()).collect(),
            features: features
                .iter()
                .map(|f| BeastformFeature::new(*f, "desc"))
                .collect(),
            special: None,
        }
    }

    #[test]
    fn base_forms_respect_tiers_and_exclude_special() {
        let mut hybrid = form("hybrid", 3, &[], &[]);
        hybrid.special = Some(SpecialForm {
            kind: SpecialFormKind::Hybrid(HybridConfig {
                base_form_count: 2,
                advantage_count: 4,
                feature_count: 2,
            }),
            allowed_tiers: vec![1, 2],
        });
        let all = vec![
            form("wolf", 1, &[], &[]),
            form("bear", 2, &[], &[]),
            form("dragon", 4, &[], &[]),
            hybrid.clone(),
        ];

        let ids: Vec<&str> = available_base_forms(&hybrid, &all)
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(ids, vec!["wolf", "bear"]);
    }

    #[test]
    fn regular_form_has_no_base_forms() {
        let wolf = form("wolf", 1, &[], &[]);
        assert!(available_base_forms(&wolf, std::slice::from_ref(&wolf)).is_empty());
    }

    #[test]
    fn pools_deduplicate() {
        let wolf = form("wolf", 1, &["sneak", "track"], &["Pack Hunting", "Keen Nose"]);
        let fox = form("fox", 1, &["track", "hide"], &["Keen Nose", "Evasive"]);
        let bases = [&wolf, &fox];

        assert_eq!(hybrid_advantage_pool(&bases), vec!["sneak", "track", "hide"]);
        let names: Vec<String> = hybrid_feature_pool(&bases)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Pack Hunting", "Keen Nose", "Evasive"]);
    }

    #[test]
    fn special_kind_serializes_with_type_tag() {
        let kind = SpecialFormKind::Hybrid(HybridConfig {
            base_form_count: 3,
            advantage_count: 5,
            feature_count: 3,
        });
        let json = serde_json::to_value(kind).expect("serialize");
        assert_eq!(json["type"], "hybrid");
        assert_eq!(json["baseFormCount"], 3);

        let evolved: SpecialFormKind =
            serde_json::from_str(r#"{"type":"evolved"}"#).expect("deserialize");
        assert_eq!(evolved, SpecialFormKind::Evolved);
    }
}
