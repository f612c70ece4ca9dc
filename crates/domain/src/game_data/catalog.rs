//! Read-only game data lookup.
//!
//! The rule tables themselves are external inputs. `GameData` is the seam the
//! state layer queries; `StaticGameData` holds a validated in-memory copy.

use std::collections::HashSet;

use serde::Deserialize;

use super::beastform::{Beastform, SpecialFormKind};
use super::class::{GameClass, Subclass};
use super::domain_card::{DomainCard, KNOWN_DOMAINS};
use crate::error::DomainError;

/// Lookup tables for classes, subclasses, domain cards, and beastforms.
pub trait GameData: Send + Sync {
    fn classes(&self) -> &[GameClass];

    fn subclasses(&self) -> &[Subclass];

    fn domain_cards(&self) -> &[DomainCard];

    fn beastforms(&self) -> &[Beastform];

    fn class(&self, name: &str) -> Option<&GameClass> {
        self.classes().iter().find(|c| c.name == name)
    }

    fn subclasses_for(&self, class_name: &str) -> Vec<&Subclass> {
        self.subclasses()
            .iter()
            .filter(|s| s.class_name == class_name)
            .collect()
    }

    fn subclass(&self, class_name: &str, name: &str) -> Option<&Subclass> {
        self.subclasses()
            .iter()
            .find(|s| s.class_name == class_name && s.name == name)
    }

    fn beastform(&self, id: &str) -> Option<&Beastform> {
        self.beastforms().iter().find(|b| b.id == id)
    }

    fn beastforms_in_tiers(&self, tiers: &[u8]) -> Vec<&Beastform> {
        self.beastforms()
            .iter()
            .filter(|b| tiers.contains(&b.tier))
            .collect()
    }

    /// Every domain name: the core list followed by any extra domains
    /// appearing on classes or cards, in first-seen order.
    fn known_domains(&self) -> Vec<String> {
        let mut domains: Vec<String> = KNOWN_DOMAINS.iter().map(|d| d.to_string()).collect();
        let extra = self
            .classes()
            .iter()
            .flat_map(|c| c.domains.iter())
            .chain(self.domain_cards().iter().map(|c| &c.domain));
        for domain in extra {
            if !domains.iter().any(|d| d.eq_ignore_ascii_case(domain)) {
                domains.push(domain.clone());
            }
        }
        domains
    }
}

/// JSON bundle shape accepted by [`StaticGameData::from_json`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameDataBundle {
    #[serde(default)]
    classes: Vec<GameClass>,
    #[serde(default)]
    subclasses: Vec<Subclass>,
    #[serde(default)]
    domain_cards: Vec<DomainCard>,
    #[serde(default)]
    beastforms: Vec<Beastform>,
}

/// Validated in-memory game data.
#[derive(Debug, Clone, Default)]
pub struct StaticGameData {
    classes: Vec<GameClass>,
    subclasses: Vec<Subclass>,
    domain_cards: Vec<DomainCard>,
    beastforms: Vec<Beastform>,
}

impl StaticGameData {
    /// Build from tables, checking referential integrity.
    pub fn new(
        classes: Vec<GameClass>,
        subclasses: Vec<Subclass>,
        domain_cards: Vec<DomainCard>,
        beastforms: Vec<Beastform>,
    ) -> Result<Self, DomainError> {
        ensure_unique("class", classes.iter().map(|c| c.name.as_str()))?;
        ensure_unique("domain card", domain_cards.iter().map(|c| c.name.as_str()))?;
        ensure_unique("beastform", beastforms.iter().map(|b| b.id.as_str()))?;

        for subclass in &subclasses {
            if !classes.iter().any(|c| c.name == subclass.class_name) {
                return Err(DomainError::not_found("Class", subclass.class_name.clone()));
            }
        }

        for form in &beastforms {
            if form.id.trim().is_empty() {
                return Err(DomainError::validation("beastform id cannot be empty"));
            }
            let Some(special) = form.special.as_ref() else {
                continue;
            };
            if special.allowed_tiers.is_empty() {
                return Err(DomainError::validation(format!(
                    "special beastform {} has no allowed tiers",
                    form.id
                )));
            }
            if let SpecialFormKind::Hybrid(config) = special.kind {
                if config.base_form_count == 0
                    || config.advantage_count == 0
                    || config.feature_count == 0
                {
                    return Err(DomainError::validation(format!(
                        "hybrid beastform {} needs positive selection counts",
                        form.id
                    )));
                }
            }
        }

        Ok(Self {
            classes,
            subclasses,
            domain_cards,
            beastforms,
        })
    }

    /// Parse a JSON bundle with `classes`, `subclasses`, `domainCards`, and
    /// `beastforms` arrays (all optional).
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let bundle: GameDataBundle = serde_json::from_str(json)?;
        Self::new(
            bundle.classes,
            bundle.subclasses,
            bundle.domain_cards,
            bundle.beastforms,
        )
    }
}

impl GameData for StaticGameData {
    fn classes(&self) -> &[GameClass] {
        &self.classes
    }

    fn subclasses(&self) -> &[Subclass] {
        &self.subclasses
    }

    fn domain_cards(&self) -> &[DomainCard] {
        &self.domain_cards
    }

    fn beastforms(&self) -> &[Beastform] {
        &self.beastforms
    }
}

fn ensure_unique<'a>(
    what: &str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(DomainError::constraint(format!("duplicate {}: {}", what, key)));
        }
    }
    Ok(())
}
