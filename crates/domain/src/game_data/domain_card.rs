//! Domain cards - the unit managed by a character's loadout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Every domain in the core rules.
pub const KNOWN_DOMAINS: [&str; 9] = [
    "Arcana", "Blade", "Bone", "Codex", "Grace", "Midnight", "Sage", "Splendor", "Valor",
];

/// Card category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum CardType {
    #[default]
    Ability,
    Spell,
    Grimoire,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ability => write!(f, "ability"),
            Self::Spell => write!(f, "spell"),
            Self::Grimoire => write!(f, "grimoire"),
        }
    }
}

impl FromStr for CardType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ability" => Ok(Self::Ability),
            "spell" => Ok(Self::Spell),
            "grimoire" => Ok(Self::Grimoire),
            _ => Err(DomainError::parse(format!("Unknown card type: {}", s))),
        }
    }
}

/// A domain card. The name is the unique key within a loadout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainCard {
    pub name: String,
    pub level: u8,
    pub domain: String,
    #[serde(rename = "type", default)]
    pub card_type: CardType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hope_cost: Option<u8>,
    #[serde(default)]
    pub recall_cost: u8,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DomainCard {
    pub fn new(name: impl Into<String>, level: u8, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            domain: domain.into(),
            card_type: CardType::default(),
            description: String::new(),
            hope_cost: None,
            recall_cost: 0,
            tags: Vec::new(),
        }
    }

    pub fn with_type(mut self, card_type: CardType) -> Self {
        self.card_type = card_type;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_recall_cost(mut self, recall_cost: u8) -> Self {
        self.recall_cost = recall_cost;
        self
    }

    pub fn with_hope_cost(mut self, hope_cost: u8) -> Self {
        self.hope_cost = Some(hope_cost);
        self
    }

    /// Case-insensitive domain match.
    pub fn in_domain(&self, domain: &str) -> bool {
        self.domain.eq_ignore_ascii_case(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_type_parses_case_insensitively() {
        assert_eq!("Spell".parse::<CardType>().expect("parse"), CardType::Spell);
        assert!("ritual".parse::<CardType>().is_err());
    }

    #[test]
    fn card_uses_type_key_on_the_wire() {
        let card = DomainCard::new("Rune Ward", 1, "Arcana").with_type(CardType::Spell);
        let json = serde_json::to_value(&card).expect("serialize");
        assert_eq!(json["type"], "spell");
        assert_eq!(json["recallCost"], 0);
    }

    #[test]
    fn missing_optional_fields_default() {
        let card: DomainCard =
            serde_json::from_str(r#"{"name":"Whirlwind","level":1,"domain":"Blade"}"#)
                .expect("deserialize");
        assert_eq!(card.card_type, CardType::Ability);
        assert!(card.tags.is_empty());
        assert!(card.in_domain("blade"));
    }
}
