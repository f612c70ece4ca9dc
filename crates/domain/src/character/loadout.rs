//! Domain card loadout: active cards, vault, and homebrew cards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_data::DomainCard;

/// How the card browser is scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadoutMode {
    /// Only the character's class domains.
    #[default]
    ClassDomains,
    /// Every known domain.
    AllDomains,
    /// Authoring form instead of a card grid.
    Homebrew,
}

impl LoadoutMode {
    #[inline]
    pub fn browses_cards(self) -> bool {
        !matches!(self, Self::Homebrew)
    }
}

impl fmt::Display for LoadoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassDomains => write!(f, "class-domains"),
            Self::AllDomains => write!(f, "all-domains"),
            Self::Homebrew => write!(f, "homebrew"),
        }
    }
}

/// Capacity limits for the two collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadoutRules {
    pub max_active_cards: usize,
    /// `None` means the vault is unbounded.
    #[serde(default)]
    pub max_vault_cards: Option<usize>,
}

impl Default for LoadoutRules {
    fn default() -> Self {
        Self {
            max_active_cards: 5,
            max_vault_cards: None,
        }
    }
}

impl LoadoutRules {
    pub fn active_has_room(&self, active_len: usize) -> bool {
        active_len < self.max_active_cards
    }

    pub fn vault_has_room(&self, vault_len: usize) -> bool {
        self.max_vault_cards.map_or(true, |max| vault_len < max)
    }
}

/// Persisted loadout, stored under the character's `domains` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadoutSelection {
    pub mode: LoadoutMode,
    pub active_cards: Vec<DomainCard>,
    pub vault_cards: Vec<DomainCard>,
    pub homebrew_cards: Vec<DomainCard>,
}

impl LoadoutSelection {
    pub fn is_active(&self, name: &str) -> bool {
        self.active_cards.iter().any(|c| c.name == name)
    }

    pub fn is_in_vault(&self, name: &str) -> bool {
        self.vault_cards.iter().any(|c| c.name == name)
    }

    /// Cards across active and vault.
    pub fn total_cards(&self) -> usize {
        self.active_cards.len() + self.vault_cards.len()
    }

    /// No card name in both collections, and no repeats within one.
    pub fn is_disjoint(&self) -> bool {
        let mut names: Vec<&str> = self
            .active_cards
            .iter()
            .chain(self.vault_cards.iter())
            .map(|c| c.name.as_str())
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        names.len() == total
    }

    /// Whether both collections fit the rules.
    pub fn fits(&self, rules: &LoadoutRules) -> bool {
        self.active_cards.len() <= rules.max_active_cards
            && rules
                .max_vault_cards
                .map_or(true, |max| self.vault_cards.len() <= max)
    }
}
