//! Level, tier, advancement, and experiences.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game_data::{MIN_LEVEL, MAX_LEVEL};

/// Current level, tier, and spent advancement options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub current_level: u8,
    pub current_tier: u8,
    #[serde(default)]
    pub available_points: u32,
    /// Advancement option id to number of times taken.
    #[serde(default)]
    pub spent_options: BTreeMap<String, u32>,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            current_level: MIN_LEVEL,
            current_tier: 1,
            available_points: 0,
            spent_options: BTreeMap::new(),
        }
    }
}

impl Progression {
    pub fn is_valid(&self) -> bool {
        (MIN_LEVEL..=MAX_LEVEL).contains(&self.current_level)
            && (1..=4).contains(&self.current_tier)
    }
}

/// One entry of the level-up history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelUpEntry {
    pub level: u8,
    /// Level before this entry. Absent in older history, where it is
    /// `level - 1`.
    #[serde(default)]
    pub previous_level: Option<u8>,
    pub tier: u8,
    #[serde(default)]
    pub selections: Vec<String>,
    pub recorded_at: DateTime<Utc>,
}

impl LevelUpEntry {
    pub fn level_before(&self) -> u8 {
        self.previous_level.unwrap_or_else(|| self.level.saturating_sub(1))
    }
}

/// A named experience with its roll bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub name: String,
    pub bonus: i32,
}

impl Experience {
    pub fn new(name: impl Into<String>, bonus: i32) -> Self {
        Self {
            name: name.into(),
            bonus,
        }
    }
}
