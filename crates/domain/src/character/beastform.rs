//! Committed beastform state on a character.

use serde::{Deserialize, Serialize};

use crate::game_data::{BeastformFeature, TraitBonus};

/// How the current form was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivationMethod {
    Stress,
    Evolution,
    #[default]
    None,
}

/// How a transformation is paid for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationPath {
    Stress,
    /// Evolution also grants a bonus to one trait.
    Evolution { bonus_trait: TraitBonus },
}

impl ActivationPath {
    pub fn method(&self) -> ActivationMethod {
        match self {
            Self::Stress => ActivationMethod::Stress,
            Self::Evolution { .. } => ActivationMethod::Evolution,
        }
    }
}

/// Extra configuration for special forms. Evolved and hybrid settings can
/// never coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialConfig {
    Evolved {
        evolved_base_form_id: String,
    },
    Hybrid {
        hybrid_base_form_ids: Vec<String>,
        selected_advantages: Vec<String>,
        selected_features: Vec<BeastformFeature>,
    },
}

/// The result of a completed beastform wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeastformActivation {
    pub form_id: String,
    pub path: ActivationPath,
    pub special: Option<SpecialConfig>,
}

/// Persisted beastform state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BeastformSelection {
    pub active_form_id: Option<String>,
    pub activation_method: ActivationMethod,
    pub evolution_bonus_trait: Option<TraitBonus>,
    pub evolved_base_form_id: Option<String>,
    pub hybrid_base_form_ids: Vec<String>,
    pub selected_advantages: Vec<String>,
    pub selected_features: Vec<BeastformFeature>,
}

impl BeastformSelection {
    pub fn from_activation(activation: &BeastformActivation) -> Self {
        let mut selection = Self {
            active_form_id: Some(activation.form_id.clone()),
            activation_method: activation.path.method(),
            ..Self::default()
        };
        if let ActivationPath::Evolution { bonus_trait } = &activation.path {
            selection.evolution_bonus_trait = Some(bonus_trait.clone());
        }
        match &activation.special {
            Some(SpecialConfig::Evolved {
                evolved_base_form_id,
            }) => {
                selection.evolved_base_form_id = Some(evolved_base_form_id.clone());
            }
            Some(SpecialConfig::Hybrid {
                hybrid_base_form_ids,
                selected_advantages,
                selected_features,
            }) => {
                selection.hybrid_base_form_ids = hybrid_base_form_ids.clone();
                selection.selected_advantages = selected_advantages.clone();
                selection.selected_features = selected_features.clone();
            }
            None => {}
        }
        selection
    }

    #[inline]
    pub fn is_transformed(&self) -> bool {
        self.active_form_id.is_some()
    }

    /// Rebuild the special configuration from the flat persisted fields.
    pub fn special_config(&self) -> Option<SpecialConfig> {
        if let Some(base) = &self.evolved_base_form_id {
            return Some(SpecialConfig::Evolved {
                evolved_base_form_id: base.clone(),
            });
        }
        if !self.hybrid_base_form_ids.is_empty() {
            return Some(SpecialConfig::Hybrid {
                hybrid_base_form_ids: self.hybrid_base_form_ids.clone(),
                selected_advantages: self.selected_advantages.clone(),
                selected_features: self.selected_features.clone(),
            });
        }
        None
    }

    /// Evolved and hybrid fields are mutually exclusive, and an idle
    /// selection carries no configuration.
    pub fn is_consistent(&self) -> bool {
        let hybrid = !self.hybrid_base_form_ids.is_empty()
            || !self.selected_advantages.is_empty()
            || !self.selected_features.is_empty();
        let evolved = self.evolved_base_form_id.is_some();
        if evolved && hybrid {
            return false;
        }
        if self.active_form_id.is_none() {
            return !evolved
                && !hybrid
                && self.evolution_bonus_trait.is_none()
                && self.activation_method == ActivationMethod::None;
        }
        self.evolution_bonus_trait.is_some()
            == (self.activation_method == ActivationMethod::Evolution)
    }
}
