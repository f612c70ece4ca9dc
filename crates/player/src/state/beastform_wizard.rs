//! Beastform configuration wizard.
//!
//! Steps:
//! - `SelectForm` -> `EvolvedBase` (evolved forms) or `HybridBases` (hybrid
//!   forms); plain forms activate straight from `SelectForm`.
//! - `HybridBases` -> `HybridAdvantages` -> `HybridFeatures`.
//! - `EvolutionTrait` follows any finished configuration when the player
//!   pays with evolution instead of stress.
//!
//! Guard failures leave the wizard untouched and return `false`/`None`.

use hearthsheet_domain::character::{ActivationPath, BeastformActivation, SpecialConfig, TRAIT_KEYS};
use hearthsheet_domain::game_data::{
    available_base_forms, hybrid_advantage_pool, hybrid_feature_pool, Beastform,
    BeastformFeature, HybridConfig, TraitBonus,
};
use hearthsheet_domain::GameData;

/// Trait bonus granted when a form is activated through evolution.
pub const EVOLUTION_TRAIT_BONUS: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    SelectForm,
    EvolvedBase,
    HybridBases,
    HybridAdvantages,
    HybridFeatures,
    EvolutionTrait,
}

/// Selections collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeastformDraft {
    pub form_id: Option<String>,
    pub evolved_base_form_id: Option<String>,
    pub hybrid_base_form_ids: Vec<String>,
    pub selected_advantages: Vec<String>,
    pub selected_features: Vec<BeastformFeature>,
    pub bonus_trait: Option<String>,
}

/// Remove `item` if present, else append it while below `max`.
fn toggle_with_max<T>(
    items: &mut Vec<T>,
    item: T,
    max: usize,
    same: impl Fn(&T, &T) -> bool,
) -> bool {
    if let Some(pos) = items.iter().position(|existing| same(existing, &item)) {
        items.remove(pos);
        return true;
    }
    if items.len() >= max {
        return false;
    }
    items.push(item);
    true
}

pub struct BeastformWizard<'a> {
    data: &'a dyn GameData,
    step: WizardStep,
    draft: BeastformDraft,
}

impl<'a> BeastformWizard<'a> {
    pub fn new(data: &'a dyn GameData) -> Self {
        Self {
            data,
            step: WizardStep::SelectForm,
            draft: BeastformDraft::default(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BeastformDraft {
        &self.draft
    }

    /// Discard everything and return to the first step.
    pub fn reset(&mut self) {
        self.step = WizardStep::SelectForm;
        self.draft = BeastformDraft::default();
    }

    /// Close without committing.
    pub fn close(&mut self) {
        self.reset();
    }

    pub fn selected_form(&self) -> Option<&'a Beastform> {
        let id = self.draft.form_id.as_deref()?;
        self.data.beastform(id)
    }

    pub fn hybrid_config(&self) -> Option<HybridConfig> {
        self.selected_form().and_then(Beastform::hybrid_config)
    }

    /// Forms usable as bases for the selected special form.
    pub fn base_forms(&self) -> Vec<&'a Beastform> {
        match self.selected_form() {
            Some(form) if form.is_special() => available_base_forms(form, self.data.beastforms()),
            _ => Vec::new(),
        }
    }

    fn chosen_hybrid_bases(&self) -> Vec<&'a Beastform> {
        self.draft
            .hybrid_base_form_ids
            .iter()
            .filter_map(|id| self.data.beastform(id))
            .collect()
    }

    /// Advantages offered by the chosen hybrid bases.
    pub fn advantage_pool(&self) -> Vec<String> {
        hybrid_advantage_pool(&self.chosen_hybrid_bases())
    }

    /// Features offered by the chosen hybrid bases, unique by name.
    pub fn feature_pool(&self) -> Vec<BeastformFeature> {
        hybrid_feature_pool(&self.chosen_hybrid_bases())
    }

    // =========================================================================
    // Form selection
    // =========================================================================

    pub fn select_form(&mut self, form_id: &str) -> bool {
        if self.step != WizardStep::SelectForm {
            return false;
        }
        let Some(form) = self.data.beastform(form_id) else {
            tracing::debug!(form_id, "Unknown beastform");
            return false;
        };

        self.draft = BeastformDraft {
            form_id: Some(form.id.clone()),
            ..BeastformDraft::default()
        };
        self.step = if form.is_evolved() {
            WizardStep::EvolvedBase
        } else if form.is_hybrid() {
            WizardStep::HybridBases
        } else {
            WizardStep::SelectForm
        };
        true
    }

    pub fn select_evolved_base(&mut self, base_id: &str) -> bool {
        if self.step != WizardStep::EvolvedBase {
            return false;
        }
        if !self.base_forms().iter().any(|form| form.id == base_id) {
            return false;
        }
        self.draft.evolved_base_form_id = Some(base_id.to_string());
        true
    }

    // =========================================================================
    // Hybrid steps
    // =========================================================================

    pub fn toggle_hybrid_base(&mut self, base_id: &str) -> bool {
        if self.step != WizardStep::HybridBases {
            return false;
        }
        let Some(config) = self.hybrid_config() else {
            return false;
        };
        if !self.base_forms().iter().any(|form| form.id == base_id) {
            return false;
        }
        toggle_with_max(
            &mut self.draft.hybrid_base_form_ids,
            base_id.to_string(),
            config.base_form_count,
            |a, b| a == b,
        )
    }

    pub fn toggle_advantage(&mut self, advantage: &str) -> bool {
        if self.step != WizardStep::HybridAdvantages {
            return false;
        }
        let Some(config) = self.hybrid_config() else {
            return false;
        };
        if !self.advantage_pool().iter().any(|a| a == advantage) {
            return false;
        }
        toggle_with_max(
            &mut self.draft.selected_advantages,
            advantage.to_string(),
            config.advantage_count,
            |a, b| a == b,
        )
    }

    /// Features are matched by name.
    pub fn toggle_feature(&mut self, feature_name: &str) -> bool {
        if self.step != WizardStep::HybridFeatures {
            return false;
        }
        let Some(config) = self.hybrid_config() else {
            return false;
        };
        let Some(feature) = self
            .feature_pool()
            .into_iter()
            .find(|f| f.name == feature_name)
        else {
            return false;
        };
        toggle_with_max(
            &mut self.draft.selected_features,
            feature,
            config.feature_count,
            |a, b| a.name == b.name,
        )
    }

    fn hybrid_step_complete(&self, step: WizardStep) -> bool {
        let Some(config) = self.hybrid_config() else {
            return false;
        };
        match step {
            WizardStep::HybridBases => {
                self.draft.hybrid_base_form_ids.len() == config.base_form_count
            }
            WizardStep::HybridAdvantages => {
                self.draft.selected_advantages.len() == config.advantage_count
            }
            WizardStep::HybridFeatures => {
                self.draft.selected_features.len() == config.feature_count
            }
            _ => false,
        }
    }

    /// Move from one hybrid step to the next when its count is met.
    pub fn advance(&mut self) -> bool {
        let next = match self.step {
            WizardStep::HybridBases => WizardStep::HybridAdvantages,
            WizardStep::HybridAdvantages => WizardStep::HybridFeatures,
            _ => return false,
        };
        if !self.hybrid_step_complete(self.step) {
            tracing::debug!(step = ?self.step, "Hybrid step incomplete");
            return false;
        }
        self.step = next;
        true
    }

    /// Step back, clearing what was collected in the step being left.
    pub fn back(&mut self) -> bool {
        let previous = match self.step {
            WizardStep::SelectForm => return false,
            WizardStep::EvolvedBase => {
                self.draft.evolved_base_form_id = None;
                WizardStep::SelectForm
            }
            WizardStep::HybridBases => {
                self.draft.hybrid_base_form_ids.clear();
                self.draft.selected_advantages.clear();
                self.draft.selected_features.clear();
                WizardStep::SelectForm
            }
            WizardStep::HybridAdvantages => {
                self.draft.selected_advantages.clear();
                self.draft.selected_features.clear();
                WizardStep::HybridBases
            }
            WizardStep::HybridFeatures => {
                self.draft.selected_features.clear();
                WizardStep::HybridAdvantages
            }
            WizardStep::EvolutionTrait => {
                self.draft.bonus_trait = None;
                self.evolution_predecessor()
            }
        };
        self.step = previous;
        true
    }

    // =========================================================================
    // Evolution path
    // =========================================================================

    /// The step the evolution-trait step returns to, derived from the form type.
    fn evolution_predecessor(&self) -> WizardStep {
        match self.selected_form() {
            Some(form) if form.is_evolved() => WizardStep::EvolvedBase,
            Some(form) if form.is_hybrid() => WizardStep::HybridFeatures,
            _ => WizardStep::SelectForm,
        }
    }

    /// Whether the current step holds a finished configuration.
    fn configuration_complete(&self) -> bool {
        let Some(form) = self.selected_form() else {
            return false;
        };
        match self.step {
            WizardStep::SelectForm => !form.is_special(),
            WizardStep::EvolvedBase => self.draft.evolved_base_form_id.is_some(),
            // The exact feature count also gates the evolution path, not only
            // finishing with stress.
            WizardStep::HybridFeatures => self.hybrid_step_complete(WizardStep::HybridFeatures),
            _ => false,
        }
    }

    pub fn choose_evolution(&mut self) -> bool {
        if !self.configuration_complete() {
            return false;
        }
        self.step = WizardStep::EvolutionTrait;
        true
    }

    pub fn select_bonus_trait(&mut self, trait_key: &str) -> bool {
        if self.step != WizardStep::EvolutionTrait || !TRAIT_KEYS.contains(&trait_key) {
            return false;
        }
        self.draft.bonus_trait = Some(trait_key.to_string());
        true
    }

    // =========================================================================
    // Activation
    // =========================================================================

    fn special_config(&self) -> Option<SpecialConfig> {
        let form = self.selected_form()?;
        if form.is_evolved() {
            return Some(SpecialConfig::Evolved {
                evolved_base_form_id: self.draft.evolved_base_form_id.clone()?,
            });
        }
        if form.is_hybrid() {
            return Some(SpecialConfig::Hybrid {
                hybrid_base_form_ids: self.draft.hybrid_base_form_ids.clone(),
                selected_advantages: self.draft.selected_advantages.clone(),
                selected_features: self.draft.selected_features.clone(),
            });
        }
        None
    }

    fn finish(&mut self, path: ActivationPath) -> Option<BeastformActivation> {
        let form_id = self.draft.form_id.clone()?;
        let activation = BeastformActivation {
            form_id,
            path,
            special: self.special_config(),
        };
        tracing::debug!(
            form = %activation.form_id,
            method = ?activation.path.method(),
            "Beastform configured"
        );
        self.reset();
        Some(activation)
    }

    /// Pay with stress. Resets the wizard on success.
    pub fn activate_with_stress(&mut self) -> Option<BeastformActivation> {
        if !self.configuration_complete() {
            return None;
        }
        self.finish(ActivationPath::Stress)
    }

    /// Pay with evolution. Requires a chosen bonus trait; resets on success.
    pub fn activate_with_evolution(&mut self) -> Option<BeastformActivation> {
        if self.step != WizardStep::EvolutionTrait {
            return None;
        }
        let trait_key = self.draft.bonus_trait.clone()?;
        self.finish(ActivationPath::Evolution {
            bonus_trait: TraitBonus::new(trait_key, EVOLUTION_TRAIT_BONUS),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::infrastructure::testing::fixtures::{
        self, LEGENDARY_BEAST, LEGENDARY_HYBRID, MYTHIC_HYBRID,
    };

    fn to_features_step(wizard: &mut BeastformWizard<'_>) {
        assert!(wizard.select_form(LEGENDARY_HYBRID));
        assert!(wizard.toggle_hybrid_base("agile-scout"));
        assert!(wizard.toggle_hybrid_base("household-friend"));
        assert!(wizard.advance());
        for advantage in ["deceive", "locate", "sneak", "climb"] {
            assert!(wizard.toggle_advantage(advantage));
        }
        assert!(wizard.advance());
    }

    #[test]
    fn plain_form_activates_from_first_step() {
        let data = fixtures::game_data();
        let mut wizard = BeastformWizard::new(&data);
        assert!(wizard.select_form("pack-predator"));
        assert_eq!(wizard.step(), WizardStep::SelectForm);

        let activation = wizard.activate_with_stress().expect("activation");
        assert_eq!(activation.form_id, "pack-predator");
        assert_eq!(activation.path, ActivationPath::Stress);
        assert_eq!(activation.special, None);
        assert_eq!(wizard.draft(), &BeastformDraft::default());
    }

    #[test]
    fn unknown_form_is_ignored() {
        let data = fixtures::game_data();
        let mut wizard = BeastformWizard::new(&data);
        assert!(!wizard.select_form("griffon"));
        assert!(wizard.activate_with_stress().is_none());
    }

    #[test]
    fn evolved_form_needs_a_base_from_allowed_tiers() {
        let data = fixtures::game_data();
        let mut wizard = BeastformWizard::new(&data);
        assert!(wizard.select_form(LEGENDARY_BEAST));
        assert_eq!(wizard.step(), WizardStep::EvolvedBase);
        assert!(wizard.activate_with_stress().is_none());

        // tier 2 is outside the allowed tiers, special forms never qualify
        assert!(!wizard.select_evolved_base("armored-sentry"));
        assert!(!wizard.select_evolved_base(LEGENDARY_HYBRID));
        assert!(wizard.select_evolved_base("nimble-grazer"));

        let activation = wizard.activate_with_stress().expect("activation");
        assert_eq!(
            activation.special,
            Some(SpecialConfig::Evolved {
                evolved_base_form_id: "nimble-grazer".into()
            })
        );
    }

    #[test]
    fn evolution_path_carries_bonus_trait() {
        let data = fixtures::game_data();
        let mut wizard = BeastformWizard::new(&data);
        wizard.select_form(LEGENDARY_BEAST);
        assert!(!wizard.choose_evolution());
        wizard.select_evolved_base("agile-scout");
        assert!(wizard.choose_evolution());
        assert_eq!(wizard.step(), WizardStep::EvolutionTrait);

        assert!(wizard.activate_with_evolution().is_none());
        assert!(!wizard.select_bonus_trait("luck"));
        assert!(wizard.select_bonus_trait("instinct"));

        let activation = wizard.activate_with_evolution().expect("activation");
        assert_eq!(
            activation.path,
            ActivationPath::Evolution {
                bonus_trait: TraitBonus::new("instinct", EVOLUTION_TRAIT_BONUS)
            }
        );
        assert!(matches!(activation.special, Some(SpecialConfig::Evolved { .. })));
        assert_eq!(wizard.step(), WizardStep::SelectForm);
    }

    #[test]
    fn evolution_back_returns_to_the_form_specific_step() {
        let data = fixtures::game_data();

        let mut plain = BeastformWizard::new(&data);
        plain.select_form("agile-scout");
        plain.choose_evolution();
        plain.select_bonus_trait("agility");
        assert!(plain.back());
        assert_eq!(plain.step(), WizardStep::SelectForm);
        assert_eq!(plain.draft().bonus_trait, None);

        let mut evolved = BeastformWizard::new(&data);
        evolved.select_form(LEGENDARY_BEAST);
        evolved.select_evolved_base("agile-scout");
        evolved.choose_evolution();
        evolved.back();
        assert_eq!(evolved.step(), WizardStep::EvolvedBase);
        assert_eq!(evolved.draft().evolved_base_form_id.as_deref(), Some("agile-scout"));

        let mut hybrid = BeastformWizard::new(&data);
        to_features_step(&mut hybrid);
        hybrid.toggle_feature("Agile");
        assert!(!hybrid.choose_evolution());
        hybrid.toggle_feature("Companion");
        assert!(hybrid.choose_evolution());
        hybrid.back();
        assert_eq!(hybrid.step(), WizardStep::HybridFeatures);
        assert_eq!(hybrid.draft().selected_features.len(), 2);
    }

    #[test]
    fn hybrid_advance_requires_exact_counts() {
        let data = fixtures::game_data();
        let mut wizard = BeastformWizard::new(&data);
        wizard.select_form(LEGENDARY_HYBRID);
        assert_eq!(wizard.step(), WizardStep::HybridBases);

        wizard.toggle_hybrid_base("agile-scout");
        assert!(!wizard.advance());
        wizard.toggle_hybrid_base("pack-predator");
        // a third base exceeds the maximum of two
        assert!(!wizard.toggle_hybrid_base("nimble-grazer"));
        assert_eq!(wizard.draft().hybrid_base_form_ids, vec!["agile-scout", "pack-predator"]);
        // tier 3 is outside the allowed tiers
        assert!(!wizard.toggle_hybrid_base("great-predator"));
        assert!(wizard.advance());
    }

    #[test]
    fn hybrid_advantage_cap_is_a_no_op() {
        let data = fixtures::game_data();
        let mut wizard = BeastformWizard::new(&data);
        wizard.select_form(LEGENDARY_HYBRID);
        wizard.toggle_hybrid_base("agile-scout");
        wizard.toggle_hybrid_base("household-friend");
        wizard.advance();

        for advantage in ["deceive", "locate", "sneak", "climb"] {
            assert!(wizard.toggle_advantage(advantage));
        }
        assert!(!wizard.toggle_advantage("protect"));
        assert_eq!(
            wizard.draft().selected_advantages,
            vec!["deceive", "locate", "sneak", "climb"]
        );

        // advantages from unchosen forms are never offered
        assert!(wizard.toggle_advantage("sneak"));
        assert!(!wizard.toggle_advantage("sprint"));
        assert!(wizard.toggle_advantage("protect"));
    }

    #[test]
    fn features_toggle_by_name() {
        let data = fixtures::game_data();
        let mut wizard = BeastformWizard::new(&data);
        to_features_step(&mut wizard);

        assert_eq!(wizard.feature_pool().len(), 3);
        assert!(wizard.toggle_feature("Fragile"));
        assert!(wizard.toggle_feature("Fragile"));
        assert!(wizard.draft().selected_features.is_empty());
        assert!(!wizard.toggle_feature("Pack Hunting"));
    }

    #[test]
    fn back_clears_later_selections() {
        let data = fixtures::game_data();
        let mut wizard = BeastformWizard::new(&data);
        to_features_step(&mut wizard);
        wizard.toggle_feature("Agile");
        wizard.toggle_feature("Companion");

        assert!(wizard.back());
        assert_eq!(wizard.step(), WizardStep::HybridAdvantages);
        assert!(wizard.draft().selected_features.is_empty());
        assert_eq!(wizard.draft().selected_advantages.len(), 4);

        assert!(wizard.back());
        assert_eq!(wizard.step(), WizardStep::HybridBases);
        assert!(wizard.draft().selected_advantages.is_empty());
        assert_eq!(wizard.draft().hybrid_base_form_ids.len(), 2);

        assert!(wizard.back());
        assert_eq!(wizard.step(), WizardStep::SelectForm);
        assert!(wizard.draft().hybrid_base_form_ids.is_empty());
        assert!(!wizard.back());
    }

    #[test]
    fn mythic_hybrid_end_to_end() {
        let data = fixtures::game_data();
        let mut wizard = BeastformWizard::new(&data);
        assert!(wizard.select_form(MYTHIC_HYBRID));

        let bases = ["agile-scout", "household-friend", "nimble-grazer"];
        for base in bases {
            assert!(wizard.toggle_hybrid_base(base));
        }
        assert!(wizard.advance());

        let pool = wizard.advantage_pool();
        assert_eq!(pool.len(), 7);
        for advantage in pool.iter().take(5) {
            assert!(wizard.toggle_advantage(advantage));
        }
        assert!(wizard.advance());

        let features = wizard.feature_pool();
        assert_eq!(features.len(), 4);
        for feature in features.iter().take(3) {
            assert!(wizard.toggle_feature(&feature.name));
        }
        assert!(!wizard.toggle_feature(&features[3].name));

        let activation = wizard.activate_with_stress().expect("activation");
        assert_eq!(activation.form_id, MYTHIC_HYBRID);
        let Some(SpecialConfig::Hybrid {
            hybrid_base_form_ids,
            selected_advantages,
            selected_features,
        }) = activation.special
        else {
            panic!("expected hybrid config");
        };
        assert_eq!(hybrid_base_form_ids, bases);
        assert_eq!(selected_advantages, pool[..5].to_vec());
        let unique_advantages: BTreeSet<&str> =
            selected_advantages.iter().map(String::as_str).collect();
        assert_eq!(unique_advantages.len(), selected_advantages.len());
        let feature_names: BTreeSet<&str> =
            selected_features.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(selected_features.len(), 3);
        assert_eq!(feature_names.len(), 3);

        assert_eq!(wizard.step(), WizardStep::SelectForm);
        assert_eq!(wizard.draft(), &BeastformDraft::default());
    }
}
