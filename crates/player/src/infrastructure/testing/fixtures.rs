//! Shared test fixtures: a small catalog and a few cards.

use hearthsheet_domain::game_data::{
    Beastform, BeastformAttack, BeastformFeature, CardType, CompanionSpec, DamageType,
    DomainCard, GameClass, HybridConfig, SpecialForm, SpecialFormKind, Subclass, TraitBonus,
};
use hearthsheet_domain::StaticGameData;

pub const LEGENDARY_HYBRID: &str = "legendary-hybrid";
pub const MYTHIC_HYBRID: &str = "mythic-hybrid";
pub const LEGENDARY_BEAST: &str = "legendary-beast";

fn base_form(id: &str, tier: u8, advantages: &[&str], features: &[&str]) -> Beastform {
    Beastform {
        id: id.to_string(),
        name: id.replace('-', " "),
        tier,
        examples: Vec::new(),
        trait_bonus: TraitBonus::new("agility", 1),
        evasion_bonus: 1,
        attack: BeastformAttack {
            trait_name: "agility".to_string(),
            range: "Melee".to_string(),
            damage_dice: "d6".to_string(),
            damage_type: DamageType::Physical,
        },
        advantages: advantages.iter().map(|a| a.to_string()).collect(),
        features: features
            .iter()
            .map(|name| BeastformFeature::new(*name, format!("{} description", name)))
            .collect(),
        special: None,
    }
}

fn special_form(id: &str, tier: u8, kind: SpecialFormKind, allowed_tiers: &[u8]) -> Beastform {
    Beastform {
        special: Some(SpecialForm {
            kind,
            allowed_tiers: allowed_tiers.to_vec(),
        }),
        ..base_form(id, tier, &[], &[])
    }
}

pub fn beastforms() -> Vec<Beastform> {
    vec![
        base_form("agile-scout", 1, &["deceive", "locate", "sneak"], &["Agile", "Fragile"]),
        base_form("household-friend", 1, &["climb", "locate", "protect"], &["Companion", "Fragile"]),
        base_form("nimble-grazer", 1, &["leap", "sneak", "sprint"], &["Elusive Prey", "Fragile"]),
        base_form("pack-predator", 1, &["attack", "sneak", "sprint"], &["Hobbling Strike", "Pack Hunting"]),
        base_form("armored-sentry", 2, &["dig", "locate", "protect"], &["Armored Shell", "Cannonball"]),
        base_form("great-predator", 3, &["attack", "sneak", "sprint"], &["Carrier", "Vicious Maul"]),
        special_form(LEGENDARY_BEAST, 3, SpecialFormKind::Evolved, &[1]),
        special_form(
            LEGENDARY_HYBRID,
            3,
            SpecialFormKind::Hybrid(HybridConfig {
                base_form_count: 2,
                advantage_count: 4,
                feature_count: 2,
            }),
            &[1, 2],
        ),
        special_form(
            MYTHIC_HYBRID,
            4,
            SpecialFormKind::Hybrid(HybridConfig {
                base_form_count: 3,
                advantage_count: 5,
                feature_count: 3,
            }),
            &[1, 2, 3],
        ),
    ]
}

pub fn classes() -> Vec<GameClass> {
    let class = |name: &str, domains: [&str; 2], evasion: i32, hp: i32| GameClass {
        name: name.to_string(),
        description: String::new(),
        domains: domains.iter().map(|d| d.to_string()).collect(),
        starting_evasion: evasion,
        starting_hit_points: hp,
    };
    vec![
        class("Druid", ["Sage", "Arcana"], 10, 6),
        class("Ranger", ["Bone", "Sage"], 12, 6),
        class("Wizard", ["Codex", "Splendor"], 11, 5),
    ]
}

pub fn subclasses() -> Vec<Subclass> {
    let subclass = |name: &str, class_name: &str, companion: Option<CompanionSpec>| Subclass {
        name: name.to_string(),
        class_name: class_name.to_string(),
        description: String::new(),
        spellcast_trait: Some("instinct".to_string()),
        companion,
    };
    vec![
        subclass("Warden of the Elements", "Druid", None),
        subclass("Warden of Renewal", "Druid", None),
        subclass(
            "Beastbound",
            "Ranger",
            Some(CompanionSpec {
                kind: "Wolf".to_string(),
                starting_evasion: 10,
                starting_stress: 3,
                damage_die: "d6".to_string(),
                experience_slots: 2,
            }),
        ),
        subclass("Wayfinder", "Ranger", None),
        subclass("School of Knowledge", "Wizard", None),
    ]
}

pub fn domain_cards() -> Vec<DomainCard> {
    vec![
        DomainCard::new("Gifted Tracker", 1, "Sage").with_recall_cost(0),
        DomainCard::new("Nature's Tongue", 1, "Sage").with_type(CardType::Spell),
        DomainCard::new("Rune Ward", 1, "Arcana").with_type(CardType::Spell),
        DomainCard::new("Untouchable", 1, "Bone"),
        DomainCard::new("Book of Ava", 1, "Codex").with_type(CardType::Grimoire),
        DomainCard::new("Conjured Steeds", 2, "Sage").with_recall_cost(1),
        DomainCard::new("Cinder Grasp", 2, "Arcana").with_type(CardType::Spell),
        DomainCard::new("Deft Maneuvers", 2, "Bone"),
        DomainCard::new("Corrosive Projectile", 3, "Sage").with_hope_cost(1),
        DomainCard::new("Counterspell", 3, "Arcana").with_recall_cost(2),
    ]
}

pub fn game_data() -> StaticGameData {
    StaticGameData::new(classes(), subclasses(), domain_cards(), beastforms())
        .expect("fixture catalog is valid")
}

/// A card outside the catalog with the given name.
pub fn card(name: &str) -> DomainCard {
    DomainCard::new(name, 1, "Sage")
}
