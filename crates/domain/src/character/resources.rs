//! Resource pools (hit points, stress, hope, ...).
//!
//! Every pool is a `{current, max}` pair. Deltas clamp instead of failing,
//! so `0 <= current <= max` holds after any update.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A bounded `{current, max}` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePool {
    pub current: i32,
    pub max: i32,
}

impl ResourcePool {
    pub fn new(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }

    /// A pool filled to its maximum.
    pub fn full(max: i32) -> Self {
        Self::new(max, max)
    }

    /// A pool at zero.
    pub fn empty(max: i32) -> Self {
        Self::new(0, max)
    }

    /// Apply `delta` to `current`, clamped into `[floor.min(max), max]`.
    ///
    /// Returns whether `current` changed.
    pub fn apply_delta(&mut self, delta: i32, floor: i32) -> bool {
        let low = floor.min(self.max).max(0);
        let next = self.current.saturating_add(delta).clamp(low, self.max);
        let changed = next != self.current;
        self.current = next;
        changed
    }

    /// Apply `delta` to `max` (never below `floor`), then pull `current`
    /// back into range. Growing `max` never raises `current`.
    pub fn apply_max_delta(&mut self, delta: i32, floor: i32) -> bool {
        let before = *self;
        self.max = self.max.saturating_add(delta).max(floor);
        self.current = self.current.clamp(0, self.max);
        *self != before
    }

    /// Whether the pool satisfies `0 <= current <= max`.
    pub fn is_valid(&self) -> bool {
        self.max >= 0 && (0..=self.max).contains(&self.current)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.current == self.max
    }
}

/// Which pool an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Hp,
    Stress,
    Hope,
    ArmorScore,
    Evasion,
    Proficiency,
    Gold,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        Self::Hp,
        Self::Stress,
        Self::Hope,
        Self::ArmorScore,
        Self::Evasion,
        Self::Proficiency,
        Self::Gold,
    ];

    /// Lowest allowed `max`.
    pub fn max_floor(self) -> i32 {
        match self {
            Self::Hp | Self::Stress | Self::Hope | Self::Proficiency => 1,
            Self::ArmorScore | Self::Evasion | Self::Gold => 0,
        }
    }

    /// Lowest allowed `current`.
    pub fn current_floor(self) -> i32 {
        match self {
            Self::Proficiency => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hp => "hp",
            Self::Stress => "stress",
            Self::Hope => "hope",
            Self::ArmorScore => "armorScore",
            Self::Evasion => "evasion",
            Self::Proficiency => "proficiency",
            Self::Gold => "gold",
        };
        f.write_str(name)
    }
}

/// All resource pools of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    pub hp: ResourcePool,
    pub stress: ResourcePool,
    pub hope: ResourcePool,
    pub armor_score: ResourcePool,
    pub evasion: ResourcePool,
    pub proficiency: ResourcePool,
    pub gold: ResourcePool,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            hp: ResourcePool::full(6),
            stress: ResourcePool::empty(6),
            hope: ResourcePool::new(2, 6),
            armor_score: ResourcePool::empty(0),
            evasion: ResourcePool::full(10),
            proficiency: ResourcePool::new(1, 6),
            gold: ResourcePool::empty(999),
        }
    }
}

impl Resources {
    pub fn get(&self, kind: ResourceKind) -> &ResourcePool {
        match kind {
            ResourceKind::Hp => &self.hp,
            ResourceKind::Stress => &self.stress,
            ResourceKind::Hope => &self.hope,
            ResourceKind::ArmorScore => &self.armor_score,
            ResourceKind::Evasion => &self.evasion,
            ResourceKind::Proficiency => &self.proficiency,
            ResourceKind::Gold => &self.gold,
        }
    }

    pub fn get_mut(&mut self, kind: ResourceKind) -> &mut ResourcePool {
        match kind {
            ResourceKind::Hp => &mut self.hp,
            ResourceKind::Stress => &mut self.stress,
            ResourceKind::Hope => &mut self.hope,
            ResourceKind::ArmorScore => &mut self.armor_score,
            ResourceKind::Evasion => &mut self.evasion,
            ResourceKind::Proficiency => &mut self.proficiency,
            ResourceKind::Gold => &mut self.gold,
        }
    }

    /// Apply a delta to `current` of the given pool.
    pub fn apply(&mut self, kind: ResourceKind, delta: i32) -> bool {
        self.get_mut(kind).apply_delta(delta, kind.current_floor())
    }

    /// Apply a delta to `max` of the given pool.
    pub fn apply_max(&mut self, kind: ResourceKind, delta: i32) -> bool {
        let pool = self.get_mut(kind);
        let changed = pool.apply_max_delta(delta, kind.max_floor());
        // Proficiency keeps its current floor even after max shrinks.
        let floor_fix = pool.apply_delta(0, kind.current_floor());
        changed || floor_fix
    }

    /// Whether every pool satisfies its bounds and floors.
    pub fn is_valid(&self) -> bool {
        ResourceKind::ALL.iter().all(|kind| {
            let pool = self.get(*kind);
            pool.is_valid() && pool.max >= kind.max_floor()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_clamps_to_bounds() {
        let mut pool = ResourcePool::new(3, 6);
        assert!(pool.apply_delta(10, 0));
        assert_eq!(pool.current, 6);
        assert!(pool.apply_delta(-100, 0));
        assert_eq!(pool.current, 0);
        assert!(!pool.apply_delta(-1, 0));
    }

    #[test]
    fn delta_survives_extreme_values() {
        let mut pool = ResourcePool::new(3, 6);
        pool.apply_delta(i32::MAX, 0);
        assert_eq!(pool.current, 6);
        pool.apply_delta(i32::MIN, 0);
        assert_eq!(pool.current, 0);
    }

    #[test]
    fn shrinking_max_pulls_current_down() {
        let mut pool = ResourcePool::new(8, 10);
        pool.apply_max_delta(-5, 1);
        assert_eq!(pool, ResourcePool::new(5, 5));
    }

    #[test]
    fn growing_max_leaves_current() {
        let mut pool = ResourcePool::new(3, 10);
        pool.apply_max_delta(5, 1);
        assert_eq!(pool.current, 3);
        assert_eq!(pool.max, 15);
    }

    #[test]
    fn max_respects_floor() {
        let mut resources = Resources::default();
        resources.apply_max(ResourceKind::Hp, -100);
        assert_eq!(resources.hp.max, 1);
        resources.apply_max(ResourceKind::ArmorScore, -100);
        assert_eq!(resources.armor_score.max, 0);
    }

    #[test]
    fn proficiency_never_drops_below_one() {
        let mut resources = Resources::default();
        resources.apply(ResourceKind::Proficiency, -5);
        assert_eq!(resources.proficiency.current, 1);
        resources.apply_max(ResourceKind::Proficiency, -10);
        assert_eq!(resources.proficiency, ResourcePool::new(1, 1));
    }

    #[test]
    fn default_resources_are_valid() {
        assert!(Resources::default().is_valid());
        let mut broken = Resources::default();
        broken.hp = ResourcePool {
            current: 9,
            max: 3,
        };
        assert!(!broken.is_valid());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Resources::default()).expect("serialize");
        assert!(json.get("armorScore").is_some());
        assert_eq!(json["hp"]["max"], 6);
    }
}
