//! Level and tier bands.

/// Lowest character level.
pub const MIN_LEVEL: u8 = 1;

/// Highest character level.
pub const MAX_LEVEL: u8 = 10;

/// Clamp an arbitrary level request into `[MIN_LEVEL, MAX_LEVEL]`.
pub fn clamp_level(level: i32) -> u8 {
    level.clamp(i32::from(MIN_LEVEL), i32::from(MAX_LEVEL)) as u8
}

/// Tier for a (clamped) level.
///
/// | Level | Tier |
/// |-------|------|
/// | 1     | 1    |
/// | 2-4   | 2    |
/// | 5-7   | 3    |
/// | 8-10  | 4    |
pub fn tier_for_level(level: u8) -> u8 {
    match level {
        0 | 1 => 1,
        2..=4 => 2,
        5..=7 => 3,
        _ => 4,
    }
}

/// Human-readable level range of a tier ("1", "2-4", ...).
pub fn tier_label(tier: u8) -> &'static str {
    match tier {
        0 | 1 => "1",
        2 => "2-4",
        3 => "5-7",
        _ => "8-10",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_level_bands() {
        assert_eq!(tier_for_level(1), 1);
        assert_eq!(tier_for_level(2), 2);
        assert_eq!(tier_for_level(4), 2);
        assert_eq!(tier_for_level(5), 3);
        assert_eq!(tier_for_level(7), 3);
        assert_eq!(tier_for_level(8), 4);
        assert_eq!(tier_for_level(10), 4);
    }

    #[test]
    fn clamp_level_bounds() {
        assert_eq!(clamp_level(-3), 1);
        assert_eq!(clamp_level(0), 1);
        assert_eq!(clamp_level(6), 6);
        assert_eq!(clamp_level(42), 10);
    }

    #[test]
    fn tier_labels() {
        assert_eq!(tier_label(1), "1");
        assert_eq!(tier_label(3), "5-7");
    }
}
