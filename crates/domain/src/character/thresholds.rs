//! Damage threshold settings.

use serde::{Deserialize, Serialize};

/// One threshold. `auto` thresholds grow with the character's level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdValue {
    pub value: u32,
    #[serde(default)]
    pub auto: bool,
}

/// Major and severe damage thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdSettings {
    pub major: ThresholdValue,
    pub severe: ThresholdValue,
}

impl ThresholdSettings {
    /// Fixed, player-entered thresholds.
    pub fn manual(major: u32, severe: u32) -> Self {
        Self {
            major: ThresholdValue {
                value: major,
                auto: false,
            },
            severe: ThresholdValue {
                value: severe,
                auto: false,
            },
        }
    }

    /// Base thresholds that add the character level.
    pub fn automatic(base_major: u32, base_severe: u32) -> Self {
        Self {
            major: ThresholdValue {
                value: base_major,
                auto: true,
            },
            severe: ThresholdValue {
                value: base_severe,
                auto: true,
            },
        }
    }

    /// Effective `(major, severe)` at the given level.
    pub fn effective(&self, level: u8) -> (u32, u32) {
        let resolve = |t: ThresholdValue| {
            if t.auto {
                t.value.saturating_add(u32::from(level))
            } else {
                t.value
            }
        };
        (resolve(self.major), resolve(self.severe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn automatic_thresholds_add_level() {
        let thresholds = ThresholdSettings::automatic(5, 11);
        assert_eq!(thresholds.effective(3), (8, 14));
    }

    #[test]
    fn automatic_thresholds_saturate_at_the_maximum() {
        let thresholds: ThresholdSettings = serde_json::from_str(
            r#"{"major":{"value":4294967295,"auto":true},"severe":{"value":4294967294,"auto":true}}"#,
        )
        .expect("deserialize");
        assert_eq!(thresholds.effective(3), (u32::MAX, u32::MAX));
    }

    #[test]
    fn manual_thresholds_are_fixed() {
        let thresholds = ThresholdSettings::manual(7, 14);
        assert_eq!(thresholds.effective(9), (7, 14));
    }

    #[test]
    fn legacy_numeric_shape_is_not_the_current_shape() {
        let parsed = serde_json::from_str::<ThresholdSettings>(r#"{"major": 7, "severe": 14}"#);
        assert!(parsed.is_err());
    }
}
