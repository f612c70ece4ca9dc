//! Versioned upgrades for persisted field shapes.

use serde_json::{json, Map, Value};

/// A named upgrade from an older persisted shape to the current one.
///
/// Returns `None` when the input is not the shape this migration handles.
#[derive(Clone, Copy)]
pub struct FieldMigration {
    pub name: &'static str,
    pub apply: fn(Value) -> Option<Value>,
}

/// Thresholds were once stored as bare numbers: `{major: 5, severe: 11}`.
pub const LEGACY_THRESHOLDS_V1: FieldMigration = FieldMigration {
    name: "legacy_thresholds_v1",
    apply: legacy_thresholds_v1,
};

/// Migrations for the thresholds field, oldest first.
pub const THRESHOLD_MIGRATIONS: &[FieldMigration] = &[LEGACY_THRESHOLDS_V1];

fn legacy_thresholds_v1(raw: Value) -> Option<Value> {
    let Value::Object(fields) = raw else {
        return None;
    };
    let major = fields.get("major")?.as_u64()?;
    let severe = fields.get("severe")?.as_u64()?;

    let mut upgraded = Map::new();
    upgraded.insert("major".into(), json!({ "value": major, "auto": false }));
    upgraded.insert("severe".into(), json!({ "value": severe, "auto": false }));
    Some(Value::Object(upgraded))
}
