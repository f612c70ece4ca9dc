//! Standard condition descriptions.

/// Default description for a standard condition, keyed case-insensitively.
pub fn default_condition_description(name: &str) -> Option<&'static str> {
    match name.trim().to_lowercase().as_str() {
        "hidden" => Some(
            "Out of sight; rolls against you have disadvantage until you are seen or attack.",
        ),
        "restrained" => Some("You can't move, but can still take actions from where you are."),
        "vulnerable" => Some("Rolls targeting you have advantage."),
        _ => None,
    }
}
