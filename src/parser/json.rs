//! JSON well-formedness checks for settings files.

/// Parser for JSON settings files (settings.json, .claude.json).
pub struct JsonParser;

impl JsonParser {
    /// Whether `content` is one complete, well-formed JSON document.
    pub fn is_valid(content: &str) -> bool {
        serde_json::from_str::<serde::de::IgnoredAny>(content).is_ok()
    }
}
