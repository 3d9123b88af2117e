use log::error;
use serde::Deserialize;
use std::collections::HashMap;

// Wire shape of the per-instance configuration string: {"tags": {str: str}}.
#[derive(Debug, Deserialize)]
struct CustomProperties {
    tags: HashMap<String, String>,
}

// Parses the custom-properties string handed to the step at construction.
// A missing, blank, or unparseable string falls back to no custom tags;
// configuration problems must never abort construction.
pub fn parse_custom_tags(raw: Option<&str>) -> HashMap<String, String> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return HashMap::new(),
    };
    match serde_json::from_str::<CustomProperties>(raw) {
        Ok(properties) => properties.tags,
        Err(e) => {
            error!("error parsing custom properties string '{}': {}", raw, e);
            HashMap::new()
        }
    }
}
