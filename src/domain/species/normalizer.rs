//! Classifier label to catalog key resolution

use std::collections::HashMap;

use super::data::BUILTIN_ALIASES;

/// Maps common and scientific names onto canonical catalog keys
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    aliases: HashMap<String, String>,
}

impl NameNormalizer {
    /// Build from `(alias, key)` pairs; aliases are stored lowercase
    pub fn new<'a>(aliases: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let aliases = aliases
            .into_iter()
            .map(|(alias, key)| (alias.trim().to_lowercase(), key.to_string()))
            .collect();

        Self { aliases }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_ALIASES)
    }

    /// Resolve a raw label, case-insensitively. Unknown labels yield `None`.
    pub fn normalize(&self, raw_label: &str) -> Option<&str> {
        self.aliases
            .get(&raw_label.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Distinct canonical keys the aliases point at
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.aliases.values().map(String::as_str)
    }
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::builtin()
    }
}
