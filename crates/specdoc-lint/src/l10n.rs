//! Localized rule metadata.
//!
//! Each rule carries a map from language code to its user-facing strings.
//! Resolution happens once, when the rule is constructed, falling back to
//! English for languages the rule does not cover. A language change
//! mid-process is therefore not observed until rules are re-registered.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fallback language for rules that do not cover the configured one.
pub const DEFAULT_LANG: &str = "en";

/// User-facing strings for one rule in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMeta {
    /// What the rule found.
    pub description: String,
    /// How to address it.
    pub how_to_fix: String,
    /// Where to get more help.
    pub help: String,
}

impl RuleMeta {
    /// Creates metadata from its three parts.
    pub fn new(
        description: impl Into<String>,
        how_to_fix: impl Into<String>,
        help: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            how_to_fix: how_to_fix.into(),
            help: help.into(),
        }
    }
}

/// Per-language metadata for a rule, with a mandatory English default.
#[derive(Debug, Clone)]
pub struct RuleL10n {
    default: RuleMeta,
    other: HashMap<String, RuleMeta>,
}

impl RuleL10n {
    /// Creates a table with the English metadata as the fallback.
    pub fn new(default: RuleMeta) -> Self {
        Self {
            default,
            other: HashMap::new(),
        }
    }

    /// Builder method to add metadata for another language.
    pub fn with(mut self, lang: impl Into<String>, meta: RuleMeta) -> Self {
        self.other.insert(lang.into(), meta);
        self
    }

    /// Resolves metadata for a language, falling back to English.
    pub fn resolve(&self, lang: &str) -> &RuleMeta {
        if lang == DEFAULT_LANG {
            return &self.default;
        }
        self.other.get(lang).unwrap_or(&self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> RuleL10n {
        RuleL10n::new(RuleMeta::new("english", "fix it", "help")).with(
            "nl",
            RuleMeta::new("nederlands", "repareer het", "hulp"),
        )
    }

    #[test]
    fn test_resolves_known_language() {
        assert_eq!(table().resolve("nl").description, "nederlands");
    }

    #[test]
    fn test_falls_back_to_english() {
        assert_eq!(table().resolve("fr").description, "english");
        assert_eq!(table().resolve("en").description, "english");
    }
}
