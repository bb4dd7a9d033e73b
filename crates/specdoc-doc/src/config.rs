//! Run configuration for a lint pass.
//!
//! The configuration is owned by the caller and read-only to the linter.
//! Only the `lint` field matters to the engine itself: `false` disables
//! linting entirely, an object maps rule names to enable flags. Everything
//! else is carried as an opaque property bag that individual rules may
//! inspect (the insecure-URL rule scans it for `*URI` keys).
//!
//! Validation is deliberately permissive: any non-`false` `lint` value means
//! "enabled", unknown rule names are ignored, and a rule missing from the
//! map runs unless explicitly disabled.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Enable flag for a single rule: a plain boolean or a rule-specific
/// options value.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleFlag {
    /// Plain on/off.
    Bool(bool),
    /// Rule-specific options. Presence counts as enabled unless the value
    /// is an explicit falsy scalar (null, 0, empty string).
    Options(Value),
}

impl RuleFlag {
    /// Returns true unless the flag is explicitly falsy.
    pub fn is_enabled(&self) -> bool {
        match self {
            RuleFlag::Bool(b) => *b,
            RuleFlag::Options(value) => match value {
                Value::Null => false,
                Value::Number(n) => n.as_f64() != Some(0.0),
                Value::String(s) => !s.is_empty(),
                _ => true,
            },
        }
    }
}

impl<'de> Deserialize<'de> for RuleFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Bool(b) => RuleFlag::Bool(b),
            other => RuleFlag::Options(other),
        })
    }
}

impl Serialize for RuleFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RuleFlag::Bool(b) => serializer.serialize_bool(*b),
            RuleFlag::Options(value) => value.serialize(serializer),
        }
    }
}

/// The `lint` configuration field: `false` to disable everything, or a
/// map from rule name to [`RuleFlag`].
#[derive(Debug, Clone, PartialEq)]
pub enum LintConfig {
    /// Linting is switched off for the whole run.
    Disabled,
    /// Per-rule flags. An empty map enables every registered rule.
    Rules(HashMap<String, RuleFlag>),
}

impl Default for LintConfig {
    fn default() -> Self {
        LintConfig::Rules(HashMap::new())
    }
}

impl<'de> Deserialize<'de> for LintConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Bool(false) => LintConfig::Disabled,
            Value::Object(map) => {
                let rules = map
                    .into_iter()
                    .map(|(name, flag)| {
                        let flag = match flag {
                            Value::Bool(b) => RuleFlag::Bool(b),
                            other => RuleFlag::Options(other),
                        };
                        (name, flag)
                    })
                    .collect();
                LintConfig::Rules(rules)
            }
            // Any other value (true, strings, numbers) means "enabled".
            _ => LintConfig::Rules(HashMap::new()),
        })
    }
}

impl Serialize for LintConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LintConfig::Disabled => serializer.serialize_bool(false),
            LintConfig::Rules(rules) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(rules.len()))?;
                for (name, flag) in rules {
                    map.serialize_entry(name, flag)?;
                }
                map.end()
            }
        }
    }
}

/// Caller-owned run configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Lint enablement: `false` or a rule-name map.
    pub lint: LintConfig,
    /// True when the document is on a formal standards track.
    pub is_rec_track: bool,
    /// Remaining configuration properties, kept opaque.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Config {
    /// Returns true when `lint` is the global `false` kill switch.
    pub fn lint_disabled(&self) -> bool {
        matches!(self.lint, LintConfig::Disabled)
    }

    /// Returns true when the named rule may run: linting is not globally
    /// disabled and the rule is not explicitly switched off.
    pub fn rule_enabled(&self, name: &str) -> bool {
        match &self.lint {
            LintConfig::Disabled => false,
            LintConfig::Rules(rules) => rules.get(name).map_or(true, RuleFlag::is_enabled),
        }
    }

    /// Returns the opaque configuration property with the given key, if
    /// present.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
