//! Lint rule `no-http-props`.
//!
//! Makes sure no configuration property that names a URL resolves to an
//! insecure `http://` address. Only meaningful when the document itself is
//! served over http/https; local and file contexts are skipped entirely.

use crate::l10n::{RuleL10n, RuleMeta};
use crate::report::RawFinding;
use crate::rules::{LintRule, RuleError};
use async_trait::async_trait;
use specdoc_doc::{Config, Document};

/// Name this rule is registered and configured under.
pub const RULE_NAME: &str = "no-http-props";

/// Configuration keys ending in this suffix are treated as URL-valued.
const URI_KEY_SUFFIX: &str = "URI";

/// Legacy key that predates the `*URI` naming convention.
const LEGACY_URI_KEY: &str = "prevED";

fn l10n() -> RuleL10n {
    RuleL10n::new(RuleMeta::new(
        "Insecure URLs are not allowed in the document configuration.",
        "",
        "",
    ))
}

/// Formats the fix suggestion for a set of offending configuration keys.
///
/// The key list is scoped to one invocation; findings from earlier passes
/// never leak into it.
fn format_how_to_fix(offending_keys: &[String]) -> String {
    let items = offending_keys
        .iter()
        .map(|key| format!("`{key}`"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Please change the following properties to `https://`: {items}.")
}

/// Flags configuration properties that resolve to insecure URLs.
pub struct NoHttpProps {
    meta: RuleMeta,
}

impl NoHttpProps {
    /// Creates the rule with metadata resolved for the given language.
    pub fn new(lang: &str) -> Self {
        Self {
            meta: l10n().resolve(lang).clone(),
        }
    }
}

#[async_trait]
impl LintRule for NoHttpProps {
    fn name(&self) -> &str {
        RULE_NAME
    }

    async fn evaluate(
        &self,
        doc: &Document,
        conf: &Config,
    ) -> Result<Vec<RawFinding>, RuleError> {
        if !conf.rule_enabled(RULE_NAME) {
            return Ok(Vec::new());
        }

        // The check only makes sense over http/https.
        let location = match doc.location() {
            Some(location) if matches!(location.scheme(), "http" | "https") => location,
            _ => return Ok(Vec::new()),
        };

        let mut offending_keys = Vec::new();
        for (key, value) in &conf.extra {
            // The name check is cheap; resolution is the expensive step.
            if !(key.ends_with(URI_KEY_SUFFIX) || key == LEGACY_URI_KEY) {
                continue;
            }
            let candidate = match value.as_str() {
                Some(candidate) => candidate,
                None => continue,
            };
            // A value that fails to resolve is advisory-only: not flagged.
            match location.join(candidate) {
                Ok(resolved) if resolved.scheme() == "http" => {
                    offending_keys.push(key.clone());
                }
                _ => {}
            }
        }

        if offending_keys.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![RawFinding::new(RULE_NAME)
            .with_description(&self.meta.description)
            .with_how_to_fix(format_how_to_fix(&offending_keys))
            .with_occurrences(offending_keys.len())])
    }
}
