//! Lint rule `privsec-section`.
//!
//! Documents on a formal standards track must carry a privacy and/or
//! security considerations section. The match looks for "privacy" or
//! "security", and "considerations", in any order, case-insensitive.

use crate::l10n::{RuleL10n, RuleMeta};
use crate::report::RawFinding;
use crate::rules::{LintRule, RuleError};
use async_trait::async_trait;
use regex::Regex;
use specdoc_doc::{Config, Document};
use std::sync::OnceLock;

/// Name this rule is registered and configured under.
pub const RULE_NAME: &str = "privsec-section";

const PRIV_OR_SEC_PATTERN: &str = r"(?im)(privacy|security)";
const CONSIDERATIONS_PATTERN: &str = r"(?im)(considerations)";

static PRIV_OR_SEC_REGEX: OnceLock<Regex> = OnceLock::new();
static CONSIDERATIONS_REGEX: OnceLock<Regex> = OnceLock::new();

fn priv_or_sec_regex() -> &'static Regex {
    PRIV_OR_SEC_REGEX.get_or_init(|| Regex::new(PRIV_OR_SEC_PATTERN).expect("invalid regex pattern"))
}

fn considerations_regex() -> &'static Regex {
    CONSIDERATIONS_REGEX
        .get_or_init(|| Regex::new(CONSIDERATIONS_PATTERN).expect("invalid regex pattern"))
}

fn l10n() -> RuleL10n {
    RuleL10n::new(RuleMeta::new(
        "Document must have a Privacy and/or Security Considerations section.",
        "Add a privacy and/or security considerations section.",
        "See the [Self-Review Questionnaire](https://w3ctag.github.io/security-questionnaire/).",
    ))
}

/// Requires rec-track documents to have privacy/security considerations.
pub struct PrivSecSection {
    meta: RuleMeta,
}

impl PrivSecSection {
    /// Creates the rule with metadata resolved for the given language.
    pub fn new(lang: &str) -> Self {
        Self {
            meta: l10n().resolve(lang).clone(),
        }
    }
}

fn has_priv_sec_considerations(doc: &Document) -> bool {
    doc.query_all(&["h2", "h3", "h4", "h5", "h6"])
        .into_iter()
        .any(|heading| {
            let text = doc.text_content(heading);
            let says_priv_or_sec = priv_or_sec_regex().is_match(&text);
            let says_considerations = considerations_regex().is_match(&text);
            // A privacy/security match alone satisfies the rule; a missing
            // considerations match never overrides it.
            (says_priv_or_sec && says_considerations) || says_priv_or_sec
        })
}

#[async_trait]
impl LintRule for PrivSecSection {
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
        if !conf.is_rec_track {
            return Ok(Vec::new());
        }
        if has_priv_sec_considerations(doc) {
            return Ok(Vec::new());
        }

        Ok(vec![RawFinding::new(RULE_NAME)
            .with_meta(&self.meta)
            .with_occurrences(1)])
    }
}
