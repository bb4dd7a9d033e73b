//! Lint rule `no-headingless-sections`.
//!
//! Checks that every `section` in the document starts with a heading
//! element (`h1`-`h6`).

use crate::l10n::{RuleL10n, RuleMeta};
use crate::report::RawFinding;
use crate::rules::{LintRule, RuleError};
use async_trait::async_trait;
use regex::Regex;
use specdoc_doc::{Config, Document, NodeId};
use std::sync::OnceLock;

/// Name this rule is registered and configured under.
pub const RULE_NAME: &str = "no-headingless-sections";

const HEADING_PATTERN: &str = r"^h[1-6]$";

static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();

fn heading_regex() -> &'static Regex {
    HEADING_REGEX.get_or_init(|| Regex::new(HEADING_PATTERN).expect("invalid regex pattern"))
}

fn l10n() -> RuleL10n {
    RuleL10n::new(RuleMeta::new(
        "All sections must start with a `h2-6` element.",
        "Add a `h2-6` to the offending section or use a `<div>`.",
        "See developer console.",
    ))
    .with(
        "nl",
        RuleMeta::new(
            "Alle secties moeten beginnen met een `h2-6` element.",
            "Voeg een `h2-6` toe aan de conflicterende sectie of gebruik een `<div>`.",
            "Zie de developer console.",
        ),
    )
}

/// Flags sections whose first child element is missing or not a heading.
pub struct NoHeadinglessSections {
    meta: RuleMeta,
}

impl NoHeadinglessSections {
    /// Creates the rule with metadata resolved for the given language.
    pub fn new(lang: &str) -> Self {
        Self {
            meta: l10n().resolve(lang).clone(),
        }
    }
}

fn has_no_heading(doc: &Document, section: NodeId) -> bool {
    match doc.first_element_child(section) {
        None => true,
        Some(first) => !heading_regex().is_match(doc.tag_name(first)),
    }
}

#[async_trait]
impl LintRule for NoHeadinglessSections {
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

        let offending: Vec<NodeId> = doc
            .query_all(&["section"])
            .into_iter()
            .filter(|&section| has_no_heading(doc, section))
            .collect();

        if offending.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![RawFinding::new(RULE_NAME)
            .with_meta(&self.meta)
            .with_occurrences(offending.len())
            .with_offending_nodes(offending)])
    }
}
