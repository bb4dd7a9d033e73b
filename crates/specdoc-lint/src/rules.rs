//! Lint rule trait and the built-in rules.

use crate::report::RawFinding;
use async_trait::async_trait;
use specdoc_doc::{Config, Document};

pub mod no_headingless_sections;
pub mod no_http_props;
pub mod privsec_section;

pub use no_headingless_sections::NoHeadinglessSections;
pub use no_http_props::NoHttpProps;
pub use privsec_section::PrivSecSection;

/// A named diagnostic check against a document and configuration pair.
///
/// Rules are pure: given the same document and configuration they must
/// report the same findings, and they must not mutate either argument.
/// A rule summarizes all of its violations in a single finding whose node
/// list carries every offending element; it does not emit one finding per
/// node. Rules are expected to complete within the document-ready
/// lifecycle; the engine imposes no timeout, so a hung rule hangs the pass.
#[async_trait]
pub trait LintRule: Send + Sync {
    /// Unique rule name (e.g., `"no-headingless-sections"`).
    fn name(&self) -> &str;

    /// Runs the check, returning zero or more findings.
    ///
    /// An empty vector means no violation. Implementations re-check their
    /// own flag in `conf.lint` so enablement stays overridable per
    /// invocation even when invoked outside the engine.
    async fn evaluate(&self, doc: &Document, conf: &Config)
        -> Result<Vec<RawFinding>, RuleError>;
}

/// Errors a rule can report during evaluation.
///
/// These travel on their own channel ([`crate::report::RuleFailure`]); they
/// are never folded into diagnostics and never abort the pass.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The rule could not complete its check.
    #[error("rule evaluation failed: {0}")]
    Evaluation(String),

    /// The document is missing something the rule requires.
    #[error("document not usable for this rule: {0}")]
    Document(String),
}
