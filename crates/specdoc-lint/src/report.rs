//! Finding, diagnostic, and lint-outcome types.

use crate::l10n::RuleMeta;
use crate::rules::RuleError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use specdoc_doc::NodeId;

/// A single rule's raw result for one lint pass.
///
/// The `Default` impl is the baseline template: unknown rule, empty strings,
/// zero occurrences, no offending nodes. Rules fill in what they have and
/// the engine merges the rest from the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFinding {
    /// Name of the rule that produced this finding.
    pub rule: String,
    /// What the rule found.
    pub description: String,
    /// How to address it.
    pub how_to_fix: String,
    /// Where to get more help.
    pub help: String,
    /// Number of violations. Equals `offending_nodes.len()` when the rule
    /// reports nodes structurally; node-free rules count independently.
    pub occurrences: usize,
    /// Document nodes implicated by the finding. May be empty.
    pub offending_nodes: Vec<NodeId>,
}

impl Default for RawFinding {
    fn default() -> Self {
        Self {
            rule: "unknown".to_string(),
            description: String::new(),
            how_to_fix: String::new(),
            help: String::new(),
            occurrences: 0,
            offending_nodes: Vec::new(),
        }
    }
}

impl RawFinding {
    /// Creates a finding for the named rule, everything else at baseline.
    pub fn new(rule: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            ..Self::default()
        }
    }

    /// Builder method to fill description, fix, and help from resolved
    /// rule metadata.
    pub fn with_meta(mut self, meta: &RuleMeta) -> Self {
        self.description = meta.description.clone();
        self.how_to_fix = meta.how_to_fix.clone();
        self.help = meta.help.clone();
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the fix suggestion.
    pub fn with_how_to_fix(mut self, how_to_fix: impl Into<String>) -> Self {
        self.how_to_fix = how_to_fix.into();
        self
    }

    /// Builder method to set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Builder method to set the occurrence count.
    pub fn with_occurrences(mut self, occurrences: usize) -> Self {
        self.occurrences = occurrences;
        self
    }

    /// Builder method to set the offending nodes.
    pub fn with_offending_nodes(mut self, nodes: Vec<NodeId>) -> Self {
        self.offending_nodes = nodes;
        self
    }
}

/// A finding after the engine merged it over the baseline defaults.
/// Consumed once by the report sink, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Name of the rule that produced this diagnostic.
    pub rule: String,
    /// What the rule found.
    pub description: String,
    /// How to address it.
    pub how_to_fix: String,
    /// Where to get more help.
    pub help: String,
    /// Number of violations.
    pub occurrences: usize,
    /// Document nodes to mark for highlighting.
    pub offending_nodes: Vec<NodeId>,
}

impl Diagnostic {
    /// Composes the human-readable message: description, fix suggestion,
    /// and help text, single-space separated and trimmed.
    pub fn message(&self) -> String {
        format!("{} {} {}", self.description, self.how_to_fix, self.help)
            .trim()
            .to_string()
    }
}

impl From<RawFinding> for Diagnostic {
    fn from(finding: RawFinding) -> Self {
        Self {
            rule: finding.rule,
            description: finding.description,
            how_to_fix: finding.how_to_fix,
            help: finding.help,
            occurrences: finding.occurrences,
            offending_nodes: finding.offending_nodes,
        }
    }
}

/// A rule that failed during evaluation. Kept apart from diagnostics so a
/// buggy rule is surfaced rather than silently dropped or mistaken for a
/// document problem.
#[derive(Debug)]
pub struct RuleFailure {
    /// Name of the rule that failed.
    pub rule: String,
    /// The error it reported.
    pub error: RuleError,
}

impl Serialize for RuleFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RuleFailure", 2)?;
        state.serialize_field("rule", &self.rule)?;
        state.serialize_field("error", &self.error.to_string())?;
        state.end()
    }
}

/// Everything one lint pass produced: diagnostics in rule-registration
/// order, plus any per-rule failures.
#[derive(Debug, Default, Serialize)]
pub struct LintOutcome {
    /// Merged diagnostics across all rules.
    pub diagnostics: Vec<Diagnostic>,
    /// Rules that errored instead of reporting.
    pub failures: Vec<RuleFailure>,
}

impl LintOutcome {
    /// Creates an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Records a rule failure.
    pub fn add_failure(&mut self, rule: impl Into<String>, error: RuleError) {
        self.failures.push(RuleFailure {
            rule: rule.into(),
            error,
        });
    }

    /// Returns true if the pass produced neither diagnostics nor failures.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.failures.is_empty()
    }
}
