//! The lint engine: rule registration and concurrent execution.

use crate::l10n::DEFAULT_LANG;
use crate::report::{Diagnostic, LintOutcome};
use crate::rules::{LintRule, NoHeadinglessSections, NoHttpProps, PrivSecSection};
use futures_util::future::join_all;
use specdoc_doc::{Config, Document};
use std::collections::HashSet;
use std::sync::Arc;

/// Registry of lint rules and orchestrator of lint passes.
///
/// The engine is an explicit instance with a controlled lifecycle: the
/// pipeline constructs one and passes it by reference to whoever registers
/// or runs rules. Tests construct their own isolated instances.
pub struct Linter {
    rules: Vec<Arc<dyn LintRule>>,
    names: HashSet<String>,
}

impl Linter {
    /// Creates an empty engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            names: HashSet::new(),
        }
    }

    /// Creates an engine with the built-in rules registered, their
    /// metadata resolved for the given language.
    pub fn with_default_rules(lang: &str) -> Self {
        let mut linter = Self::new();
        linter.register(Arc::new(NoHttpProps::new(lang)));
        linter.register(Arc::new(NoHeadinglessSections::new(lang)));
        linter.register(Arc::new(PrivSecSection::new(lang)));
        linter
    }

    /// Registers a rule. Idempotent: a rule whose name is already
    /// registered is not added again, so it cannot run twice in a pass.
    pub fn register(&mut self, rule: Arc<dyn LintRule>) {
        if self.names.insert(rule.name().to_string()) {
            self.rules.push(rule);
        }
    }

    /// Registers several rules in order.
    pub fn register_all(&mut self, rules: impl IntoIterator<Item = Arc<dyn LintRule>>) {
        for rule in rules {
            self.register(rule);
        }
    }

    /// Returns the registered rules in registration order.
    pub fn rules(&self) -> &[Arc<dyn LintRule>] {
        &self.rules
    }

    /// Returns the registered rule names in registration order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Returns the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs one lint pass: every enabled rule against the same document and
    /// configuration snapshot.
    ///
    /// All rule futures are launched together and awaited together; no rule
    /// waits on another, and the pass suspends until every rule resolves.
    /// Diagnostics come back in rule-registration order regardless of
    /// completion order, with each rule's own finding order preserved. A
    /// rule that errors is recorded in [`LintOutcome::failures`] and never
    /// suppresses the other rules' findings.
    ///
    /// When `conf.lint` is `false` the pass returns empty immediately, with
    /// no rule invoked and no side effects. This global switch is checked
    /// once here, not per rule.
    pub async fn lint(&self, doc: &Document, conf: &Config) -> LintOutcome {
        let mut outcome = LintOutcome::new();
        if conf.lint_disabled() {
            return outcome;
        }

        // Central enablement gate; rules also re-check their own flag.
        let active: Vec<&Arc<dyn LintRule>> = self
            .rules
            .iter()
            .filter(|rule| conf.rule_enabled(rule.name()))
            .collect();

        let results = join_all(active.iter().map(|rule| rule.evaluate(doc, conf))).await;

        for (rule, result) in active.iter().zip(results) {
            match result {
                Ok(findings) => {
                    for finding in findings {
                        outcome.add_diagnostic(Diagnostic::from(finding));
                    }
                }
                Err(error) => outcome.add_failure(rule.name(), error),
            }
        }
        outcome
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::with_default_rules(DEFAULT_LANG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RawFinding;
    use crate::rules::RuleError;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    /// Test rule that reports one finding, optionally after a delay.
    struct DelayedRule {
        name: &'static str,
        delay_ms: u64,
    }

    #[async_trait]
    impl LintRule for DelayedRule {
        fn name(&self) -> &str {
            self.name
        }

        async fn evaluate(
            &self,
            _doc: &Document,
            conf: &Config,
        ) -> Result<Vec<RawFinding>, RuleError> {
            if !conf.rule_enabled(self.name) {
                return Ok(Vec::new());
            }
            if self.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            }
            Ok(vec![RawFinding::new(self.name).with_occurrences(1)])
        }
    }

    /// Test rule that always errors.
    struct FailingRule;

    #[async_trait]
    impl LintRule for FailingRule {
        fn name(&self) -> &str {
            "always-fails"
        }

        async fn evaluate(
            &self,
            _doc: &Document,
            _conf: &Config,
        ) -> Result<Vec<RawFinding>, RuleError> {
            Err(RuleError::Evaluation("boom".into()))
        }
    }

    fn diagnostic_rules(outcome: &LintOutcome) -> Vec<&str> {
        outcome
            .diagnostics
            .iter()
            .map(|d| d.rule.as_str())
            .collect()
    }

    #[test]
    fn test_empty_engine() {
        let linter = Linter::new();
        assert!(linter.is_empty());
        assert_eq!(linter.len(), 0);
    }

    #[test]
    fn test_default_rules_registered() {
        let linter = Linter::with_default_rules("en");
        assert_eq!(
            linter.rule_names(),
            vec!["no-http-props", "no-headingless-sections", "privsec-section"]
        );
    }

    #[test]
    fn test_registration_is_idempotent() {
        let mut linter = Linter::new();
        linter.register(Arc::new(DelayedRule {
            name: "r1",
            delay_ms: 0,
        }));
        linter.register(Arc::new(DelayedRule {
            name: "r1",
            delay_ms: 0,
        }));
        assert_eq!(linter.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_registration_runs_once() {
        let mut linter = Linter::new();
        let rule: Arc<dyn LintRule> = Arc::new(DelayedRule {
            name: "r1",
            delay_ms: 0,
        });
        linter.register(Arc::clone(&rule));
        linter.register(rule);

        let outcome = linter.lint(&Document::new(), &Config::default()).await;
        assert_eq!(diagnostic_rules(&outcome), vec!["r1"]);
    }

    #[tokio::test]
    async fn test_lint_false_short_circuits() {
        let mut linter = Linter::new();
        linter.register(Arc::new(DelayedRule {
            name: "r1",
            delay_ms: 0,
        }));
        let conf: Config = serde_json::from_value(serde_json::json!({ "lint": false })).unwrap();

        let outcome = linter.lint(&Document::new(), &conf).await;
        assert!(outcome.is_clean());
    }

    #[tokio::test]
    async fn test_diagnostic_order_follows_registration_not_completion() {
        let mut linter = Linter::new();
        // The slow rule is registered first and must still come first.
        linter.register(Arc::new(DelayedRule {
            name: "slow",
            delay_ms: 30,
        }));
        linter.register(Arc::new(DelayedRule {
            name: "fast",
            delay_ms: 0,
        }));

        let outcome = linter.lint(&Document::new(), &Config::default()).await;
        assert_eq!(diagnostic_rules(&outcome), vec!["slow", "fast"]);
    }

    #[tokio::test]
    async fn test_failing_rule_does_not_suppress_others() {
        let mut linter = Linter::new();
        linter.register(Arc::new(DelayedRule {
            name: "before",
            delay_ms: 0,
        }));
        linter.register(Arc::new(FailingRule));
        linter.register(Arc::new(DelayedRule {
            name: "after",
            delay_ms: 0,
        }));

        let outcome = linter.lint(&Document::new(), &Config::default()).await;
        assert_eq!(diagnostic_rules(&outcome), vec!["before", "after"]);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].rule, "always-fails");
    }

    #[tokio::test]
    async fn test_central_gate_skips_disabled_rules() {
        // FailingRule never checks its own flag; the engine-side gate must
        // keep it from running at all.
        let mut linter = Linter::new();
        linter.register(Arc::new(FailingRule));
        let conf: Config =
            serde_json::from_value(serde_json::json!({ "lint": { "always-fails": false } }))
                .unwrap();

        let outcome = linter.lint(&Document::new(), &conf).await;
        assert!(outcome.is_clean());
    }

    #[tokio::test]
    async fn test_default_engine_flags_headingless_section() {
        let mut doc = Document::new();
        let section = doc.create_element("section");
        doc.append_child(doc.root(), section);

        let linter = Linter::default();
        let outcome = linter.lint(&doc, &Config::default()).await;
        assert_eq!(diagnostic_rules(&outcome), vec!["no-headingless-sections"]);
        assert_eq!(outcome.diagnostics[0].occurrences, 1);
    }
}
