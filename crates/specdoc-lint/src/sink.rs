//! Report sink: turns a lint outcome into user-visible warnings and
//! document markers.

use crate::hub::{NotificationHub, TOPIC_WARN};
use crate::report::LintOutcome;
use specdoc_doc::Document;

/// Class added to every offending node so downstream rendering can
/// highlight it.
pub const OFFENDING_CLASS: &str = "specdoc-offending-element";

/// Consumes lint outcomes: marks offending nodes, traces each diagnostic,
/// and publishes composed messages on the `"warn"` topic.
pub struct ReportSink {
    hub: NotificationHub,
}

impl ReportSink {
    /// Creates a sink publishing to the given hub.
    pub fn new(hub: NotificationHub) -> Self {
        Self { hub }
    }

    /// Emits every diagnostic in the outcome.
    ///
    /// Runs strictly after the lint pass has completed, so marking nodes
    /// cannot interleave with rule evaluation. Publishing is
    /// fire-and-forget; nothing here blocks the caller or retries. Rule
    /// failures are logged, never converted into diagnostics.
    pub fn emit(&self, doc: &mut Document, outcome: &LintOutcome) {
        for diagnostic in &outcome.diagnostics {
            for &node in &diagnostic.offending_nodes {
                doc.add_class(node, OFFENDING_CLASS);
            }
            tracing::trace!(
                rule = %diagnostic.rule,
                description = %diagnostic.description,
                offending_nodes = ?diagnostic.offending_nodes,
                "lint diagnostic"
            );
            self.hub.publish(TOPIC_WARN, diagnostic.message());
        }
        for failure in &outcome.failures {
            tracing::warn!(rule = %failure.rule, error = %failure.error, "lint rule failed");
        }
    }
}
