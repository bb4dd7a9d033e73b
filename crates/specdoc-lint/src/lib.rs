//! Lint system for specdoc documents.
//!
//! Runs a set of independent, pluggable checks against an in-memory document
//! tree and reports structured diagnostics: offending nodes, a description,
//! a fix suggestion, and a help link. Linting is advisory; a failing rule
//! never blocks the surrounding document build.
//!
//! # Example
//!
//! ```
//! use specdoc_doc::{Config, Document};
//! use specdoc_lint::Linter;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let mut doc = Document::new();
//! let section = doc.create_element("section");
//! doc.append_child(doc.root(), section);
//!
//! let linter = Linter::with_default_rules("en");
//! let outcome = linter.lint(&doc, &Config::default()).await;
//!
//! for diagnostic in &outcome.diagnostics {
//!     eprintln!("{}: {}", diagnostic.rule, diagnostic.message());
//! }
//! # });
//! ```
//!
//! # Modules
//!
//! - [`hub`]: Process-wide publish/subscribe notification channel
//! - [`l10n`]: Localized rule metadata with English fallback
//! - [`pipeline`]: Build-pipeline entry point
//! - [`registry`]: The [`Linter`] engine
//! - [`report`]: Finding, diagnostic, and outcome types
//! - [`rules`]: The rule trait and the built-in rules
//! - [`sink`]: Report sink that marks nodes and publishes warnings

pub mod hub;
pub mod l10n;
pub mod pipeline;
pub mod registry;
pub mod report;
pub mod rules;
pub mod sink;

pub use hub::{NotificationHub, TOPIC_WARN};
pub use l10n::{RuleL10n, RuleMeta, DEFAULT_LANG};
pub use pipeline::{run, run_with_linter};
pub use registry::Linter;
pub use report::{Diagnostic, LintOutcome, RawFinding, RuleFailure};
pub use rules::{LintRule, RuleError};
pub use sink::{ReportSink, OFFENDING_CLASS};
