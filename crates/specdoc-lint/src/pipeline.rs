//! Build-pipeline entry point.
//!
//! The document build invokes [`run`] once per document. Linting is
//! advisory: the pipeline is signalled to continue immediately via
//! `on_started`, and nothing a rule does can block or fail the build.

use crate::hub::NotificationHub;
use crate::l10n::DEFAULT_LANG;
use crate::registry::Linter;
use crate::report::LintOutcome;
use crate::sink::ReportSink;
use specdoc_doc::{Config, Document};
use std::future::Future;

/// Runs a lint pass with the built-in rules once the document is ready.
///
/// `on_started` is invoked immediately so the caller's pipeline can
/// continue; the pass itself waits for the `ready` signal the caller
/// provides (pass a ready future such as `async {}` when the document is
/// already complete). Rules are expected to finish within that lifecycle;
/// there is no timeout, so a hung rule hangs the pass.
///
/// When `conf.lint` is `false`, `on_started` is still invoked and nothing
/// else happens: no rule runs and the document is left untouched.
///
/// Rule metadata language comes from the configuration's `lang` property,
/// resolved when the rules are constructed here; it is not re-read during
/// the pass.
pub async fn run<R, F>(
    conf: &Config,
    doc: &mut Document,
    hub: &NotificationHub,
    ready: R,
    on_started: F,
) -> LintOutcome
where
    R: Future<Output = ()>,
    F: FnOnce(),
{
    if conf.lint_disabled() {
        on_started();
        return LintOutcome::new();
    }
    on_started();
    ready.await;

    let lang = conf
        .property("lang")
        .and_then(|value| value.as_str())
        .unwrap_or(DEFAULT_LANG);
    let linter = Linter::with_default_rules(lang);
    run_with_linter(&linter, conf, doc, hub).await
}

/// Runs a lint pass with a caller-supplied engine and feeds the outcome to
/// the report sink.
pub async fn run_with_linter(
    linter: &Linter,
    conf: &Config,
    doc: &mut Document,
    hub: &NotificationHub,
) -> LintOutcome {
    let outcome = linter.lint(doc, conf).await;
    ReportSink::new(hub.clone()).emit(doc, &outcome);
    outcome
}
