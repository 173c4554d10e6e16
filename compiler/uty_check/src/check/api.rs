//! Public entry points for checking a module.
//!
//! Each call builds a fresh [`UnionChecker`] with its own registry, checked
//! set and log, so runs never share state.

use uty_ir::{CompilationUnit, ExprArena, Module};

use super::UnionChecker;
use crate::{CheckResult, Reporter, ViolationSink};

/// Check a module and return its violations.
///
/// `source` is the text the module's spans point into; it is only used for
/// line numbers.
///
/// # Example
///
/// ```ignore
/// let result = check_module(&unit.module, &unit.arena, &unit.source);
/// for message in &result.messages {
///     eprintln!("{message}");
/// }
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(items = module.items.len()))]
pub fn check_module(module: &Module, arena: &ExprArena, source: &str) -> CheckResult {
    let mut checker = UnionChecker::new(module, arena, Reporter::new(source));
    checker.run();
    let result = checker.finish();
    tracing::debug!(violations = result.count(), "union check complete");
    result
}

/// Check a module, forwarding each violation to `sink` as it is detected.
///
/// The returned result holds the same violations in the same order.
#[tracing::instrument(level = "debug", skip_all, fields(items = module.items.len()))]
pub fn check_module_with_sink(
    module: &Module,
    arena: &ExprArena,
    source: &str,
    sink: &mut dyn ViolationSink,
) -> CheckResult {
    let mut checker = UnionChecker::new(module, arena, Reporter::with_sink(source, sink));
    checker.run();
    let result = checker.finish();
    tracing::debug!(violations = result.count(), "union check complete");
    result
}

/// Check a whole compilation unit.
#[tracing::instrument(level = "debug", skip_all, fields(path = %unit.path))]
pub fn check_unit(unit: &CompilationUnit) -> CheckResult {
    check_module(&unit.module, &unit.arena, &unit.source)
}
