//! Checker output.

use uty_diagnostic::Diagnostic;

use crate::Violation;

/// Result of checking one compilation unit.
///
/// Violations are in detection order, which is traversal order. An empty
/// result and a non-empty one are both successful outcomes.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct CheckResult {
    /// Violations in detection order.
    pub violations: Vec<Violation>,
    /// Rendered messages, parallel to `violations`.
    pub messages: Vec<String>,
}

impl CheckResult {
    pub fn new(violations: Vec<Violation>, messages: Vec<String>) -> Self {
        CheckResult {
            violations,
            messages,
        }
    }

    /// Number of violations found.
    pub fn count(&self) -> usize {
        self.violations.len()
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Render every violation as a warning diagnostic.
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        self.violations.iter().map(Violation::to_diagnostic).collect()
    }
}
