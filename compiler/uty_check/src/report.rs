//! Violation records and the run-scoped reporter.
//!
//! Every detection goes through [`Reporter::report`], which appends a
//! [`Violation`] and its rendered message to the run log (detection order is
//! traversal order), logs a `uty::violation` event, and forwards the record
//! to the host's [`ViolationSink`] if one is attached.

use std::fmt;

use uty_diagnostic::span_utils::LineOffsetTable;
use uty_diagnostic::{Diagnostic, ErrorCode};
use uty_ir::Span;

use crate::CheckResult;

/// A binding site where no allowed alternative matched.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Violation {
    /// Shape of the offending value: `void Function(int)` or a class name.
    pub target: String,
    /// The governing union type.
    pub union_name: String,
    /// Allowed alternatives in declared order.
    pub alternatives: Vec<String>,
    /// 1-based line of the offending expression.
    pub line: u32,
    /// Exact source range of the offending expression.
    pub span: Span,
}

impl Violation {
    /// Byte offset of the offending expression.
    pub fn offset(&self) -> u32 {
        self.span.start
    }

    /// Byte length of the offending expression.
    pub fn length(&self) -> u32 {
        self.span.len()
    }

    /// Alternatives joined with `", "`, in declared order.
    pub fn joined_alternatives(&self) -> String {
        self.alternatives.join(", ")
    }

    /// The human-readable message.
    pub fn message(&self) -> String {
        format!(
            "{} does not match any allowed type in @UnionType {}: [{}].",
            self.target,
            self.union_name,
            self.joined_alternatives()
        )
    }

    /// The `(target, union, alternatives)` triple a host engine substitutes
    /// into its own message template.
    pub fn host_args(&self) -> (&str, &str, String) {
        (&self.target, &self.union_name, self.joined_alternatives())
    }

    /// Convert into a warning diagnostic anchored at the offending expression.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::warning(ErrorCode::W0001)
            .with_message(self.message())
            .with_label(self.span, "no allowed alternative matches")
            .with_note(format!(
                "`{}` allows: {}",
                self.union_name,
                self.joined_alternatives()
            ))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message())
    }
}

/// Push-style hook for forwarding violations into a host diagnostics engine.
pub trait ViolationSink {
    fn report(&mut self, violation: &Violation);
}

impl<F> ViolationSink for F
where
    F: FnMut(&Violation),
{
    fn report(&mut self, violation: &Violation) {
        self(violation);
    }
}

/// Run-scoped violation log.
pub struct Reporter<'s> {
    lines: LineOffsetTable,
    violations: Vec<Violation>,
    log: Vec<String>,
    sink: Option<&'s mut dyn ViolationSink>,
}

impl<'s> Reporter<'s> {
    /// A reporter that resolves line numbers against `source`.
    pub fn new(source: &str) -> Self {
        Reporter {
            lines: LineOffsetTable::build(source),
            violations: Vec::new(),
            log: Vec::new(),
            sink: None,
        }
    }

    /// A reporter that also forwards every violation to `sink`.
    pub fn with_sink(source: &str, sink: &'s mut dyn ViolationSink) -> Self {
        Reporter {
            sink: Some(sink),
            ..Reporter::new(source)
        }
    }

    /// Record one violation.
    pub fn report(
        &mut self,
        target: String,
        union_name: &str,
        alternatives: &[String],
        span: Span,
    ) {
        let violation = Violation {
            target,
            union_name: union_name.to_string(),
            alternatives: alternatives.to_vec(),
            line: self.lines.line_from_offset(span.start),
            span,
        };
        let message = violation.message();

        tracing::info!(
            target: "uty::violation",
            line = violation.line,
            offset = violation.offset(),
            length = violation.length(),
            "{message}"
        );

        if let Some(sink) = &mut self.sink {
            sink.report(&violation);
        }
        self.log.push(message);
        self.violations.push(violation);
    }

    /// Number of violations recorded so far.
    pub fn count(&self) -> usize {
        self.violations.len()
    }

    /// Rendered messages in detection order.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn finish(self) -> CheckResult {
        CheckResult::new(self.violations, self.log)
    }
}

impl fmt::Debug for Reporter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("violations", &self.violations)
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}
