//! Checking and reporting entry points.
//!
//! Each unit gets its own checker run: its own registry, checked set and
//! log. Units are independent, so several of them are checked in parallel.
//!
//! The trace sink never decides whether checking happens. A sink that
//! cannot be set up is returned next to the results.

use std::io::{self, IsTerminal, Write};

use rayon::prelude::*;
use uty_check::CheckResult;
use uty_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use uty_ir::CompilationUnit;

use crate::{init_tracing, CheckConfig, ConfigError, OutputFormat};

/// Install the configured trace sink, then check one unit.
///
/// The unit is checked even when the sink fails; the failure comes back as
/// the second element.
#[tracing::instrument(level = "debug", skip_all, fields(path = %unit.path))]
pub fn check_unit(
    unit: &CompilationUnit,
    config: &CheckConfig,
) -> (CheckResult, Option<ConfigError>) {
    let sink_error = init_tracing(&config.trace).err();
    (uty_check::check_unit(unit), sink_error)
}

/// Check independent units in parallel. Results are in input order.
#[tracing::instrument(level = "debug", skip_all, fields(units = units.len()))]
pub fn check_units(units: &[CompilationUnit]) -> Vec<CheckResult> {
    units.par_iter().map(uty_check::check_unit).collect()
}

/// Install the configured trace sink, then check every unit.
///
/// Like [`check_unit`], a sink failure does not stop the run.
pub fn run(
    units: &[CompilationUnit],
    config: &CheckConfig,
) -> (Vec<CheckResult>, Option<ConfigError>) {
    let sink_error = init_tracing(&config.trace).err();
    let results = check_units(units);
    tracing::debug!(
        units = units.len(),
        violations = results.iter().map(CheckResult::count).sum::<usize>(),
        "run complete"
    );
    (results, sink_error)
}

/// Render every unit's findings to `writer` in the configured format.
///
/// `units` and `results` are parallel. Text output ends with a warning
/// summary; JSON output is a single array across all units. Returns the
/// number of warnings written.
pub fn emit_report<W: Write>(
    units: &[CompilationUnit],
    results: &[CheckResult],
    config: &CheckConfig,
    writer: &mut W,
    is_tty: bool,
) -> usize {
    let mut warnings = 0;
    match config.format {
        OutputFormat::Text => {
            for (unit, result) in units.iter().zip(results) {
                let mut emitter =
                    TerminalEmitter::with_color_mode(&mut *writer, config.color, is_tty)
                        .with_source(unit.path.as_str(), unit.source.as_str());
                emitter.emit_all(&result.to_diagnostics());
                warnings += result.count();
            }
            let mut emitter = TerminalEmitter::with_color_mode(&mut *writer, config.color, is_tty);
            emitter.emit_summary(0, warnings);
            emitter.flush();
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(&mut *writer);
            emitter.begin();
            for (unit, result) in units.iter().zip(results) {
                emitter.set_source(&unit.source);
                emitter.emit_all(&result.to_diagnostics());
                warnings += result.count();
            }
            emitter.end();
            emitter.flush();
        }
    }
    warnings
}

/// [`emit_report`] to stderr, coloring when stderr is a terminal.
pub fn emit_report_to_stderr(
    units: &[CompilationUnit],
    results: &[CheckResult],
    config: &CheckConfig,
) -> usize {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    let mut lock = stderr.lock();
    emit_report(units, results, config, &mut lock, is_tty)
}
