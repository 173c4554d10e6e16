use super::*;
use crate::ErrorCode;
use uty_ir::Span;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::warning(ErrorCode::W0001)
        .with_message("void Function(int) does not match any allowed type in @UnionType OnTap: [VoidCallback].")
        .with_label(Span::new(6, 15), "no allowed alternative matches")
        .with_note("allowed: VoidCallback")
}

#[test]
fn test_terminal_emitter_no_color() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, true);

    emitter.emit(&sample_diagnostic());
    emitter.flush();

    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.starts_with("warning[W0001]: void Function(int)"));
    assert!(text.contains("--> 6..15: no allowed alternative matches"));
    assert!(text.contains("= note: allowed: VoidCallback"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);

    emitter.emit(&sample_diagnostic());

    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.contains("\x1b["));
    assert!(text.contains("W0001"));
}

#[test]
fn test_terminal_emitter_resolves_line_and_column() {
    let source = "typedef A = B;\nOnTap x = (int a) {};\n";
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("lib/main.dart", source);

    emitter.emit(&Diagnostic::warning(ErrorCode::W0001).with_label(Span::new(25, 36), "here"));

    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.contains("--> lib/main.dart:2:11: here"));
}

#[test]
fn test_emit_summary_warnings_only() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);

    emitter.emit_summary(0, 3);

    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(text, "warning: 3 warnings emitted\n");
}

#[test]
fn test_emit_summary_nothing_to_report() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);

    emitter.emit_summary(0, 0);

    assert!(emitter.into_inner().is_empty());
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}
