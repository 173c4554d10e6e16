use super::*;
use crate::ErrorCode;
use uty_ir::Span;

fn warning(message: &str) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W0001)
        .with_message(message)
        .with_label(Span::new(4, 10), "no allowed alternative matches")
        .with_note("allowed: \"A\", B")
}

#[test]
fn test_json_emitter_single() {
    let mut emitter = JsonEmitter::new(Vec::new());
    emitter.begin();
    emitter.emit(&warning("first"));
    emitter.end();

    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.starts_with("[\n"));
    assert!(text.ends_with("\n]\n"));
    assert!(text.contains("\"code\": \"W0001\""));
    assert!(text.contains("\"severity\": \"warning\""));
    assert!(text.contains("\"offset\": 4,"));
    assert!(text.contains("\"length\": 6,"));
    assert!(text.contains("\"primary\": true"));
    assert!(text.contains("\"allowed: \\\"A\\\", B\""));
    assert!(!text.contains("\"line\""));
}

#[test]
fn test_json_emitter_separates_entries() {
    let mut emitter = JsonEmitter::new(Vec::new());
    emitter.begin();
    emitter.emit_all(&[warning("first"), warning("second")]);
    emitter.end();

    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(text.matches("\"code\"").count(), 2);
    assert!(text.contains("  },\n  {"));
}

#[test]
fn test_json_emitter_with_source_adds_line() {
    let mut emitter = JsonEmitter::new(Vec::new()).with_source("ab\ncdefghijk");
    emitter.emit(&warning("located"));

    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.contains("\"line\": 2,"));
}

#[test]
fn test_json_emitter_set_source_between_units() {
    let mut emitter = JsonEmitter::new(Vec::new());
    emitter.set_source("a\nb\nc\nd\ne\n");
    emitter.emit(&warning("third line"));
    emitter.set_source("abcdefghijk");
    emitter.emit(&warning("first line"));

    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(text.contains("\"line\": 3,"));
    assert!(text.contains("\"line\": 1,"));
}
