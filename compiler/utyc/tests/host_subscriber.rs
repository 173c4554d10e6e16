//! A host that already owns the global subscriber still gets its findings.
//!
//! Kept in its own binary: it sets the process-wide default subscriber.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use uty_ir::{CompilationUnit, TreeBuilder};
use utyc::{check_unit, run, CheckConfig, TraceSink};

fn violating_unit() -> CompilationUnit {
    let mut b = TreeBuilder::with_path("host.dart");
    b.function_alias("VoidCallback", &[]);
    b.union_alias("OnTap", &["VoidCallback"]);
    b.var("OnTap", "handler", |b| b.fn_literal(&["int"]));
    b.finish()
}

#[test]
fn test_host_subscriber_does_not_block_checking() {
    tracing::subscriber::set_global_default(tracing_subscriber::registry()).unwrap();
    let unit = violating_unit();

    let console = CheckConfig::default().with_trace(TraceSink::Console);
    let (result, sink_error) = check_unit(&unit, &console);
    assert_eq!(result.count(), 1);
    assert!(sink_error.is_none());

    // The host's subscriber stays in place; a file sink is not opened over it.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.log");
    let file = CheckConfig::default().with_trace(TraceSink::File(path.clone()));
    let (results, sink_error) = run(std::slice::from_ref(&unit), &file);
    assert_eq!(results[0].count(), 1);
    assert!(sink_error.is_none());
    assert!(!path.exists());
}
