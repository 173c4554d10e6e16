use super::*;

#[test]
fn test_open_trace_file_creates_and_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.log");

    assert!(open_trace_file(&path).is_ok());
    assert!(path.exists());
    assert!(open_trace_file(&path).is_ok());
}

#[test]
fn test_open_trace_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("trace.log");

    match open_trace_file(&path) {
        Err(ConfigError::TraceFile { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected TraceFile error, got {other:?}"),
    }
}

#[test]
fn test_none_sink_installs_nothing() {
    assert!(install(&TraceSink::None).is_ok());
}

#[test]
fn test_default_filter_parses() {
    assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
}
