use file_explorer::LogLevel;
use file_explorer::logging::init_tracing;
use tempfile::tempdir;

// The global subscriber can only be installed once per process, so this file
// holds a single test.
#[test]
fn file_layer_receives_events() {
    let td = tempdir().unwrap();
    let log = td.path().join("logs").join("fx.log");

    let guard = init_tracing(LogLevel::Info, Some(&log), false).unwrap();
    assert!(guard.is_some(), "file layer should be active");

    tracing::info!(path = "/tmp/example", "file logging smoke event");
    tracing::trace!("filtered out at Info");
    drop(guard);

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("file logging smoke event"), "{contents}");
    assert!(!contents.contains("filtered out at Info"));
}
