//! Unit tests for the Engine logging hub
//!
//! IMPORTANT: LOGGER is a global shared across all tests. Tests that swap
//! the logger are marked #[serial] and only inspect entries coming from
//! their own source string, since other tests may log concurrently.

use crate::galaxy3d::{Engine, Error};
use crate::galaxy3d::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn from_source(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == source)
        .cloned()
        .collect()
}

// ============================================================================
// LOGGER SWAPPING
// ============================================================================

#[test]
#[serial]
fn test_set_custom_logger() {
    let (logger, entries) = CaptureLogger::new();
    Engine::set_logger(logger);

    Engine::log(LogSeverity::Info, "test::engine::custom", "hello".to_string());

    let captured = from_source(&entries, "test::engine::custom");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "hello");
    assert!(captured[0].file.is_none());

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_to_default() {
    let (logger, entries) = CaptureLogger::new();
    Engine::set_logger(logger);
    Engine::reset_logger();

    Engine::log(LogSeverity::Info, "test::engine::reset", "after reset".to_string());

    assert!(from_source(&entries, "test::engine::reset").is_empty());
}

#[test]
#[serial]
fn test_log_detailed_with_file_line() {
    let (logger, entries) = CaptureLogger::new();
    Engine::set_logger(logger);

    Engine::log_detailed(
        LogSeverity::Error,
        "test::engine::detailed",
        "allocation failed".to_string(),
        "pool.rs",
        77,
    );

    let captured = from_source(&entries, "test::engine::detailed");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].file, Some("pool.rs"));
    assert_eq!(captured[0].line, Some(77));

    Engine::reset_logger();
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
#[serial]
fn test_engine_err_logs_and_builds_backend_error() {
    let (logger, entries) = CaptureLogger::new();
    Engine::set_logger(logger);

    let err = crate::engine_err!("test::engine::err", "target {} failed", "bloom_bright");

    match err {
        Error::BackendError(msg) => assert_eq!(msg, "target bloom_bright failed"),
        other => panic!("Expected BackendError, got {:?}", other),
    }
    let captured = from_source(&entries, "test::engine::err");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert!(captured[0].line.is_some());

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_engine_bail_returns_early() {
    fn bails(flag: bool) -> crate::galaxy3d::Result<u32> {
        if flag {
            crate::engine_bail!("test::engine::bail", "bailing with {}", 3);
        }
        Ok(7)
    }

    assert_eq!(bails(false).unwrap(), 7);
    assert!(matches!(bails(true), Err(Error::BackendError(_))));
}

#[test]
#[serial]
fn test_engine_err_builds_requested_variant() {
    let (logger, entries) = CaptureLogger::new();
    Engine::set_logger(logger);

    let err = crate::engine_err!(InvalidState => "test::engine::state", "cannot {} now", "compose");

    match err {
        Error::InvalidState(msg) => assert_eq!(msg, "cannot compose now"),
        other => panic!("Expected InvalidState, got {:?}", other),
    }
    let captured = from_source(&entries, "test::engine::state");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert_eq!(captured[0].message, "cannot compose now");

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_engine_bail_with_variant_returns_early() {
    fn bails(id: u32) -> crate::galaxy3d::Result<u32> {
        if id > 2 {
            crate::engine_bail!(InvalidResource => "test::engine::bail", "unknown target {}", id);
        }
        Ok(id)
    }

    assert_eq!(bails(1).unwrap(), 1);
    assert!(matches!(bails(5), Err(Error::InvalidResource(msg)) if msg == "unknown target 5"));
}

#[test]
#[serial]
fn test_default_logger_logs_without_panic() {
    Engine::reset_logger();
    crate::engine_trace!("test::engine::default", "trace {}", 1);
    crate::engine_debug!("test::engine::default", "debug {}", 2);
    crate::engine_info!("test::engine::default", "info {}", 3);
    crate::engine_warn!("test::engine::default", "warn {}", 4);
    crate::engine_error!("test::engine::default", "error {}", 5);
}
