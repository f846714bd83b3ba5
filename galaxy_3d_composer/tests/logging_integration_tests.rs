//! Integration tests for Engine logging system
//!
//! Covers the logger plumbing and the messages the composer itself emits
//! (quality clamps, allocation failures, lifecycle). No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests


use galaxy_3d_composer::galaxy3d::{Engine, Error, Renderable3D, RenderContext};
use galaxy_3d_composer::galaxy3d::compose::{SceneTargets, WorkerPool};
use galaxy_3d_composer::galaxy3d::config::QualityConfig;
use galaxy_3d_composer::galaxy3d::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;
use test_backend::{HeadlessDevice, HeadlessRenderer, HeadlessTarget, test_camera};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn entries_from<'a>(entries: &'a [LogEntry], source: &str) -> Vec<&'a LogEntry> {
    entries.iter().filter(|e| e.source == source).collect()
}

// ============================================================================
// LOGGER PLUMBING
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Engine::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "Test info message");
    assert_eq!(captured[1].severity, LogSeverity::Warn);
    assert_eq!(captured[1].source, "test::module");
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_error_logging_with_location() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log_detailed(
        LogSeverity::Error,
        "test::error",
        "Critical error occurred".to_string(),
        "test_file.rs",
        42,
    );

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].file, Some("test_file.rs"));
    assert_eq!(captured[0].line, Some(42));
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Info, "test", "Message 1".to_string());
    Engine::reset_logger();
    Engine::log(LogSeverity::Info, "test", "Message 2".to_string());

    assert_eq!(entries.lock().unwrap().len(), 1);
}

#[test]
#[serial]
fn test_integration_logging_different_severities() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        Engine::log(severity, "test", format!("{:?} message", severity));
    }

    let captured = entries.lock().unwrap();
    let severities: Vec<_> = captured.iter().map(|e| e.severity).collect();
    assert_eq!(severities, vec![
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ]);
    drop(captured);

    Engine::reset_logger();
}

// ============================================================================
// COMPOSER MESSAGES
// ============================================================================

#[test]
#[serial]
fn test_integration_quality_clamp_warns() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let mut config = QualityConfig::new();
    config.set_ssao_quality(1.5);
    config.set_light_shaft_quality(0.25);
    config.set_bloom_down_sample(0.5);

    let captured = entries.lock().unwrap();
    let warnings = entries_from(&captured, "galaxy3d::QualityConfig");
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|e| e.severity == LogSeverity::Warn));
    assert!(warnings[0].message.contains("ssao_quality"));
    assert!(warnings[1].message.contains("bloom_down_sample"));
    drop(captured);

    assert_eq!(config.ssao_quality(), 1.0);
    assert_eq!(config.bloom_down_sample(), 1.0);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_allocation_failure_logged_with_location() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let mut device = HeadlessDevice { fail_allocations: true, ..Default::default() };
    let mut renderer = HeadlessRenderer::default();
    let camera = test_camera(800, 600);
    let mut r3d: Renderable3D = Renderable3D::default();

    let result = {
        let mut ctx = RenderContext::new(&mut device, &mut renderer, &camera);
        r3d.initialize(&mut ctx, 800, 600)
    };
    assert!(result.is_err());

    let captured = entries.lock().unwrap();
    let errors: Vec<_> = captured.iter().filter(|e| e.severity == LogSeverity::Error).collect();
    assert!(!errors.is_empty());
    assert!(errors.iter().all(|e| e.file.is_some() && e.line.is_some()));
    assert!(errors.iter().any(|e| e.source == "galaxy3d::Renderable3D"));
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_initialize_logs_info() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let mut device = HeadlessDevice::default();
    let mut renderer = HeadlessRenderer::default();
    let camera = test_camera(640, 480);
    let mut r3d: Renderable3D = Renderable3D::default();
    {
        let mut ctx = RenderContext::new(&mut device, &mut renderer, &camera);
        r3d.initialize(&mut ctx, 640, 480).unwrap();
    }

    let captured = entries.lock().unwrap();
    let info = entries_from(&captured, "galaxy3d::Renderable3D");
    assert_eq!(info.len(), 1);
    assert_eq!(info[0].severity, LogSeverity::Info);
    assert!(info[0].message.contains("640x480"));
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_compose_before_initialize_logs_error() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let mut device = HeadlessDevice::default();
    let mut renderer = HeadlessRenderer::default();
    let camera = test_camera(640, 480);
    let main = HeadlessTarget::scene("main_scene", 640, 480, true);
    let shaded = HeadlessTarget::scene("shaded_scene", 640, 480, false);
    let mut r3d: Renderable3D = Renderable3D::default();

    let result = {
        let mut ctx = RenderContext::new(&mut device, &mut renderer, &camera);
        r3d.compose(&mut ctx, SceneTargets::new(&main, &shaded))
    };
    let message = match result {
        Err(Error::InvalidState(message)) => message,
        other => panic!("Expected InvalidState, got {:?}", other.map(|r| r.frame())),
    };

    let captured = entries.lock().unwrap();
    let errors: Vec<_> = captured.iter().filter(|e| e.severity == LogSeverity::Error).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source, "galaxy3d::PassSequencer");
    assert_eq!(errors[0].message, message);
    assert!(errors[0].file.is_some() && errors[0].line.is_some());
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_execute_without_workers_logs_error() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    let pool = WorkerPool::new();
    assert!(matches!(pool.execute(|| {}), Err(Error::InvalidState(_))));

    let captured = entries.lock().unwrap();
    let errors = entries_from(&captured, "galaxy3d::WorkerPool");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].severity, LogSeverity::Error);
    drop(captured);

    Engine::reset_logger();
}
