//! Integration tests for the engine logging system
//!
//! Verifies that the builder, renderer and frame loop report through the
//! global logger. No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use serial_test::serial;
use triangle_engine::triangle::Engine;
use triangle_engine::triangle::gfx::MockGraphicsContext;
use triangle_engine::triangle::log::{Logger, LogEntry, LogSeverity};
use triangle_engine::triangle::render::{
    start_frame_loop, FrameMode, ManualScheduler, RenderConfig, RenderContext, ValidationMode,
};
use triangle_engine::triangle::resource::{ShaderProgramBuilder, ShaderSource};

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

const VERTEX_WITHOUT_COLOR: &str = "attribute vec4 a_Position;\nvarying vec4 v_Color;\nvoid main() {\n  gl_Position = a_Position;\n  v_Color = vec4(1.0);\n}\n";

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_context_creation_logs_info() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    let config = RenderConfig::default().with_validation(ValidationMode::Strict);
    RenderContext::new(MockGraphicsContext::new(), config).unwrap();

    let entries = entries.lock().unwrap();
    assert!(entries.iter().any(|e| e.severity == LogSeverity::Info
        && e.source == "triangle::program"
        && e.message.contains("linked")));
    assert!(entries.iter().any(|e| e.severity == LogSeverity::Info
        && e.source == "triangle::context"
        && e.message.contains("Strict")));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_compile_error_logged_with_location() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    let builder = ShaderProgramBuilder::new(
        ShaderSource::vertex("void main() { gl_Position = vec4(0.0) }"),
        ShaderSource::triangle_fragment(),
    );
    let config = RenderConfig::default().with_validation(ValidationMode::Strict);
    let result = RenderContext::with_program(MockGraphicsContext::new(), config, &builder);
    assert!(result.is_err());

    let entries = entries.lock().unwrap();
    let error = entries
        .iter()
        .find(|e| e.severity == LogSeverity::Error)
        .expect("compile failure should be logged");
    assert_eq!(error.source, "triangle::program");
    assert!(error.message.contains("vertex shader failed to compile"));
    assert!(error.file.is_some());
    assert!(error.line.is_some());

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_lenient_missing_attribute_warns() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    let config = RenderConfig::default().with_validation(ValidationMode::Lenient);
    let builder = ShaderProgramBuilder::new(
        ShaderSource::vertex(VERTEX_WITHOUT_COLOR),
        ShaderSource::triangle_fragment(),
    );
    let mut context = RenderContext::with_program(MockGraphicsContext::new(), config, &builder).unwrap();
    context.render_frame().unwrap();

    let entries = entries.lock().unwrap();
    let warning = entries
        .iter()
        .find(|e| e.severity == LogSeverity::Warn)
        .expect("missing attribute should be reported");
    assert_eq!(warning.source, "triangle::renderer");
    assert!(warning.message.contains("a_Color"));
    assert!(warning.message.contains(&u32::MAX.to_string()));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_frame_failure_logged_and_loop_stops() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    let config = RenderConfig::default()
        .with_validation(ValidationMode::Strict)
        .with_frame_mode(FrameMode::Continuous);
    let builder = ShaderProgramBuilder::new(
        ShaderSource::vertex(VERTEX_WITHOUT_COLOR),
        ShaderSource::triangle_fragment(),
    );
    let context = Rc::new(RefCell::new(
        RenderContext::with_program(MockGraphicsContext::new(), config, &builder).unwrap(),
    ));
    let scheduler = ManualScheduler::new();
    start_frame_loop(context.clone(), scheduler.clone()).unwrap();

    assert_eq!(scheduler.run(10, 0.0, 16.0), 1);
    assert_eq!(scheduler.pending(), 0);

    let entries = entries.lock().unwrap();
    assert!(entries.iter().any(|e| e.severity == LogSeverity::Error
        && e.source == "triangle::context"
        && e.message.contains("Attribute not found in linked program: a_Color")));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_min_severity_filters_trace() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::set_min_severity(LogSeverity::Info);

    let mut context = RenderContext::new(MockGraphicsContext::new(), RenderConfig::default()).unwrap();
    context.on_animation_frame(16.0);

    let entries = entries.lock().unwrap();
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| e.severity >= LogSeverity::Info));

    Engine::reset_logger();
}
