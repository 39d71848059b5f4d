//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};
use crate::graphics_context::ShaderStage;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_shader_compile_display_contains_log_and_source() {
    let err = Error::ShaderCompile {
        stage: ShaderStage::Vertex,
        source: "void main() { gl_Position = vec4(0.0) }".to_string(),
        log: "ERROR: 0:1: '}' : syntax error\n".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("Shader compile error"));
    assert!(display.contains("vertex shader"));
    assert!(display.contains("syntax error"));
    assert!(display.contains("gl_Position = vec4(0.0)"));
}

#[test]
fn test_program_link_display() {
    let err = Error::ProgramLink { log: "varying v_Color not written".to_string() };
    let display = format!("{}", err);
    assert!(display.contains("Program link error"));
    assert!(display.contains("v_Color"));
}

#[test]
fn test_attribute_not_found_display() {
    let err = Error::AttributeNotFound { name: "a_Color".to_string() };
    assert_eq!(format!("{}", err), "Attribute not found in linked program: a_Color");
}

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("getContext threw".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("getContext threw"));
}

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("WebGL not supported".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Initialization failed"));
    assert!(display.contains("WebGL not supported"));
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("stride mismatch".to_string());
    assert_eq!(format!("{}", err), "Invalid resource: stride mismatch");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::BackendError("x".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err = Error::AttributeNotFound { name: "a_Position".to_string() };
    let debug = format!("{:?}", err);
    assert!(debug.contains("AttributeNotFound"));
    assert!(debug.contains("a_Position"));
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = Error::ProgramLink { log: "fail".to_string() };
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::InvalidResource("fail".to_string()));
}

// ============================================================================
// RESULT ALIAS
// ============================================================================

#[test]
fn test_result_question_mark_propagation() {
    fn inner() -> Result<u32> {
        Err(Error::InvalidResource("bad".to_string()))
    }
    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }
    assert_eq!(outer(), Err(Error::InvalidResource("bad".to_string())));
}
