//! Error types for the Triangle engine
//!
//! This module defines the error types used throughout the engine,
//! including shader compilation, program linking, attribute lookup
//! and host (backend) failures.

use std::fmt;
use crate::graphics_context::ShaderStage;

/// Result type for Triangle engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Triangle engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A shader failed to compile (strict validation only)
    ShaderCompile {
        /// Stage of the failing shader
        stage: ShaderStage,
        /// Source text that was handed to the compiler
        source: String,
        /// Compiler info log
        log: String,
    },

    /// The program failed to link after both shaders compiled
    ProgramLink {
        /// Linker info log
        log: String,
    },

    /// A named attribute is not exposed by the linked program
    AttributeNotFound {
        /// Attribute name that was looked up
        name: String,
    },

    /// Host-specific error (WebGL, DOM, etc.)
    BackendError(String),

    /// Initialization failed (context, canvas, object creation)
    InitializationFailed(String),

    /// Invalid resource (vertex layout, shader source, etc.)
    InvalidResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShaderCompile { stage, source, log } => write!(
                f,
                "Shader compile error ({} shader): {}\n--- source ---\n{}",
                stage,
                log.trim_end(),
                source.trim()
            ),
            Error::ProgramLink { log } => write!(f, "Program link error: {}", log.trim_end()),
            Error::AttributeNotFound { name } => {
                write!(f, "Attribute not found in linked program: {}", name)
            }
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
