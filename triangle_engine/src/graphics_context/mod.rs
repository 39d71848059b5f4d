/// Graphics context module - host graphics API trait and its enumerations

// Module declarations
pub mod graphics_context;
pub mod types;

// Headless host (no GPU required), used by tests and dry runs
pub mod mock_graphics_context;
mod mock_shader_compiler;

// Re-export everything from graphics_context.rs
pub use graphics_context::*;

// Re-export from other modules
pub use types::*;
pub use mock_graphics_context::*;
