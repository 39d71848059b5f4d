//! Resource module
//!
//! Shader sources, the program builder and vertex data/layout.

pub mod shader;
pub mod program;
pub mod vertex;

pub use shader::{ShaderSource, TRIANGLE_VERTEX_SHADER, TRIANGLE_FRAGMENT_SHADER};
pub use program::{ProgramHandle, ShaderProgramBuilder};
pub use vertex::{
    Vertex, VertexBuffer, VertexLayout, AttributeBinding,
    TRIANGLE_VERTICES, FLOATS_PER_VERTEX, VERTEX_STRIDE,
};
