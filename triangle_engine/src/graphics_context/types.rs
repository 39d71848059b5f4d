/// Host API enumerations
///
/// Strongly typed wrappers over the fixed numeric constants of the
/// WebGL 1 API. Backends convert with `gl_enum()` at the call boundary.

use std::fmt;
use bitflags::bitflags;

/// Location returned by `get_attrib_location` when the name is not an active attribute
pub const ATTRIBUTE_NOT_FOUND: i32 = -1;

/// Size in bytes of one `Float` component
pub const FLOAT_SIZE: u32 = 4;

/// Shader pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

impl ShaderStage {
    /// WebGL constant (`VERTEX_SHADER` / `FRAGMENT_SHADER`)
    pub const fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => 0x8B31,
            ShaderStage::Fragment => 0x8B30,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Buffer binding point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// `ARRAY_BUFFER` (vertex attributes)
    Array,
    /// `ELEMENT_ARRAY_BUFFER` (indices)
    ElementArray,
}

impl BufferTarget {
    pub const fn gl_enum(self) -> u32 {
        match self {
            BufferTarget::Array => 0x8892,
            BufferTarget::ElementArray => 0x8893,
        }
    }
}

/// Buffer usage hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Uploaded once, drawn many times
    StaticDraw,
    /// Uploaded repeatedly, drawn many times
    DynamicDraw,
    /// Uploaded once, drawn a few times
    StreamDraw,
}

impl BufferUsage {
    pub const fn gl_enum(self) -> u32 {
        match self {
            BufferUsage::StaticDraw => 0x88E4,
            BufferUsage::DynamicDraw => 0x88E8,
            BufferUsage::StreamDraw => 0x88E0,
        }
    }
}

/// Component data type of a vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 32-bit IEEE float
    Float,
}

impl DataType {
    pub const fn gl_enum(self) -> u32 {
        match self {
            DataType::Float => 0x1406,
        }
    }

    /// Size in bytes of one component
    pub const fn size_bytes(self) -> u32 {
        match self {
            DataType::Float => FLOAT_SIZE,
        }
    }
}

/// Primitive assembly mode for draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl DrawMode {
    pub const fn gl_enum(self) -> u32 {
        match self {
            DrawMode::Points => 0x0000,
            DrawMode::Lines => 0x0001,
            DrawMode::LineStrip => 0x0003,
            DrawMode::Triangles => 0x0004,
            DrawMode::TriangleStrip => 0x0005,
            DrawMode::TriangleFan => 0x0006,
        }
    }
}

bitflags! {
    /// Buffers cleared by `clear`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMask: u32 {
        const DEPTH = 0x0100;
        const STENCIL = 0x0400;
        const COLOR = 0x4000;
    }
}

impl ClearMask {
    pub const fn gl_enum(self) -> u32 {
        self.bits()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
