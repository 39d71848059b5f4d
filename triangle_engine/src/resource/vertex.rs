//! Vertex data and attribute layout.
//!
//! Vertices are interleaved `f32` records: a 2D position followed by an RGB
//! color. `VertexBuffer` holds the CPU-side copy and tracks whether it has
//! changed since the last upload; `VertexLayout` pairs each named shader
//! input with the slice of the record it reads.
//!
//! # Record layout
//!
//! ```text
//! byte  0        8                 20
//!       | x  y   | r   g   b       |
//!       a_Position a_Color
//! ```

use std::borrow::Cow;
use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use crate::error::{Error, Result};
use crate::graphics_context::FLOAT_SIZE;

/// Number of `f32` values per vertex
pub const FLOATS_PER_VERTEX: usize = 5;

/// Size of one vertex record in bytes
pub const VERTEX_STRIDE: i32 = (FLOATS_PER_VERTEX as u32 * FLOAT_SIZE) as i32;

/// Largest stride `vertexAttribPointer` accepts
const MAX_LAYOUT_STRIDE: i32 = 255;

// ============================================================================
// VERTEX
// ============================================================================

/// One interleaved vertex: position (x, y) then color (r, g, b)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec2,
    pub color: Vec3,
}

impl Vertex {
    pub const fn new(position: Vec2, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// The triangle: red right, green top, blue left
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex::new(Vec2::new(0.5, 0.0), Vec3::new(1.0, 0.0, 0.0)),
    Vertex::new(Vec2::new(0.0, 0.5), Vec3::new(0.0, 1.0, 0.0)),
    Vertex::new(Vec2::new(-0.5, 0.0), Vec3::new(0.0, 0.0, 1.0)),
];

// ============================================================================
// VERTEX BUFFER
// ============================================================================

/// CPU-side vertex data with an upload dirty flag
#[derive(Debug, Clone)]
pub struct VertexBuffer {
    vertices: Vec<Vertex>,
    dirty: bool,
}

impl VertexBuffer {
    /// Create a buffer; new data always starts dirty
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices, dirty: true }
    }

    /// The fixed 3-vertex triangle
    pub fn triangle() -> Self {
        Self::new(TRIANGLE_VERTICES.to_vec())
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Interleaved values in upload order
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Number of `f32` values
    pub fn float_len(&self) -> usize {
        self.vertices.len() * FLOATS_PER_VERTEX
    }

    /// Size of the data in bytes
    pub fn byte_len(&self) -> usize {
        self.float_len() * FLOAT_SIZE as usize
    }

    /// Replace the vertex data and mark it for re-upload
    pub fn set_vertices(&mut self, vertices: Vec<Vertex>) {
        self.vertices = vertices;
        self.dirty = true;
    }

    /// Whether the data changed since the last `mark_uploaded`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_uploaded(&mut self) {
        self.dirty = false;
    }
}

impl Default for VertexBuffer {
    fn default() -> Self {
        Self::triangle()
    }
}

// ============================================================================
// ATTRIBUTE LAYOUT
// ============================================================================

/// Named shader input and the part of each vertex record it reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeBinding {
    /// Attribute name in the vertex shader
    pub name: Cow<'static, str>,
    /// Number of `f32` components (1..=4)
    pub components: i32,
    /// Byte offset inside a record
    pub offset: i32,
    /// Byte distance between consecutive records
    pub stride: i32,
}

impl AttributeBinding {
    pub fn new(name: impl Into<Cow<'static, str>>, components: i32, offset: i32, stride: i32) -> Self {
        Self { name: name.into(), components, offset, stride }
    }

    /// One past the last byte this attribute reads in a record
    pub fn end(&self) -> i32 {
        self.offset + self.components * FLOAT_SIZE as i32
    }
}

/// Ordered attribute bindings for one interleaved buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: Vec<AttributeBinding>,
}

impl VertexLayout {
    pub fn new(attributes: Vec<AttributeBinding>) -> Self {
        Self { attributes }
    }

    /// `a_Position` (2 floats at 0) and `a_Color` (3 floats at 8), stride 20
    pub fn triangle() -> Self {
        Self::new(vec![
            AttributeBinding::new("a_Position", 2, 0, VERTEX_STRIDE),
            AttributeBinding::new("a_Color", 3, 2 * FLOAT_SIZE as i32, VERTEX_STRIDE),
        ])
    }

    pub fn attributes(&self) -> &[AttributeBinding] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeBinding> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Record stride shared by every attribute (0 for an empty layout)
    pub fn stride(&self) -> i32 {
        self.attributes.first().map_or(0, |a| a.stride)
    }

    /// Check the layout against the data it will read
    ///
    /// Every attribute must use the same non-zero stride, have 1..=4
    /// components, fit inside one record and not overlap another attribute.
    /// The buffer length must be a whole number of records.
    pub fn validate(&self, buffer: &VertexBuffer) -> Result<()> {
        let Some(first) = self.attributes.first() else {
            return Err(Error::InvalidResource("Vertex layout has no attributes".to_string()));
        };
        let stride = first.stride;
        if stride <= 0 || stride > MAX_LAYOUT_STRIDE {
            return Err(Error::InvalidResource(format!(
                "Vertex stride {} is outside 1..={}",
                stride, MAX_LAYOUT_STRIDE
            )));
        }

        for (i, attribute) in self.attributes.iter().enumerate() {
            if attribute.stride != stride {
                return Err(Error::InvalidResource(format!(
                    "Attribute '{}' has stride {} but the layout uses {}",
                    attribute.name, attribute.stride, stride
                )));
            }
            if !(1..=4).contains(&attribute.components) {
                return Err(Error::InvalidResource(format!(
                    "Attribute '{}' has {} components (expected 1..=4)",
                    attribute.name, attribute.components
                )));
            }
            if attribute.offset < 0 || attribute.end() > stride {
                return Err(Error::InvalidResource(format!(
                    "Attribute '{}' reads bytes {}..{} outside the {}-byte record",
                    attribute.name, attribute.offset, attribute.end(), stride
                )));
            }
            for other in &self.attributes[i + 1..] {
                if other.name == attribute.name {
                    return Err(Error::InvalidResource(format!(
                        "Attribute '{}' is bound twice",
                        attribute.name
                    )));
                }
                if attribute.offset < other.end() && other.offset < attribute.end() {
                    return Err(Error::InvalidResource(format!(
                        "Attributes '{}' and '{}' overlap",
                        attribute.name, other.name
                    )));
                }
            }
        }

        let expected = stride as usize * buffer.vertex_count();
        if expected != buffer.byte_len() {
            return Err(Error::InvalidResource(format!(
                "Vertex buffer is {} bytes but {} vertices of stride {} need {}",
                buffer.byte_len(),
                buffer.vertex_count(),
                stride,
                expected
            )));
        }
        Ok(())
    }

    /// Number of vertices a draw over `buffer` covers
    ///
    /// 0 for strides shorter than one float.
    pub fn vertex_count(&self, buffer: &VertexBuffer) -> i32 {
        let stride = self.stride();
        if stride <= 0 {
            return 0;
        }
        let floats_per_record = stride as usize / FLOAT_SIZE as usize;
        if floats_per_record == 0 {
            return 0;
        }
        (buffer.float_len() / floats_per_record) as i32
    }
}

impl Default for VertexLayout {
    fn default() -> Self {
        Self::triangle()
    }
}

#[cfg(test)]
#[path = "vertex_tests.rs"]
mod tests;
