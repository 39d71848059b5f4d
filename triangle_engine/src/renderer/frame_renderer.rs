/// Frame renderer - clears, uploads the triangle, binds attributes, draws
///
/// Per frame, in order:
/// 1. clear color + clear of the color buffer
/// 2. obtain the array buffer (see `BufferStrategy`), bind it, upload
/// 3. resolve each attribute of the layout, point it at the buffer, enable it
/// 4. `drawArrays(TRIANGLES, 0, float_len / 5)`
///
/// In strict mode every attribute location is resolved before the first
/// `vertexAttribPointer`, so a missing attribute fails the frame without
/// touching attribute state or drawing.

use crate::error::{Error, Result};
use crate::graphics_context::{
    BufferTarget, BufferUsage, ClearMask, DataType, DrawMode, GraphicsContext, ATTRIBUTE_NOT_FOUND,
};
use crate::renderer::{BufferStrategy, RenderConfig, ValidationMode};
use crate::resource::{AttributeBinding, ProgramHandle, Vertex, VertexBuffer, VertexLayout};
use crate::{engine_debug, engine_error, engine_trace, engine_warn};

const LOG_SOURCE: &str = "triangle::renderer";

/// Renderer statistics (totals since creation)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RendererStats {
    /// Frames rendered successfully
    pub frames: u64,
    /// Draw calls issued
    pub draw_calls: u64,
    /// Buffer objects allocated
    pub buffers_created: u64,
    /// `bufferData` uploads
    pub uploads: u64,
}

/// Draws the vertex buffer with one program every frame
pub struct FrameRenderer<C: GraphicsContext> {
    vertices: VertexBuffer,
    layout: VertexLayout,
    buffer: Option<C::Buffer>,
    buffer_strategy: BufferStrategy,
    validation: ValidationMode,
    clear_color: [f32; 4],
    stats: RendererStats,
}

impl<C: GraphicsContext> FrameRenderer<C> {
    /// Renderer for the built-in triangle
    pub fn new(config: &RenderConfig) -> Result<Self> {
        Self::with_geometry(config, VertexBuffer::triangle(), VertexLayout::triangle())
    }

    /// Renderer for custom vertex data; the layout is checked against it
    pub fn with_geometry(config: &RenderConfig, vertices: VertexBuffer, layout: VertexLayout) -> Result<Self> {
        layout.validate(&vertices)?;
        Ok(Self {
            vertices,
            layout,
            buffer: None,
            buffer_strategy: config.buffer_strategy,
            validation: config.validation,
            clear_color: config.clear_color,
            stats: RendererStats::default(),
        })
    }

    pub fn stats(&self) -> RendererStats {
        self.stats
    }

    pub fn vertices(&self) -> &VertexBuffer {
        &self.vertices
    }

    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    /// Persistent buffer, once allocated
    pub fn buffer(&self) -> Option<&C::Buffer> {
        self.buffer.as_ref()
    }

    /// Replace the vertex data (re-uploaded on the next frame)
    pub fn set_vertices(&mut self, vertices: Vec<Vertex>) -> Result<()> {
        let replacement = VertexBuffer::new(vertices);
        self.layout.validate(&replacement)?;
        self.vertices = replacement;
        Ok(())
    }

    /// Render one frame with `program` (which must be current)
    pub fn render(&mut self, ctx: &mut C, program: &ProgramHandle<C>) -> Result<()> {
        let [r, g, b, a] = self.clear_color;
        ctx.clear_color(r, g, b, a);
        ctx.clear(ClearMask::COLOR);

        self.prepare_buffer(ctx)?;

        match self.validation {
            ValidationMode::Strict => {
                let mut locations = Vec::with_capacity(self.layout.attributes().len());
                for attribute in self.layout.attributes() {
                    let location = ctx.get_attrib_location(program.program(), &attribute.name);
                    if location == ATTRIBUTE_NOT_FOUND {
                        engine_error!(LOG_SOURCE, "Attribute '{}' not found in program", attribute.name);
                        return Err(Error::AttributeNotFound { name: attribute.name.to_string() });
                    }
                    locations.push(location as u32);
                }
                for (attribute, location) in self.layout.attributes().iter().zip(locations) {
                    Self::bind_attribute(ctx, location, attribute);
                }
            }
            ValidationMode::Lenient => {
                for attribute in self.layout.attributes() {
                    let location = ctx.get_attrib_location(program.program(), &attribute.name);
                    if location == ATTRIBUTE_NOT_FOUND {
                        engine_warn!(
                            LOG_SOURCE,
                            "Attribute '{}' not found, binding location {} anyway",
                            attribute.name,
                            location as u32
                        );
                    }
                    Self::bind_attribute(ctx, location as u32, attribute);
                }
            }
        }

        let count = self.layout.vertex_count(&self.vertices);
        ctx.draw_arrays(DrawMode::Triangles, 0, count);
        engine_trace!(LOG_SOURCE, "drawArrays(TRIANGLES, 0, {})", count);

        self.stats.draw_calls += 1;
        self.stats.frames += 1;
        Ok(())
    }

    fn prepare_buffer(&mut self, ctx: &mut C) -> Result<()> {
        match self.buffer_strategy {
            BufferStrategy::Persistent => {
                if self.buffer.is_none() {
                    self.buffer = Some(self.create_buffer(ctx)?);
                    self.vertices.mark_dirty();
                }
                ctx.bind_buffer(BufferTarget::Array, self.buffer.as_ref());
                if self.vertices.is_dirty() {
                    self.upload(ctx);
                }
            }
            BufferStrategy::PerFrame => {
                // Previous frame's buffer is dropped without deleteBuffer
                let buffer = self.create_buffer(ctx)?;
                ctx.bind_buffer(BufferTarget::Array, Some(&buffer));
                self.upload(ctx);
            }
        }
        Ok(())
    }

    fn create_buffer(&mut self, ctx: &mut C) -> Result<C::Buffer> {
        let buffer = ctx.create_buffer().ok_or_else(|| {
            engine_error!(LOG_SOURCE, "createBuffer returned null");
            Error::InitializationFailed("Failed to create buffer object".to_string())
        })?;
        self.stats.buffers_created += 1;
        if self.stats.buffers_created == 1 {
            engine_debug!(LOG_SOURCE, "Vertex buffer created ({:?} strategy)", self.buffer_strategy);
        }
        Ok(buffer)
    }

    fn upload(&mut self, ctx: &mut C) {
        ctx.buffer_data_f32(BufferTarget::Array, self.vertices.as_floats(), BufferUsage::StaticDraw);
        self.vertices.mark_uploaded();
        self.stats.uploads += 1;
    }

    fn bind_attribute(ctx: &mut C, location: u32, attribute: &AttributeBinding) {
        ctx.vertex_attrib_pointer(
            location,
            attribute.components,
            DataType::Float,
            false,
            attribute.stride,
            attribute.offset,
        );
        ctx.enable_vertex_attrib_array(location);
    }
}

#[cfg(test)]
#[path = "frame_renderer_tests.rs"]
mod tests;
