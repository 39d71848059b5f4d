/// GraphicsContext trait - host graphics API interface

use crate::graphics_context::{BufferTarget, BufferUsage, ClearMask, DataType, DrawMode, ShaderStage};

// ============================================================================
// GraphicsContext trait
// ============================================================================

/// Host graphics context
///
/// Mirrors the subset of the WebGL 1 API the engine drives: shader/program
/// object lifecycle, buffer upload, attribute configuration and frame
/// operations. Implemented by host backends (e.g. `WebGlGraphicsContext`)
/// and by `MockGraphicsContext` for headless runs.
///
/// Object handles are associated types so each backend keeps its native
/// handle (`WebGlShader`, slot-map keys, ...). Methods that the host API
/// reports as nullable (`create_*`) return `Option`; everything else is
/// fire-and-forget like the host API itself, with status queries available
/// for callers that want to check.
pub trait GraphicsContext {
    /// Compiled (or not) shader object
    type Shader;
    /// Program object
    type Program;
    /// Buffer object
    type Buffer;

    // ===== SHADERS =====

    /// Allocate a shader object for `stage`
    fn create_shader(&mut self, stage: ShaderStage) -> Option<Self::Shader>;

    /// Replace the source text of `shader`
    fn shader_source(&mut self, shader: &Self::Shader, source: &str);

    /// Compile the current source of `shader`
    fn compile_shader(&mut self, shader: &Self::Shader);

    /// `COMPILE_STATUS` of the last compile
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;

    /// Compiler info log of the last compile
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;

    // ===== PROGRAMS =====

    /// Allocate a program object
    fn create_program(&mut self) -> Option<Self::Program>;

    /// Attach a shader object to a program
    fn attach_shader(&mut self, program: &Self::Program, shader: &Self::Shader);

    /// Link the attached shaders
    fn link_program(&mut self, program: &Self::Program);

    /// `LINK_STATUS` of the last link
    fn program_link_status(&self, program: &Self::Program) -> bool;

    /// Linker info log of the last link
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;

    /// Make `program` current (`None` unbinds)
    fn use_program(&mut self, program: Option<&Self::Program>);

    // ===== BUFFERS =====

    /// Allocate a buffer object
    fn create_buffer(&mut self) -> Option<Self::Buffer>;

    /// Bind `buffer` to `target` (`None` unbinds)
    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<&Self::Buffer>);

    /// Upload `data` into the buffer bound to `target`
    fn buffer_data_f32(&mut self, target: BufferTarget, data: &[f32], usage: BufferUsage);

    // ===== ATTRIBUTES =====

    /// Location of a named attribute, or `ATTRIBUTE_NOT_FOUND`
    fn get_attrib_location(&self, program: &Self::Program, name: &str) -> i32;

    /// Describe how attribute `index` reads from the bound array buffer
    ///
    /// `stride` and `offset` are in bytes.
    fn vertex_attrib_pointer(
        &mut self,
        index: u32,
        size: i32,
        data_type: DataType,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    /// Enable the generic vertex attribute array at `index`
    fn enable_vertex_attrib_array(&mut self, index: u32);

    // ===== FRAME =====

    /// Set the color used by `clear`
    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32);

    /// Clear the buffers in `mask`
    fn clear(&mut self, mask: ClearMask);

    /// Draw `count` vertices starting at `first`
    fn draw_arrays(&mut self, mode: DrawMode, first: i32, count: i32);
}
