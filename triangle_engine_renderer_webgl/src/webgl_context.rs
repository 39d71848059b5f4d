/// WebGL 1 implementation of the engine's GraphicsContext

use triangle_engine::triangle::gfx::{
    BufferTarget, BufferUsage, ClearMask, DataType, DrawMode, GraphicsContext, ShaderStage,
};
use web_sys::{WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlShader};

/// `GraphicsContext` over a browser `WebGLRenderingContext`
///
/// Every method forwards to the host call of the same name; enumerations
/// map through their `gl_enum()` values.
pub struct WebGlGraphicsContext {
    gl: GL,
}

impl WebGlGraphicsContext {
    pub fn new(gl: GL) -> Self {
        Self { gl }
    }

    /// Underlying host context
    pub fn gl(&self) -> &GL {
        &self.gl
    }
}

impl GraphicsContext for WebGlGraphicsContext {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;

    // ===== SHADERS =====

    fn create_shader(&mut self, stage: ShaderStage) -> Option<WebGlShader> {
        self.gl.create_shader(stage.gl_enum())
    }

    fn shader_source(&mut self, shader: &WebGlShader, source: &str) {
        self.gl.shader_source(shader, source);
    }

    fn compile_shader(&mut self, shader: &WebGlShader) {
        self.gl.compile_shader(shader);
    }

    fn shader_compile_status(&self, shader: &WebGlShader) -> bool {
        self.gl
            .get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.gl.get_shader_info_log(shader)
    }

    // ===== PROGRAMS =====

    fn create_program(&mut self) -> Option<WebGlProgram> {
        self.gl.create_program()
    }

    fn attach_shader(&mut self, program: &WebGlProgram, shader: &WebGlShader) {
        self.gl.attach_shader(program, shader);
    }

    fn link_program(&mut self, program: &WebGlProgram) {
        self.gl.link_program(program);
    }

    fn program_link_status(&self, program: &WebGlProgram) -> bool {
        self.gl
            .get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.gl.get_program_info_log(program)
    }

    fn use_program(&mut self, program: Option<&WebGlProgram>) {
        self.gl.use_program(program);
    }

    // ===== BUFFERS =====

    fn create_buffer(&mut self) -> Option<WebGlBuffer> {
        self.gl.create_buffer()
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<&WebGlBuffer>) {
        self.gl.bind_buffer(target.gl_enum(), buffer);
    }

    fn buffer_data_f32(&mut self, target: BufferTarget, data: &[f32], usage: BufferUsage) {
        // Copies into JS memory, so no view into wasm memory outlives the call
        let array = js_sys::Float32Array::from(data);
        self.gl
            .buffer_data_with_array_buffer_view(target.gl_enum(), &array, usage.gl_enum());
    }

    // ===== ATTRIBUTES =====

    fn get_attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
        self.gl.get_attrib_location(program, name)
    }

    fn vertex_attrib_pointer(
        &mut self,
        index: u32,
        size: i32,
        data_type: DataType,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.gl
            .vertex_attrib_pointer_with_i32(index, size, data_type.gl_enum(), normalized, stride, offset);
    }

    fn enable_vertex_attrib_array(&mut self, index: u32) {
        self.gl.enable_vertex_attrib_array(index);
    }

    // ===== FRAME =====

    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.gl.clear_color(r, g, b, a);
    }

    fn clear(&mut self, mask: ClearMask) {
        self.gl.clear(mask.gl_enum());
    }

    fn draw_arrays(&mut self, mode: DrawMode, first: i32, count: i32) {
        self.gl.draw_arrays(mode.gl_enum(), first, count);
    }
}
