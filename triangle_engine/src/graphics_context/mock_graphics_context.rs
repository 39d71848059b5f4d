/// Mock graphics context (no GPU required)
///
/// Implements `GraphicsContext` entirely in memory: object tables live in
/// slot maps, shader sources go through a small GLSL ES 1.00 front end,
/// link resolves attribute locations, and every state change is recorded so
/// tests can assert on the exact host call sequence. Invalid calls do not
/// panic; like a real context they record a GL error and leave state
/// unchanged.

use std::cell::RefCell;
use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::{new_key_type, SlotMap};

use crate::graphics_context::mock_shader_compiler::{self, ShaderReflection, StorageQualifier};
use crate::graphics_context::{
    BufferTarget, BufferUsage, ClearMask, DataType, DrawMode, GraphicsContext, ShaderStage,
    ATTRIBUTE_NOT_FOUND, FLOAT_SIZE,
};

/// Number of generic vertex attribute slots exposed by the mock
pub const MOCK_MAX_VERTEX_ATTRIBS: u32 = 16;

// ===== SLOT MAP KEYS =====

new_key_type! {
    /// Shader object handle
    pub struct MockShaderKey;
    /// Program object handle
    pub struct MockProgramKey;
    /// Buffer object handle
    pub struct MockBufferKey;
}

// ============================================================================
// Recorded state
// ============================================================================

/// One recorded host call
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    CreateShader(ShaderStage),
    ShaderSource(MockShaderKey),
    CompileShader(MockShaderKey),
    CreateProgram,
    AttachShader(MockProgramKey, MockShaderKey),
    LinkProgram(MockProgramKey),
    UseProgram(Option<MockProgramKey>),
    CreateBuffer,
    BindBuffer(BufferTarget, Option<MockBufferKey>),
    BufferData { target: BufferTarget, len: usize, usage: BufferUsage },
    GetAttribLocation(String),
    VertexAttribPointer {
        index: u32,
        size: i32,
        data_type: DataType,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    ClearColor([f32; 4]),
    Clear(ClearMask),
    DrawArrays { mode: DrawMode, first: i32, count: i32 },
}

/// GL error flags raised by invalid calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockGlError {
    InvalidValue,
    InvalidOperation,
}

/// Attribute pointer state for one attribute slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockAttribPointer {
    pub size: i32,
    pub data_type: DataType,
    pub normalized: bool,
    /// Stride in bytes
    pub stride: i32,
    /// Offset in bytes
    pub offset: i32,
    /// Array buffer bound when the pointer was set
    pub buffer: MockBufferKey,
}

/// Snapshot taken at each successful `draw_arrays`
#[derive(Debug, Clone, PartialEq)]
pub struct MockDrawCall {
    pub mode: DrawMode,
    pub first: i32,
    pub count: i32,
    pub program: MockProgramKey,
    /// Enabled attribute slots, sorted by index
    pub attributes: Vec<(u32, MockAttribPointer)>,
}

/// Active attribute of a linked program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockActiveAttribute {
    pub name: String,
    pub type_name: String,
    pub location: i32,
}

struct MockShaderObject {
    stage: ShaderStage,
    source: String,
    compiled: bool,
    info_log: String,
    reflection: ShaderReflection,
}

#[derive(Default)]
struct MockProgramObject {
    attached: Vec<MockShaderKey>,
    linked: bool,
    info_log: String,
    attributes: Vec<MockActiveAttribute>,
}

struct MockBufferObject {
    data: Vec<f32>,
    usage: Option<BufferUsage>,
}

// ============================================================================
// Mock GraphicsContext
// ============================================================================

/// In-memory `GraphicsContext` that tracks objects and calls without a GPU
pub struct MockGraphicsContext {
    shaders: SlotMap<MockShaderKey, MockShaderObject>,
    programs: SlotMap<MockProgramKey, MockProgramObject>,
    buffers: SlotMap<MockBufferKey, MockBufferObject>,

    current_program: Option<MockProgramKey>,
    bound_buffers: FxHashMap<BufferTarget, MockBufferKey>,
    attrib_pointers: FxHashMap<u32, MockAttribPointer>,
    enabled_attribs: FxHashSet<u32>,
    clear_color: [f32; 4],

    calls: RefCell<Vec<MockCall>>,
    uploads: Vec<Vec<f32>>,
    draw_calls: Vec<MockDrawCall>,
    errors: Vec<MockGlError>,

    fail_object_creation: bool,
}

impl MockGraphicsContext {
    /// Create an empty mock context
    pub fn new() -> Self {
        Self {
            shaders: SlotMap::with_key(),
            programs: SlotMap::with_key(),
            buffers: SlotMap::with_key(),
            current_program: None,
            bound_buffers: FxHashMap::default(),
            attrib_pointers: FxHashMap::default(),
            enabled_attribs: FxHashSet::default(),
            clear_color: [0.0, 0.0, 0.0, 0.0],
            calls: RefCell::new(Vec::new()),
            uploads: Vec::new(),
            draw_calls: Vec::new(),
            errors: Vec::new(),
            fail_object_creation: false,
        }
    }

    /// Make every `create_*` return `None` (simulates a lost context)
    pub fn set_object_creation_fails(&mut self, fails: bool) {
        self.fail_object_creation = fails;
    }

    fn record(&self, call: MockCall) {
        self.calls.borrow_mut().push(call);
    }

    fn raise(&mut self, error: MockGlError) {
        self.errors.push(error);
    }

    // ===== INSPECTION =====

    /// Every recorded call, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }

    /// Forget recorded calls, uploads, draws and errors (object state is kept)
    pub fn clear_history(&mut self) {
        self.calls.borrow_mut().clear();
        self.uploads.clear();
        self.draw_calls.clear();
        self.errors.clear();
    }

    /// Successful draw calls, in order
    pub fn draw_calls(&self) -> &[MockDrawCall] {
        &self.draw_calls
    }

    /// Data of every `buffer_data_f32` upload, in order
    pub fn uploads(&self) -> &[Vec<f32>] {
        &self.uploads
    }

    /// GL errors raised so far
    pub fn errors(&self) -> &[MockGlError] {
        &self.errors
    }

    /// Number of live shader objects
    pub fn shader_count(&self) -> usize {
        self.shaders.len()
    }

    /// Number of live program objects
    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Number of live buffer objects
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Current contents of a buffer
    pub fn buffer_data(&self, buffer: MockBufferKey) -> Option<&[f32]> {
        self.buffers.get(buffer).map(|b| b.data.as_slice())
    }

    /// Usage hint of the last upload into a buffer
    pub fn buffer_usage(&self, buffer: MockBufferKey) -> Option<BufferUsage> {
        self.buffers.get(buffer).and_then(|b| b.usage)
    }

    /// Buffer bound to `target`
    pub fn bound_buffer(&self, target: BufferTarget) -> Option<MockBufferKey> {
        self.bound_buffers.get(&target).copied()
    }

    /// Program made current by `use_program`
    pub fn current_program(&self) -> Option<MockProgramKey> {
        self.current_program
    }

    /// Pointer state of an attribute slot
    pub fn attrib_pointer(&self, index: u32) -> Option<MockAttribPointer> {
        self.attrib_pointers.get(&index).copied()
    }

    /// Whether an attribute slot is enabled
    pub fn is_attrib_enabled(&self, index: u32) -> bool {
        self.enabled_attribs.contains(&index)
    }

    /// Color set by the last `clear_color`
    pub fn clear_color_value(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Source text last given to a shader
    pub fn shader_source_text(&self, shader: MockShaderKey) -> Option<&str> {
        self.shaders.get(shader).map(|s| s.source.as_str())
    }

    /// Stage a shader was created for
    pub fn shader_stage(&self, shader: MockShaderKey) -> Option<ShaderStage> {
        self.shaders.get(shader).map(|s| s.stage)
    }

    /// Shaders attached to a program, in attach order
    pub fn attached_shaders(&self, program: MockProgramKey) -> Vec<MockShaderKey> {
        self.programs
            .get(program)
            .map(|p| p.attached.clone())
            .unwrap_or_default()
    }

    /// Active attributes of a linked program, by location
    pub fn active_attributes(&self, program: MockProgramKey) -> Vec<MockActiveAttribute> {
        match self.programs.get(program) {
            Some(p) if p.linked => p.attributes.clone(),
            _ => Vec::new(),
        }
    }

    // ===== LINKER =====

    fn link(&self, program: &MockProgramObject) -> Result<Vec<MockActiveAttribute>, String> {
        let mut vertex = None;
        let mut fragment = None;
        for key in &program.attached {
            let Some(shader) = self.shaders.get(*key) else {
                return Err("Attached shader object was deleted".to_string());
            };
            if !shader.compiled {
                return Err(format!("Attached {} shader is not compiled", shader.stage));
            }
            match shader.stage {
                ShaderStage::Vertex => vertex = Some(shader),
                ShaderStage::Fragment => fragment = Some(shader),
            }
        }
        let vertex = vertex.ok_or_else(|| "Missing vertex shader".to_string())?;
        let fragment = fragment.ok_or_else(|| "Missing fragment shader".to_string())?;

        for varying in fragment.reflection.with_qualifier(StorageQualifier::Varying) {
            let written = vertex
                .reflection
                .with_qualifier(StorageQualifier::Varying)
                .find(|v| v.name == varying.name);
            match written {
                None => {
                    return Err(format!(
                        "Varying {} is not declared in the vertex shader",
                        varying.name
                    ));
                }
                Some(v) if v.type_name != varying.type_name => {
                    return Err(format!(
                        "Varying {} has type {} in the vertex shader and {} in the fragment shader",
                        varying.name, v.type_name, varying.type_name
                    ));
                }
                Some(_) => {}
            }
        }

        Ok(vertex
            .reflection
            .with_qualifier(StorageQualifier::Attribute)
            .enumerate()
            .map(|(location, attribute)| MockActiveAttribute {
                name: attribute.name.clone(),
                type_name: attribute.type_name.clone(),
                location: location as i32,
            })
            .collect())
    }

    fn attribute_fits(&self, first: i32, count: i32, pointer: &MockAttribPointer) -> bool {
        let Some(buffer) = self.buffers.get(pointer.buffer) else {
            return false;
        };
        if count == 0 {
            return true;
        }
        let element = pointer.size * pointer.data_type.size_bytes() as i32;
        let stride = if pointer.stride == 0 { element } else { pointer.stride };
        let last = first as i64 + count as i64 - 1;
        let needed = pointer.offset as i64 + stride as i64 * last + element as i64;
        needed <= (buffer.data.len() as i64) * FLOAT_SIZE as i64
    }
}

impl Default for MockGraphicsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsContext for MockGraphicsContext {
    type Shader = MockShaderKey;
    type Program = MockProgramKey;
    type Buffer = MockBufferKey;

    fn create_shader(&mut self, stage: ShaderStage) -> Option<MockShaderKey> {
        self.record(MockCall::CreateShader(stage));
        if self.fail_object_creation {
            return None;
        }
        Some(self.shaders.insert(MockShaderObject {
            stage,
            source: String::new(),
            compiled: false,
            info_log: String::new(),
            reflection: ShaderReflection::default(),
        }))
    }

    fn shader_source(&mut self, shader: &MockShaderKey, source: &str) {
        self.record(MockCall::ShaderSource(*shader));
        match self.shaders.get_mut(*shader) {
            Some(object) => object.source = source.to_string(),
            None => self.raise(MockGlError::InvalidValue),
        }
    }

    fn compile_shader(&mut self, shader: &MockShaderKey) {
        self.record(MockCall::CompileShader(*shader));
        let Some(object) = self.shaders.get_mut(*shader) else {
            self.raise(MockGlError::InvalidValue);
            return;
        };
        match mock_shader_compiler::compile(object.stage, &object.source) {
            Ok(reflection) => {
                object.compiled = true;
                object.info_log.clear();
                object.reflection = reflection;
            }
            Err(log) => {
                object.compiled = false;
                object.info_log = log;
                object.reflection = ShaderReflection::default();
            }
        }
    }

    fn shader_compile_status(&self, shader: &MockShaderKey) -> bool {
        self.shaders.get(*shader).is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: &MockShaderKey) -> Option<String> {
        self.shaders.get(*shader).map(|s| s.info_log.clone())
    }

    fn create_program(&mut self) -> Option<MockProgramKey> {
        self.record(MockCall::CreateProgram);
        if self.fail_object_creation {
            return None;
        }
        Some(self.programs.insert(MockProgramObject::default()))
    }

    fn attach_shader(&mut self, program: &MockProgramKey, shader: &MockShaderKey) {
        self.record(MockCall::AttachShader(*program, *shader));
        let Some(stage) = self.shaders.get(*shader).map(|s| s.stage) else {
            self.raise(MockGlError::InvalidValue);
            return;
        };
        let Some(object) = self.programs.get(*program) else {
            self.raise(MockGlError::InvalidValue);
            return;
        };
        let same_stage_attached = object
            .attached
            .iter()
            .any(|k| self.shaders.get(*k).is_some_and(|s| s.stage == stage));
        if same_stage_attached {
            self.raise(MockGlError::InvalidOperation);
            return;
        }
        if let Some(object) = self.programs.get_mut(*program) {
            object.attached.push(*shader);
        }
    }

    fn link_program(&mut self, program: &MockProgramKey) {
        self.record(MockCall::LinkProgram(*program));
        let Some(object) = self.programs.get(*program) else {
            self.raise(MockGlError::InvalidValue);
            return;
        };
        let result = self.link(object);
        if let Some(object) = self.programs.get_mut(*program) {
            match result {
                Ok(attributes) => {
                    object.linked = true;
                    object.info_log.clear();
                    object.attributes = attributes;
                }
                Err(log) => {
                    object.linked = false;
                    object.info_log = log;
                    object.attributes.clear();
                }
            }
        }
    }

    fn program_link_status(&self, program: &MockProgramKey) -> bool {
        self.programs.get(*program).is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: &MockProgramKey) -> Option<String> {
        self.programs.get(*program).map(|p| p.info_log.clone())
    }

    fn use_program(&mut self, program: Option<&MockProgramKey>) {
        self.record(MockCall::UseProgram(program.copied()));
        match program {
            None => self.current_program = None,
            Some(key) => match self.programs.get(*key) {
                Some(object) if object.linked => self.current_program = Some(*key),
                Some(_) => self.raise(MockGlError::InvalidOperation),
                None => self.raise(MockGlError::InvalidValue),
            },
        }
    }

    fn create_buffer(&mut self) -> Option<MockBufferKey> {
        self.record(MockCall::CreateBuffer);
        if self.fail_object_creation {
            return None;
        }
        Some(self.buffers.insert(MockBufferObject { data: Vec::new(), usage: None }))
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<&MockBufferKey>) {
        self.record(MockCall::BindBuffer(target, buffer.copied()));
        match buffer {
            None => {
                self.bound_buffers.remove(&target);
            }
            Some(key) if self.buffers.contains_key(*key) => {
                self.bound_buffers.insert(target, *key);
            }
            Some(_) => self.raise(MockGlError::InvalidValue),
        }
    }

    fn buffer_data_f32(&mut self, target: BufferTarget, data: &[f32], usage: BufferUsage) {
        self.record(MockCall::BufferData { target, len: data.len(), usage });
        let bound = self.bound_buffers.get(&target).copied();
        match bound.and_then(|key| self.buffers.get_mut(key)) {
            Some(object) => {
                object.data = data.to_vec();
                object.usage = Some(usage);
                self.uploads.push(data.to_vec());
            }
            None => self.raise(MockGlError::InvalidOperation),
        }
    }

    fn get_attrib_location(&self, program: &MockProgramKey, name: &str) -> i32 {
        self.record(MockCall::GetAttribLocation(name.to_string()));
        match self.programs.get(*program) {
            Some(object) if object.linked => object
                .attributes
                .iter()
                .find(|a| a.name == name)
                .map(|a| a.location)
                .unwrap_or(ATTRIBUTE_NOT_FOUND),
            _ => ATTRIBUTE_NOT_FOUND,
        }
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
        self.record(MockCall::VertexAttribPointer { index, size, data_type, normalized, stride, offset });
        if index >= MOCK_MAX_VERTEX_ATTRIBS
            || !(1..=4).contains(&size)
            || !(0..=255).contains(&stride)
            || offset < 0
        {
            self.raise(MockGlError::InvalidValue);
            return;
        }
        let Some(buffer) = self.bound_buffers.get(&BufferTarget::Array).copied() else {
            self.raise(MockGlError::InvalidOperation);
            return;
        };
        self.attrib_pointers.insert(
            index,
            MockAttribPointer { size, data_type, normalized, stride, offset, buffer },
        );
    }

    fn enable_vertex_attrib_array(&mut self, index: u32) {
        self.record(MockCall::EnableVertexAttribArray(index));
        if index >= MOCK_MAX_VERTEX_ATTRIBS {
            self.raise(MockGlError::InvalidValue);
            return;
        }
        self.enabled_attribs.insert(index);
    }

    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.record(MockCall::ClearColor([r, g, b, a]));
        self.clear_color = [r, g, b, a];
    }

    fn clear(&mut self, mask: ClearMask) {
        self.record(MockCall::Clear(mask));
    }

    fn draw_arrays(&mut self, mode: DrawMode, first: i32, count: i32) {
        self.record(MockCall::DrawArrays { mode, first, count });
        if first < 0 || count < 0 {
            self.raise(MockGlError::InvalidValue);
            return;
        }
        let Some(program) = self.current_program else {
            self.raise(MockGlError::InvalidOperation);
            return;
        };

        // Every enabled array must have a pointer into a large enough buffer
        let mut attributes = Vec::with_capacity(self.enabled_attribs.len());
        let mut complete = true;
        for index in &self.enabled_attribs {
            match self.attrib_pointers.get(index) {
                Some(pointer) if self.attribute_fits(first, count, pointer) => {
                    attributes.push((*index, *pointer));
                }
                _ => {
                    complete = false;
                    break;
                }
            }
        }
        if !complete {
            self.raise(MockGlError::InvalidOperation);
            return;
        }
        attributes.sort_by_key(|(index, _)| *index);

        self.draw_calls.push(MockDrawCall { mode, first, count, program, attributes });
    }
}

#[cfg(test)]
#[path = "mock_graphics_context_tests.rs"]
mod tests;
