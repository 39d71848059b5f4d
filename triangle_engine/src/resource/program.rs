//! Shader program builder.
//!
//! Compiles a vertex and a fragment shader, attaches both to a new program
//! object and links it. With `ValidationMode::Strict` compile and link
//! status are checked after each step; with `ValidationMode::Lenient` they
//! are never queried and a broken source silently yields an unusable
//! program. Object creation failures are errors in both modes since no
//! handle exists to return.
//!
//! Shader and program objects are never released.

use crate::error::{Error, Result};
use crate::graphics_context::{GraphicsContext, ShaderStage};
use crate::renderer::ValidationMode;
use crate::resource::shader::ShaderSource;
use crate::{engine_debug, engine_error, engine_info};

const LOG_SOURCE: &str = "triangle::program";

// ============================================================================
// PROGRAM HANDLE
// ============================================================================

/// Linked program plus the two shader objects it was built from
pub struct ProgramHandle<C: GraphicsContext> {
    program: C::Program,
    vertex_shader: C::Shader,
    fragment_shader: C::Shader,
    validated: bool,
}

impl<C: GraphicsContext> ProgramHandle<C> {
    /// Program object
    pub fn program(&self) -> &C::Program {
        &self.program
    }

    pub fn vertex_shader(&self) -> &C::Shader {
        &self.vertex_shader
    }

    pub fn fragment_shader(&self) -> &C::Shader {
        &self.fragment_shader
    }

    /// Whether compile and link status were checked while building
    pub fn is_validated(&self) -> bool {
        self.validated
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builds one linked program from a vertex/fragment source pair
#[derive(Debug, Clone)]
pub struct ShaderProgramBuilder {
    vertex: ShaderSource,
    fragment: ShaderSource,
    validation: ValidationMode,
}

impl ShaderProgramBuilder {
    /// Builder for an explicit source pair (lenient until `with_validation`)
    pub fn new(vertex: ShaderSource, fragment: ShaderSource) -> Self {
        Self { vertex, fragment, validation: ValidationMode::default() }
    }

    /// Builder for the built-in triangle shaders
    pub fn triangle() -> Self {
        Self::new(ShaderSource::triangle_vertex(), ShaderSource::triangle_fragment())
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    pub fn vertex_source(&self) -> &ShaderSource {
        &self.vertex
    }

    pub fn fragment_source(&self) -> &ShaderSource {
        &self.fragment
    }

    /// Compile vertex, compile fragment, create program, attach both, link
    pub fn build<C: GraphicsContext>(&self, ctx: &mut C) -> Result<ProgramHandle<C>> {
        Self::check_stage(&self.vertex, ShaderStage::Vertex)?;
        Self::check_stage(&self.fragment, ShaderStage::Fragment)?;

        let vertex_shader = self.compile(ctx, &self.vertex)?;
        let fragment_shader = self.compile(ctx, &self.fragment)?;

        let program = ctx.create_program().ok_or_else(|| {
            engine_error!(LOG_SOURCE, "createProgram returned null");
            Error::InitializationFailed("Failed to create program object".to_string())
        })?;
        ctx.attach_shader(&program, &vertex_shader);
        ctx.attach_shader(&program, &fragment_shader);
        ctx.link_program(&program);

        let validated = self.validation == ValidationMode::Strict;
        if validated {
            if !ctx.program_link_status(&program) {
                let log = ctx.program_info_log(&program).unwrap_or_default();
                engine_error!(LOG_SOURCE, "Program link failed: {}", log.trim_end());
                return Err(Error::ProgramLink { log });
            }
            engine_info!(LOG_SOURCE, "Shader program compiled and linked");
        } else {
            engine_debug!(LOG_SOURCE, "Shader program built without status checks");
        }

        Ok(ProgramHandle { program, vertex_shader, fragment_shader, validated })
    }

    fn check_stage(source: &ShaderSource, expected: ShaderStage) -> Result<()> {
        if source.stage() != expected {
            return Err(Error::InvalidResource(format!(
                "Expected a {} shader source, got a {} one",
                expected,
                source.stage()
            )));
        }
        Ok(())
    }

    fn compile<C: GraphicsContext>(&self, ctx: &mut C, source: &ShaderSource) -> Result<C::Shader> {
        let stage = source.stage();
        let shader = ctx.create_shader(stage).ok_or_else(|| {
            engine_error!(LOG_SOURCE, "createShader({}) returned null", stage);
            Error::InitializationFailed(format!("Failed to create {} shader object", stage))
        })?;
        ctx.shader_source(&shader, source.text());
        ctx.compile_shader(&shader);

        if self.validation == ValidationMode::Strict && !ctx.shader_compile_status(&shader) {
            let log = ctx.shader_info_log(&shader).unwrap_or_default();
            engine_error!(LOG_SOURCE, "{} shader failed to compile: {}", stage, log.trim_end());
            return Err(Error::ShaderCompile {
                stage,
                source: source.text().to_string(),
                log,
            });
        }
        Ok(shader)
    }
}

impl Default for ShaderProgramBuilder {
    fn default() -> Self {
        Self::triangle()
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
