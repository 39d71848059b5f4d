//! Shader sources.
//!
//! A `ShaderSource` is an immutable text blob tagged with the stage it is
//! compiled for. The built-in triangle pair is available as compile-time
//! constants.

use std::borrow::Cow;
use crate::graphics_context::ShaderStage;

/// Vertex stage of the triangle program
///
/// Passes the position through, fixes the point size and forwards the
/// per-vertex color to the fragment stage.
pub const TRIANGLE_VERTEX_SHADER: &str = "
    attribute vec4 a_Position;
    attribute vec4 a_Color;
    varying vec4 v_Color;
    void main(){
        gl_Position = a_Position;
        gl_PointSize = 10.0;
        v_Color = a_Color;
    }
";

/// Fragment stage of the triangle program
pub const TRIANGLE_FRAGMENT_SHADER: &str = "
    precision mediump float;
    varying vec4 v_Color;
    void main(){
        gl_FragColor = v_Color;
    }
";

// ============================================================================
// SHADER SOURCE
// ============================================================================

/// Shader source text tagged with its stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    stage: ShaderStage,
    text: Cow<'static, str>,
}

impl ShaderSource {
    /// Create a source for `stage`
    pub fn new(stage: ShaderStage, text: impl Into<Cow<'static, str>>) -> Self {
        Self { stage, text: text.into() }
    }

    /// Vertex stage source
    pub fn vertex(text: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ShaderStage::Vertex, text)
    }

    /// Fragment stage source
    pub fn fragment(text: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ShaderStage::Fragment, text)
    }

    /// Built-in triangle vertex shader
    pub const fn triangle_vertex() -> Self {
        Self { stage: ShaderStage::Vertex, text: Cow::Borrowed(TRIANGLE_VERTEX_SHADER) }
    }

    /// Built-in triangle fragment shader
    pub const fn triangle_fragment() -> Self {
        Self { stage: ShaderStage::Fragment, text: Cow::Borrowed(TRIANGLE_FRAGMENT_SHADER) }
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
