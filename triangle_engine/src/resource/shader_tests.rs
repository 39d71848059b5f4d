/// Unit tests for ShaderSource

use crate::graphics_context::ShaderStage;
use crate::resource::shader::*;

#[test]
fn test_builtin_sources_are_tagged() {
    let vs = ShaderSource::triangle_vertex();
    let fs = ShaderSource::triangle_fragment();

    assert_eq!(vs.stage(), ShaderStage::Vertex);
    assert_eq!(fs.stage(), ShaderStage::Fragment);
    assert_eq!(vs.text(), TRIANGLE_VERTEX_SHADER);
    assert_eq!(fs.text(), TRIANGLE_FRAGMENT_SHADER);
}

#[test]
fn test_builtin_vertex_shader_declares_interface() {
    assert!(TRIANGLE_VERTEX_SHADER.contains("attribute vec4 a_Position;"));
    assert!(TRIANGLE_VERTEX_SHADER.contains("attribute vec4 a_Color;"));
    assert!(TRIANGLE_VERTEX_SHADER.contains("gl_PointSize = 10.0;"));
    assert!(TRIANGLE_FRAGMENT_SHADER.contains("precision mediump float;"));
}

#[test]
fn test_owned_source() {
    let text = format!("void main() {{ gl_Position = vec4({}); }}", "0.0");
    let source = ShaderSource::vertex(text.clone());

    assert_eq!(source.text(), text);
    assert_eq!(source, ShaderSource::new(ShaderStage::Vertex, text));
}
