//! Browser integration tests for the WebGL backend
//!
//! Run with: wasm-pack test --headless --firefox triangle_engine_renderer_webgl

#![cfg(target_arch = "wasm32")]

use triangle_engine::triangle::gfx::{GraphicsContext, ShaderStage};
use triangle_engine::triangle::render::{
    CanvasConfig, FrameScheduler, RenderConfig, RenderContext, ValidationMode,
};
use triangle_engine::triangle::resource::{ShaderProgramBuilder, ShaderSource};
use triangle_engine::triangle::Error;
use triangle_engine_renderer_webgl::{
    acquire_context, create_canvas, AnimationFrameScheduler, WebGlGraphicsContext,
};
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext as GL};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn test_canvas(id: &str) -> HtmlCanvasElement {
    let config = CanvasConfig { id: id.to_string(), parent_id: None, width: 64, height: 64 };
    create_canvas(&document(), &config).unwrap()
}

// ============================================================================
// CANVAS
// ============================================================================

#[wasm_bindgen_test]
fn test_canvas_falls_back_to_body() {
    let config = CanvasConfig { id: "fallback_canvas".to_string(), ..CanvasConfig::default() };
    let canvas = create_canvas(&document(), &config).unwrap();

    assert_eq!(canvas.width(), 600);
    assert_eq!(canvas.height(), 600);
    let parent = canvas.parent_element().unwrap();
    assert_eq!(parent.tag_name().to_lowercase(), "body");
    canvas.remove();
}

#[wasm_bindgen_test]
fn test_canvas_appended_to_app() {
    let doc = document();
    let app = doc.create_element("div").unwrap();
    app.set_id("app");
    doc.body().unwrap().append_child(&app).unwrap();

    let canvas = create_canvas(&doc, &CanvasConfig::default()).unwrap();
    assert_eq!(canvas.id(), "canvas");
    assert_eq!(canvas.parent_element().unwrap().id(), "app");
    app.remove();
}

// ============================================================================
// RENDERING
// ============================================================================

#[wasm_bindgen_test]
fn test_triangle_renders_without_gl_error() {
    let canvas = test_canvas("render_canvas");
    let gl = acquire_context(&canvas).unwrap();
    let mut context = RenderContext::new(WebGlGraphicsContext::new(gl), RenderConfig::default()).unwrap();

    context.render_frame().unwrap();
    context.render_frame().unwrap();

    assert_eq!(context.graphics_context().gl().get_error(), GL::NO_ERROR);
    assert_eq!(context.stats().buffers_created, 1);
    canvas.remove();
}

#[wasm_bindgen_test]
fn test_attribute_locations_from_driver() {
    let canvas = test_canvas("attrib_canvas");
    let mut ctx = WebGlGraphicsContext::new(acquire_context(&canvas).unwrap());
    let handle = ShaderProgramBuilder::triangle().build(&mut ctx).unwrap();

    assert!(ctx.program_link_status(handle.program()));
    assert!(ctx.get_attrib_location(handle.program(), "a_Position") >= 0);
    assert!(ctx.get_attrib_location(handle.program(), "a_Color") >= 0);
    assert_eq!(ctx.get_attrib_location(handle.program(), "a_Missing"), -1);
    canvas.remove();
}

#[wasm_bindgen_test]
fn test_strict_compile_error_carries_driver_log() {
    let canvas = test_canvas("compile_canvas");
    let mut ctx = WebGlGraphicsContext::new(acquire_context(&canvas).unwrap());
    let builder = ShaderProgramBuilder::new(
        ShaderSource::vertex("void main() { gl_Position = vec4(0.0) }"),
        ShaderSource::triangle_fragment(),
    )
    .with_validation(ValidationMode::Strict);

    match builder.build(&mut ctx) {
        Err(Error::ShaderCompile { stage, log, .. }) => {
            assert_eq!(stage, ShaderStage::Vertex);
            assert!(!log.is_empty());
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("driver accepted a broken shader"),
    }
    canvas.remove();
}

// ============================================================================
// SCHEDULER
// ============================================================================

#[wasm_bindgen_test]
fn test_scheduler_on_global_window() {
    let scheduler = AnimationFrameScheduler::new().unwrap();

    assert!(scheduler.window().document().is_some());
    scheduler.request_frame(Box::new(|_timestamp| {})).unwrap();
}
