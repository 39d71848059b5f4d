//! Integration tests for the full build + frame pipeline
//!
//! Runs the shader builder, renderer and frame loop against the headless
//! MockGraphicsContext. No GPU required.
//!
//! Run with: cargo test --test render_integration_tests

use std::cell::RefCell;
use std::rc::Rc;
use triangle_engine::triangle::gfx::{
    DrawMode, GraphicsContext, MockCall, MockGlError, MockGraphicsContext, ATTRIBUTE_NOT_FOUND,
};
use triangle_engine::triangle::render::{
    start_frame_loop, BufferStrategy, FrameMode, ManualScheduler, RenderConfig, RenderContext,
    ValidationMode,
};
use triangle_engine::triangle::resource::{ShaderProgramBuilder, ShaderSource, VertexLayout};
use triangle_engine::triangle::Error;

const VERTEX_WITHOUT_COLOR: &str = "attribute vec4 a_Position;\nvarying vec4 v_Color;\nvoid main() {\n  gl_Position = a_Position;\n  v_Color = vec4(1.0);\n}\n";

fn run_loop(config: RenderConfig, frames: usize) -> (Rc<RefCell<RenderContext<MockGraphicsContext>>>, ManualScheduler) {
    let context = Rc::new(RefCell::new(
        RenderContext::new(MockGraphicsContext::new(), config).unwrap(),
    ));
    let scheduler = ManualScheduler::new();
    start_frame_loop(context.clone(), scheduler.clone()).unwrap();
    scheduler.run(frames, 0.0, 16.0);
    (context, scheduler)
}

// ============================================================================
// SHADER BUILD
// ============================================================================

#[test]
fn test_integration_build_is_deterministic() {
    let mut ctx = MockGraphicsContext::new();
    let builder = ShaderProgramBuilder::triangle();
    let layout = VertexLayout::triangle();

    for _ in 0..2 {
        let handle = builder.build(&mut ctx).unwrap();
        assert!(ctx.program_link_status(handle.program()));

        let attributes = ctx.active_attributes(*handle.program());
        let names: Vec<&str> = attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a_Position", "a_Color"]);
        for name in names {
            assert_ne!(ctx.get_attrib_location(handle.program(), name), ATTRIBUTE_NOT_FOUND);
        }
    }
    assert_eq!(layout.attribute("a_Position").unwrap().components, 2);
    assert_eq!(layout.attribute("a_Color").unwrap().components, 3);
}

#[test]
fn test_integration_strict_compile_error_before_draw() {
    let builder = ShaderProgramBuilder::new(
        ShaderSource::vertex("attribute vec4 a_Position;\nvoid main() {\n  gl_Position = a_Position\n}\n"),
        ShaderSource::triangle_fragment(),
    )
    .with_validation(ValidationMode::Strict);
    let mut ctx = MockGraphicsContext::new();
    let result = builder.build(&mut ctx);

    assert!(matches!(result, Err(Error::ShaderCompile { .. })));
    assert!(ctx.draw_calls().is_empty());
    assert!(!ctx.calls().iter().any(|c| matches!(c, MockCall::DrawArrays { .. })));
}

#[test]
fn test_integration_lenient_broken_shader_renders_nothing() {
    let builder = ShaderProgramBuilder::new(
        ShaderSource::vertex("attribute vec4 a_Position;\nvoid main() {\n  gl_Position = a_Position\n}\n"),
        ShaderSource::triangle_fragment(),
    );
    let config = RenderConfig::default();
    assert_eq!(config.validation, ValidationMode::Lenient);

    let mut context = RenderContext::with_program(MockGraphicsContext::new(), config, &builder).unwrap();
    context.render_frame().unwrap();

    let ctx = context.graphics_context();
    assert!(!ctx.program_link_status(context.program().program()));
    assert_eq!(ctx.current_program(), None);
    assert!(ctx.draw_calls().is_empty());
    assert!(ctx.calls().iter().any(|c| matches!(c, MockCall::DrawArrays { .. })));

    // useProgram on the unlinked program, then the rejected draw
    let errors = ctx.errors();
    assert_eq!(errors.first(), Some(&MockGlError::InvalidOperation));
    assert_eq!(errors.last(), Some(&MockGlError::InvalidOperation));
}

// ============================================================================
// END TO END
// ============================================================================

#[test]
fn test_integration_single_frame_end_to_end() {
    let (context, scheduler) = run_loop(RenderConfig::default(), 10);
    let context = context.borrow();
    let ctx = context.graphics_context();

    assert_eq!(scheduler.requests(), 1);
    assert_eq!(ctx.draw_calls().len(), 1);

    let draw = &ctx.draw_calls()[0];
    assert_eq!((draw.mode, draw.first, draw.count), (DrawMode::Triangles, 0, 3));
    assert_eq!(ctx.uploads()[0].len(), 15);

    let position = ctx.attrib_pointer(0).unwrap();
    let color = ctx.attrib_pointer(1).unwrap();
    assert_eq!((position.size, position.offset, position.stride), (2, 0, 20));
    assert_eq!((color.size, color.offset, color.stride), (3, 8, 20));
    assert_eq!(position.stride, 5 * 4);
    assert!(ctx.errors().is_empty());
}

#[test]
fn test_integration_continuous_loop_rerequests() {
    let config = RenderConfig::default().with_frame_mode(FrameMode::Continuous);
    let (context, scheduler) = run_loop(config, 8);

    assert_eq!(scheduler.requests(), 9);
    assert_eq!(scheduler.pending(), 1);
    assert_eq!(context.borrow().graphics_context().draw_calls().len(), 8);
}

#[test]
fn test_integration_buffer_strategies() {
    let frames = 6;
    let continuous = RenderConfig::default().with_frame_mode(FrameMode::Continuous);

    let (persistent, _) = run_loop(continuous.clone(), frames);
    assert_eq!(persistent.borrow().graphics_context().buffer_count(), 1);
    assert_eq!(persistent.borrow().stats().uploads, 1);

    let (per_frame, _) = run_loop(continuous.with_buffer_strategy(BufferStrategy::PerFrame), frames);
    let per_frame = per_frame.borrow();
    assert_eq!(per_frame.graphics_context().buffer_count(), frames);
    assert_eq!(per_frame.stats().uploads, frames as u64);

    // Every upload carries the same bytes
    let uploads = per_frame.graphics_context().uploads();
    assert!(uploads.windows(2).all(|pair| pair[0] == pair[1]));
}

// ============================================================================
// MISSING ATTRIBUTE
// ============================================================================

#[test]
fn test_integration_missing_attribute_by_mode() {
    let builder = ShaderProgramBuilder::new(
        ShaderSource::vertex(VERTEX_WITHOUT_COLOR),
        ShaderSource::triangle_fragment(),
    );

    let strict = RenderConfig::default().with_validation(ValidationMode::Strict);
    let mut context = RenderContext::with_program(MockGraphicsContext::new(), strict, &builder).unwrap();
    let err = context.render_frame().unwrap_err();
    assert_eq!(err, Error::AttributeNotFound { name: "a_Color".to_string() });
    assert!(context.graphics_context().draw_calls().is_empty());

    let lenient = RenderConfig::default().with_validation(ValidationMode::Lenient);
    let mut context = RenderContext::with_program(MockGraphicsContext::new(), lenient, &builder).unwrap();
    context.render_frame().unwrap();
    let ctx = context.graphics_context();
    assert_eq!(ctx.draw_calls().len(), 1);
    assert!(ctx.calls().contains(&MockCall::EnableVertexAttribArray(ATTRIBUTE_NOT_FOUND as u32)));
}
