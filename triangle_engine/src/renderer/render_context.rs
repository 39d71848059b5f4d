/// Render context - owns everything the frame callbacks share
///
/// Holds the graphics context, configuration, linked program and frame
/// renderer. Frame callbacks reach it through `Rc<RefCell<RenderContext<C>>>`.

use crate::error::{Error, Result};
use crate::graphics_context::GraphicsContext;
use crate::renderer::{FrameControl, FrameMode, FrameRenderer, RenderConfig, RendererStats};
use crate::resource::{ProgramHandle, ShaderProgramBuilder};
use crate::{engine_error, engine_info, engine_trace};

const LOG_SOURCE: &str = "triangle::context";

pub struct RenderContext<C: GraphicsContext> {
    graphics: C,
    config: RenderConfig,
    program: ProgramHandle<C>,
    renderer: FrameRenderer<C>,
    last_timestamp: Option<f64>,
    last_error: Option<Error>,
}

impl<C: GraphicsContext> RenderContext<C> {
    /// Build the triangle program, make it current and prepare the renderer
    pub fn new(graphics: C, config: RenderConfig) -> Result<Self> {
        let builder = ShaderProgramBuilder::triangle().with_validation(config.validation);
        Self::with_program(graphics, config, &builder)
    }

    /// Same as `new` with caller-supplied shader sources
    ///
    /// The builder's validation mode is overridden by `config.validation`.
    pub fn with_program(mut graphics: C, config: RenderConfig, builder: &ShaderProgramBuilder) -> Result<Self> {
        let builder = builder.clone().with_validation(config.validation);
        let program = builder.build(&mut graphics)?;
        graphics.use_program(Some(program.program()));
        let renderer = FrameRenderer::new(&config)?;

        engine_info!(
            LOG_SOURCE,
            "Render context ready ({:?} validation, {:?} frames, {:?} buffer)",
            config.validation,
            config.frame_mode,
            config.buffer_strategy
        );

        Ok(Self {
            graphics,
            config,
            program,
            renderer,
            last_timestamp: None,
            last_error: None,
        })
    }

    /// Render one frame
    pub fn render_frame(&mut self) -> Result<()> {
        self.renderer.render(&mut self.graphics, &self.program)
    }

    /// Animation frame callback body
    ///
    /// Renders, then tells the loop whether to request another frame. A
    /// render error is logged, kept in `last_error` and stops the loop.
    pub fn on_animation_frame(&mut self, timestamp: f64) -> FrameControl {
        self.last_timestamp = Some(timestamp);
        engine_trace!(LOG_SOURCE, "Animation frame at {:.3} ms", timestamp);

        match self.render_frame() {
            Ok(()) => match self.config.frame_mode {
                FrameMode::SingleShot => FrameControl::Stop,
                FrameMode::Continuous => FrameControl::Continue,
            },
            Err(error) => {
                engine_error!(LOG_SOURCE, "Frame failed, stopping: {}", error);
                self.last_error = Some(error);
                FrameControl::Stop
            }
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn stats(&self) -> RendererStats {
        self.renderer.stats()
    }

    pub fn program(&self) -> &ProgramHandle<C> {
        &self.program
    }

    pub fn renderer(&self) -> &FrameRenderer<C> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut FrameRenderer<C> {
        &mut self.renderer
    }

    pub fn graphics_context(&self) -> &C {
        &self.graphics
    }

    pub fn graphics_context_mut(&mut self) -> &mut C {
        &mut self.graphics
    }

    /// Timestamp passed to the latest animation frame
    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }

    /// Error that stopped the frame loop, if any
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
#[path = "render_context_tests.rs"]
mod tests;
