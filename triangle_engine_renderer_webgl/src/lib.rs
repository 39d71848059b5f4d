/*!
# Triangle Engine - WebGL Backend

Browser implementation of the Triangle engine host collaborators:

- **WebGlGraphicsContext**: `GraphicsContext` over `WebGlRenderingContext`
- **AnimationFrameScheduler**: `FrameScheduler` over `requestAnimationFrame`
- **ConsoleLogger**: engine `Logger` writing to `console.*`
- **create_canvas / acquire_context**: DOM bootstrap

Everything except this documentation is compiled for `wasm32` only.
*/

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod console_logger;
#[cfg(target_arch = "wasm32")]
mod scheduler;
#[cfg(target_arch = "wasm32")]
mod webgl_context;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;
    use triangle_engine::triangle::render::{start_frame_loop, RenderConfig, RenderContext};
    use triangle_engine::triangle::{Engine, Error, Result};
    use triangle_engine::engine_info;
    use web_sys::HtmlCanvasElement;

    pub use crate::canvas::{acquire_context, create_canvas};
    pub use crate::console_logger::ConsoleLogger;
    pub use crate::scheduler::AnimationFrameScheduler;
    pub use crate::webgl_context::WebGlGraphicsContext;

    /// Render context shared with the animation frame callbacks
    pub type SharedRenderContext = Rc<RefCell<RenderContext<WebGlGraphicsContext>>>;

    /// Send engine logs to the browser console
    pub fn install_console_logger() {
        Engine::set_logger(ConsoleLogger);
    }

    /// Create the canvas described by `config.canvas` and start rendering
    ///
    /// Returns after the first animation frame is requested; the frame
    /// callbacks keep the render context alive.
    pub fn start(config: RenderConfig) -> Result<SharedRenderContext> {
        let scheduler = AnimationFrameScheduler::new()?;
        let document = scheduler
            .window()
            .document()
            .ok_or_else(|| Error::InitializationFailed("Window has no document".to_string()))?;

        let canvas = create_canvas(&document, &config.canvas)?;
        start_on_canvas(&canvas, config, scheduler)
    }

    /// Start rendering into an existing canvas
    pub fn start_on_canvas(
        canvas: &HtmlCanvasElement,
        config: RenderConfig,
        scheduler: AnimationFrameScheduler,
    ) -> Result<SharedRenderContext> {
        let gl = acquire_context(canvas)?;
        let context = RenderContext::new(WebGlGraphicsContext::new(gl), config)?;
        let context = Rc::new(RefCell::new(context));
        start_frame_loop(context.clone(), scheduler)?;

        engine_info!("triangle::webgl", "Rendering started on #{}", canvas.id());
        Ok(context)
    }
}
