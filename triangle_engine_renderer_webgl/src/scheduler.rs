/// requestAnimationFrame scheduler

use triangle_engine::engine_bail;
use triangle_engine::triangle::render::{FrameCallback, FrameScheduler};
use triangle_engine::triangle::{Error, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// `FrameScheduler` backed by `window.requestAnimationFrame`
///
/// Each request wraps the callback in a one-shot closure that frees itself
/// after it runs.
#[derive(Clone)]
pub struct AnimationFrameScheduler {
    window: Window,
}

impl AnimationFrameScheduler {
    /// Scheduler on the global `window`
    pub fn new() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| Error::InitializationFailed("No global window".to_string()))?;
        Ok(Self::with_window(window))
    }

    pub fn with_window(window: Window) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<()> {
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        if let Err(e) = self.window.request_animation_frame(closure.unchecked_ref()) {
            engine_bail!("triangle::webgl", "requestAnimationFrame failed: {:?}", e);
        }
        Ok(())
    }
}
