/// Renderer module - configuration, per-frame drawing and the frame loop

pub mod config;
pub mod frame_renderer;
pub mod render_context;
pub mod frame_loop;

pub use config::*;
pub use frame_renderer::*;
pub use render_context::*;
pub use frame_loop::*;
