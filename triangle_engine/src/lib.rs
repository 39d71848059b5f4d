/*!
# Triangle Engine

Platform-agnostic core of a minimal WebGL 1 renderer that draws one
colored triangle.

The host graphics API is reached only through the `GraphicsContext` trait,
and the host's animation frame timing only through `FrameScheduler`. Backend
crates (e.g. `triangle_engine_renderer_webgl`) implement both;
`MockGraphicsContext` and `ManualScheduler` implement them in memory so the
whole pipeline runs headless.

## Architecture

- **GraphicsContext**: host shader/program/buffer/draw primitives
- **ShaderProgramBuilder**: compiles and links the shader pair once
- **FrameRenderer**: clear, upload, bind attributes, draw
- **RenderContext**: owns context, program and renderer for the frame loop
- **start_frame_loop**: drives `RenderContext` from a `FrameScheduler`
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod graphics_context;
pub mod resource;
pub mod renderer;

// Main triangle namespace module
pub mod triangle {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logger)
    pub use crate::engine::Engine;

    // Host collaborator traits
    pub use crate::graphics_context::GraphicsContext;
    pub use crate::renderer::FrameScheduler;

    // Logging sub-module (types only, macros are exported at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Host graphics context sub-module
    pub mod gfx {
        pub use crate::graphics_context::*;
    }

    // Render sub-module
    pub mod render {
        pub use crate::renderer::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }
}

// Re-export math library at crate root
pub use glam;
