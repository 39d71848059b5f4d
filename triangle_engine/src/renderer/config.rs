/// Render configuration

/// How much the program builder and frame renderer check host status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Never query compile/link status; pass a not-found attribute location
    /// through to the binding calls and log a warning. Broken shaders render
    /// nothing and only leave GL error flags behind.
    #[default]
    Lenient,
    /// Check compile/link status and attribute lookups, failing with a
    /// typed error before any draw call
    Strict,
}

/// Whether the frame loop keeps re-registering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameMode {
    /// Render one frame and stop
    #[default]
    SingleShot,
    /// Re-request a frame after every render
    Continuous,
}

/// When the vertex buffer object is allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferStrategy {
    /// Create once, re-upload only when the vertex data is dirty
    #[default]
    Persistent,
    /// Create and upload a new buffer on every frame (never released)
    PerFrame,
}

/// Canvas element created by the browser backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasConfig {
    /// Element id of the canvas
    pub id: String,
    /// Id of the element the canvas is appended to (`None` = `<body>`)
    pub parent_id: Option<String>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            id: "canvas".to_string(),
            parent_id: Some("app".to_string()),
            width: 600,
            height: 600,
        }
    }
}

/// Render configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Status checking policy
    pub validation: ValidationMode,
    /// One frame or a continuous loop
    pub frame_mode: FrameMode,
    /// Vertex buffer allocation policy
    pub buffer_strategy: BufferStrategy,
    /// RGBA clear color
    pub clear_color: [f32; 4],
    /// Canvas creation parameters (browser backend only)
    pub canvas: CanvasConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::default(),
            frame_mode: FrameMode::default(),
            buffer_strategy: BufferStrategy::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            canvas: CanvasConfig::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    pub fn with_frame_mode(mut self, frame_mode: FrameMode) -> Self {
        self.frame_mode = frame_mode;
        self
    }

    pub fn with_buffer_strategy(mut self, buffer_strategy: BufferStrategy) -> Self {
        self.buffer_strategy = buffer_strategy;
        self
    }

    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }

    pub fn with_canvas(mut self, canvas: CanvasConfig) -> Self {
        self.canvas = canvas;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
