//! Triangle demo - draws one colored triangle in a browser canvas
//!
//! Build with `wasm-pack build --target web triangle_demo` and load the
//! generated module from a page containing `<div id="app">`.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use triangle_engine::triangle::render::RenderConfig;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        triangle_engine_renderer_webgl::install_console_logger();

        // The frame callbacks own the render context from here on
        triangle_engine_renderer_webgl::start(RenderConfig::default())
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

// Host builds (e.g. `cargo test` on the workspace) get an empty crate.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
