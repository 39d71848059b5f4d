/// Canvas creation and WebGL context acquisition

use triangle_engine::triangle::render::CanvasConfig;
use triangle_engine::triangle::{Error, Result};
use triangle_engine::{engine_debug, engine_err, engine_warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, WebGlRenderingContext};

const LOG_SOURCE: &str = "triangle::webgl";

/// Create `<canvas>`, size it and append it to its parent
///
/// The parent is the element with id `config.parent_id`, or `<body>` when
/// no id is configured or no such element exists.
pub fn create_canvas(document: &Document, config: &CanvasConfig) -> Result<HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| engine_err!(LOG_SOURCE, "createElement(\"canvas\") failed: {:?}", e))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::InitializationFailed("Created element is not a canvas".to_string()))?;
    canvas.set_id(&config.id);
    canvas.set_width(config.width);
    canvas.set_height(config.height);

    let parent = parent_element(document, config.parent_id.as_deref())?;
    parent
        .append_child(&canvas)
        .map_err(|e| engine_err!(LOG_SOURCE, "appendChild failed: {:?}", e))?;

    engine_debug!(
        LOG_SOURCE,
        "Canvas #{} created ({}x{})",
        config.id,
        config.width,
        config.height
    );
    Ok(canvas)
}

fn parent_element(document: &Document, parent_id: Option<&str>) -> Result<Element> {
    if let Some(id) = parent_id {
        if let Some(element) = document.get_element_by_id(id) {
            return Ok(element);
        }
        engine_warn!(LOG_SOURCE, "No element with id '{}', appending canvas to <body>", id);
    }
    document
        .body()
        .map(Element::from)
        .ok_or_else(|| Error::InitializationFailed("Document has no <body>".to_string()))
}

/// Acquire a `"webgl"` context from `canvas`
pub fn acquire_context(canvas: &HtmlCanvasElement) -> Result<WebGlRenderingContext> {
    canvas
        .get_context("webgl")
        .map_err(|e| engine_err!(LOG_SOURCE, "getContext(\"webgl\") threw: {:?}", e))?
        .ok_or_else(|| Error::InitializationFailed("WebGL is not supported by this browser".to_string()))?
        .dyn_into::<WebGlRenderingContext>()
        .map_err(|_| Error::InitializationFailed("getContext(\"webgl\") returned a foreign object".to_string()))
}
