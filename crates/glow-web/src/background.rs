//! The DOM layer the glow is painted onto.

use glow_core::{gradient, VisualState};
use wasm_bindgen::JsValue;
use web_sys as web;

pub const LAYER_ID: &str = "glow-background";

// Fixed so it stays behind all content even when scrolling, and transparent
// to input so the page underneath keeps receiving pointer events.
const BASE_STYLE: &str = "position:fixed;inset:0;width:100vw;height:100vh;\
z-index:-10;pointer-events:none;transition:background 0.5s";

/// Find or create the background `<div>` appended to `<body>`.
pub fn ensure_layer(document: &web::Document) -> Result<web::Element, JsValue> {
    if let Some(el) = document.get_element_by_id(LAYER_ID) {
        return Ok(el);
    }
    let el = document.create_element("div")?;
    el.set_id(LAYER_ID);
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&el)?;
    Ok(el)
}

/// Paint one resolved frame onto the layer.
pub fn apply(layer: &web::Element, vs: &VisualState) {
    let style = format!("{BASE_STYLE};background:{}", gradient::css(vs));
    let _ = layer.set_attribute("style", &style);
}
