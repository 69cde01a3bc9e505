#![cfg(target_arch = "wasm32")]

pub mod background;
pub mod dom;
pub mod frame;
pub mod sampler;

use glow_core::GlowEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glow-web loaded");
    Ok(())
}

/// One mounted background instance: owns the pointer subscription, the frame
/// loop handle and the DOM layer, and releases all three symmetrically.
#[wasm_bindgen]
pub struct GlowBackground {
    engine: Rc<RefCell<GlowEngine>>,
    layer: web::Element,
    pointer: Option<sampler::PointerSubscription>,
    frames: Option<frame::FrameLoop>,
}

#[wasm_bindgen]
impl GlowBackground {
    /// Mount the background layer and start the animation pipeline.
    pub fn mount() -> Result<GlowBackground, JsValue> {
        mount_inner().map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Tear the pipeline down: deregister the pointer listener, cancel the
    /// pending frame and remove the layer. Idempotent; after it returns no
    /// callback can fire and neither target nor visual state changes again.
    pub fn unmount(&mut self) {
        if let Some(mut pointer) = self.pointer.take() {
            pointer.unsubscribe();
        }
        if let Some(frames) = self.frames.take() {
            frames.cancel();
        }
        self.engine.borrow_mut().stop();
        self.layer.remove();
        log::info!("glow background unmounted");
    }
}

fn mount_inner() -> anyhow::Result<GlowBackground> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let layer = background::ensure_layer(&document)
        .map_err(|e| anyhow::anyhow!("layer creation failed: {e:?}"))?;

    let engine = Rc::new(RefCell::new(GlowEngine::new()));
    engine.borrow_mut().start();
    // Paint the documented initial state so the layer is never blank before
    // the first tick.
    background::apply(&layer, &engine.borrow().visual());

    let pointer = sampler::subscribe(engine.clone())
        .map_err(|e| anyhow::anyhow!("pointer subscription failed: {e:?}"))?;

    let engine_tick = engine.clone();
    let layer_tick = layer.clone();
    let frames = frame::FrameLoop::start(move |t_ms| {
        let vs = engine_tick.borrow_mut().tick(t_ms);
        background::apply(&layer_tick, &vs);
    })
    .map_err(|e| anyhow::anyhow!("frame scheduling failed: {e:?}"))?;

    log::info!("glow background mounted");
    Ok(GlowBackground {
        engine,
        layer,
        pointer: Some(pointer),
        frames: Some(frames),
    })
}

impl Drop for GlowBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}
