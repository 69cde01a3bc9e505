//! Global pointer-move subscription feeding the shared engine target.

use glow_core::GlowEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::dom;

/// Active listener registration. Unsubscribing removes the listener and drops
/// the closure, so no further samples can be written.
pub struct PointerSubscription {
    closure: Option<Closure<dyn FnMut(web::PointerEvent)>>,
}

/// Register a passive `pointermove` listener on the window. Each event is
/// converted to percent-of-viewport and written into the engine's target; no
/// redraw happens here, only on the next scheduled frame.
pub fn subscribe(engine: Rc<RefCell<GlowEngine>>) -> Result<PointerSubscription, JsValue> {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some((w, h)) = dom::viewport_size() {
            engine
                .borrow_mut()
                .pointer_moved(f64::from(ev.client_x()), f64::from(ev.client_y()), w, h);
        }
    }) as Box<dyn FnMut(_)>);

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "pointermove",
        closure.as_ref().unchecked_ref(),
        &opts,
    )?;
    Ok(PointerSubscription {
        closure: Some(closure),
    })
}

impl PointerSubscription {
    /// Remove the listener. Idempotent.
    pub fn unsubscribe(&mut self) {
        if let Some(closure) = self.closure.take() {
            if let Some(window) = web::window() {
                let _ = window.remove_event_listener_with_callback(
                    "pointermove",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
