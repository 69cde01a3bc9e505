//! Self-rescheduling `requestAnimationFrame` loop with a cancellable handle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type TickClosure = Closure<dyn FnMut(f64)>;

/// Repeating frame task. Each tick runs the callback with the timestamp the
/// browser hands to `requestAnimationFrame`, then requests the next frame.
///
/// `cancel` revokes the pending request; because browser dispatch is
/// single-threaded, once it returns no further tick can run. Must not be
/// called from inside the tick callback.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<TickClosure>>>,
}

impl FrameLoop {
    /// Schedule `on_frame` to run once per display refresh, starting with the
    /// next frame.
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<FrameLoop, JsValue> {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));

        let raf_id_tick = raf_id.clone();
        let tick_inner = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |t_ms: f64| {
            if raf_id_tick.take().is_none() {
                return;
            }
            on_frame(t_ms);
            if let Some(window) = web::window() {
                if let Ok(id) = window.request_animation_frame(
                    tick_inner.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                ) {
                    raf_id_tick.set(Some(id));
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let id = window
            .request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
        raf_id.set(Some(id));
        Ok(FrameLoop { raf_id, tick })
    }

    /// Cancel the pending frame and drop the tick closure. Idempotent.
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // Break the closure's self-reference cycle so it can be freed.
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
