//! Timer and rendering-frame scheduling.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use super::WebError;
use crate::counter::CounterRun;

/// Run `f` once after `delay_ms`.
pub fn after<F>(window: &Window, delay_ms: u32, f: F) -> Result<i32, WebError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms.min(i32::MAX as u32) as i32,
    )?;
    Ok(handle)
}

/// Drive a counter run from rendering frames until it is done.
///
/// The frame callback re-requests itself while the run needs frames and
/// drops itself after the final one.
pub fn animate_counter(
    window: &Window,
    element: HtmlElement,
    mut run: CounterRun,
) -> Result<(), WebError> {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let handle = Rc::clone(&slot);
    let win = window.clone();

    *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        if !run.step(&element, timestamp) {
            let _ = handle.borrow_mut().take();
            return;
        }
        let requested = match handle.borrow().as_ref() {
            Some(callback) => win.request_animation_frame(callback.as_ref().unchecked_ref()),
            None => return,
        };
        if let Err(err) = requested {
            log::warn!("counter frame request failed: {:?}", err);
            let _ = handle.borrow_mut().take();
        }
    }));

    let requested = match slot.borrow().as_ref() {
        Some(callback) => window.request_animation_frame(callback.as_ref().unchecked_ref()),
        None => return Ok(()),
    };
    if let Err(err) = requested {
        let _ = slot.borrow_mut().take();
        return Err(err.into());
    }
    Ok(())
}
