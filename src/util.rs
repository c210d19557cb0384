// Utility helpers shared across components.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cerror(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

/// Turn an opaque JS error into a printable message.
pub fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Run `f` on the next animation frame.
pub fn on_next_frame<F: FnOnce() + 'static>(f: F) {
    if let Some(window) = web_sys::window() {
        let cb = Closure::once_into_js(f);
        let _ = window.request_animation_frame(cb.unchecked_ref());
    }
}
