//! DOM and Web API utility functions.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Join CSS class names, skipping empty entries.
///
/// Used for the `class` passthrough on every upload component.
pub fn classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Best-effort message from a rejected promise or thrown value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| "Unknown error".to_string())
}
