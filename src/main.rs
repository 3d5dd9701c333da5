mod app;
mod components;
mod config;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    // Prefer the #app container from index.html, fall back to <body>
    match document().get_element_by_id("app") {
        Some(root) => mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget(),
        None => mount_to_body(App),
    }
}
