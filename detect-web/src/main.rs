//! Browser entry point for the language-detection front-end.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod form;
mod pages;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Readable panic messages in the browser console
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("language detection front-end starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen once the WASM bundle is running.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::warn!("no document available, skipping loading screen removal");
        return;
    };

    if let Some(loading) = document.get_element_by_id("leptos-loading") {
        loading.set_attribute("style", "display: none;").ok();
        log::info!("loading screen hidden");
    } else {
        log::warn!("loading element with id 'leptos-loading' not found");
    }
}
