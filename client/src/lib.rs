//! # client
//!
//! Leptos + WASM page for the bias assessment survey.
//!
//! The page has two independent controllers: the theme toggle and the
//! assessment form. Both are plain structs built over small seams
//! (`ClassList`, `FormFields`, `Transport`, `ResultsView`) so their behavior
//! is tested without a browser; the components only wire them to the DOM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
