//! BloodChain - blood donation network landing site
//!
//! Server-rendered "coming soon" page for BloodChain, built with Leptos and
//! hydrated with WebAssembly. Two skins share one set of page state machines.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::ui::theme::site_config_from_document;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let config = site_config_from_document();
    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <App/> }
    });
}
