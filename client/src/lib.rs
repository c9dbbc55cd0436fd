//! Browser dashboard for taskdesk.
//!
//! SYSTEM CONTEXT
//! ==============
//! A client-rendered Leptos app. Session state, request plumbing and guard
//! decisions come from the `session` crate; this crate supplies the browser
//! pieces (localStorage, `gloo-net`) and the views.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
