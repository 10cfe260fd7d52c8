//! # client
//!
//! Leptos + WASM frontend for SampleApp: Home, About, Login and Todo pages,
//! the reactive auth context, the Cognito identity adapter and the browser
//! HTTP transport.
//!
//! The authentication state machine itself lives in `sampleapp-core`; this
//! crate mirrors it into signals and renders it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
