//! # bindery-client
//!
//! Leptos + WASM frontend for the bookbinding template generator. The user
//! lays out decorative text and stamps on a case-binding cover, submits the
//! configuration to the generation service, and gets back an SVG cutting
//! template with its physical measurements.
//!
//! This crate contains pages, components, application state, and the wire
//! types for the generation protocol. Everything browser-specific sits
//! behind the `csr` feature; with no features the crate compiles natively
//! so the state and protocol logic runs under plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mount the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}
