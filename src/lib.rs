//! # iclix
//!
//! Leptos + WASM front end for the ICLIX movie browser. Talks to the
//! hosted movie API for listings, search, and detail data, and for
//! email/password and Google sign-in.
//!
//! The server half (feature `ssr`) renders the shell from `main.rs`;
//! the browser half (feature `hydrate`) takes over from there. Form
//! submission flows live in `state/` as plain state machines, kept
//! separate from view code so they test natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
