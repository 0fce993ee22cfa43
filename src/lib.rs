//! # sitekit
//!
//! Client-side enhancement layer for a static site, compiled to WebAssembly.
//! It persists a light/dark theme preference, toggles the responsive
//! navigation menu, and validates the contact form before a mocked send.
//!
//! All behavior is written against the [`view::View`] capability trait so it
//! runs (and is tested) without a browser. The `hydrate` feature adds the
//! web-sys binding in [`dom`] and the wasm entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Page context and startup wiring |
//! | [`config`] | Element ids, storage key, submit delay, log level |
//! | [`error`] | Crate error type |
//! | [`view`] | Capability traits for the DOM, storage, clock and timers |
//! | [`store`] | In-memory preference store |
//! | [`state`] | Theme, navigation and contact-form components |
//! | [`util`] | Field validators |

pub mod app;
pub mod config;
pub mod error;
pub mod state;
pub mod store;
pub mod util;
pub mod view;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(test)]
#[path = "fakes_test.rs"]
pub(crate) mod fakes;

/// WASM entry point: runs once when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    dom::mount();
}
