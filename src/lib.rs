//! # video-qa-widget
//!
//! Leptos + WASM content script that overlays a chat panel on a video page
//! and lets the viewer ask questions about the video being watched. The
//! question, the video id, and the playback position go to an external
//! answering backend; the answer is rendered inline.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Browser-independent controller core, conversation, identity parsing |
//! | [`net`] | Backend wire types, HTTP client, question relay |
//! | [`dom`] | Anchor lookup, page reads, mutation observers, mounting |
//! | [`components`] | Leptos views for the toggle button and chat panel |
//! | [`config`] | Backend URL and timing configuration |
//! | [`consts`] | Reserved ids, copy, defaults |
//!
//! Browser-only code is gated behind the `csr` feature; everything else is
//! tested natively with `cargo test`.

pub mod components;
pub mod config;
pub mod consts;
#[cfg(feature = "csr")]
pub mod controller;
pub mod dom;
pub mod net;
pub mod state;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "csr")]
use crate::config::WidgetConfig;

/// Content script entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger init failed: {e}").into());
    }

    let config = WidgetConfig::from_build_env();
    run_when_ready(move || controller::install(config));
}

/// Run `f` now if the document has parsed, otherwise on `DOMContentLoaded`.
#[cfg(feature = "csr")]
fn run_when_ready(f: impl FnOnce() + 'static) {
    let Ok(doc) = dom::document() else {
        log::error!("no document, widget not started");
        return;
    };
    if doc.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if let Err(e) = doc.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
        log::error!("could not wait for DOMContentLoaded: {e:?}");
    }
}
