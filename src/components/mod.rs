//! Leptos components injected into the host page.

pub mod chat_panel;
pub mod toggle_button;
