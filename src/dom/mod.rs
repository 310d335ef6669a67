//! Host page integration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `anchor`, `page`, and `schedule` compile everywhere so their rules can be
//! tested natively. The observer, navigation, and affordance modules touch the live
//! DOM and are gated behind `#[cfg(feature = "csr")]`.

#[cfg(feature = "csr")]
pub mod affordance;
pub mod anchor;
#[cfg(feature = "csr")]
pub mod navigation;
#[cfg(feature = "csr")]
pub mod observer;
pub mod page;
pub mod schedule;

/// Failure talking to the browser. Logged; never shown to the viewer.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("no document body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// The page's document.
///
/// # Errors
///
/// Fails outside a browser window.
#[cfg(feature = "csr")]
pub fn document() -> Result<web_sys::Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}
