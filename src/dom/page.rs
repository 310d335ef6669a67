//! Reads of host page state: address and playback position.
//!
//! Browser-only reads return neutral values in native builds.

use crate::state::widget::PageSnapshot;

/// Current `location.href`, or empty when unavailable.
pub fn current_href() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Playback position of the first `<video>` element in seconds; 0 when there is none.
pub fn playback_position() -> f64 {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Ok(doc) = super::document() else {
            return 0.0;
        };
        match doc.query_selector("video") {
            Ok(Some(el)) => el
                .dyn_into::<web_sys::HtmlMediaElement>()
                .map_or(0.0, |media| media.current_time()),
            _ => 0.0,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Address and playback position, read now.
pub fn capture_snapshot() -> PageSnapshot {
    PageSnapshot { href: current_href(), playback_position: playback_position() }
}
