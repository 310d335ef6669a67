//! `MutationObserver` wrapper.
//!
//! A [`MutationWatch`] owns both the observer and the Rust callback; dropping
//! it disconnects. Never drop a watch from inside its own callback: call
//! [`MutationWatch::disconnect`] there and drop it later.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{MutationObserver, MutationObserverInit, Node};

use super::DomError;
use super::schedule::Watch;

type BatchCallback = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

pub struct MutationWatch {
    observer: MutationObserver,
    _callback: BatchCallback,
}

impl MutationWatch {
    /// Watch `target` and its subtree for added/removed children.
    ///
    /// `on_batch` runs once per mutation batch, however many records it holds.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the browser rejects the observer.
    pub fn observe(target: &Node, mut on_batch: impl FnMut() + 'static) -> Result<Self, DomError> {
        let callback: BatchCallback =
            Closure::new(move |_records: js_sys::Array, _observer: MutationObserver| on_batch());
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;

        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer.observe_with_options(target, &init)?;

        Ok(Self { observer, _callback: callback })
    }

    /// Stop receiving batches. The callback stays alive until the watch is dropped.
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for MutationWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl Watch for MutationWatch {
    fn disconnect(&self) {
        MutationWatch::disconnect(self);
    }
}
