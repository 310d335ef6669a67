//! Single-page navigation detection.
//!
//! The host never reloads between videos, so URL changes are inferred from
//! DOM churn: every mutation batch schedules one URL comparison after a short
//! debounce window, and further batches inside the window are folded into it.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::RwSignal;

use super::DomError;
use super::observer::MutationWatch;
use super::page::current_href;
use super::schedule::Debounce;
use crate::net::relay::CoreAccess;
use crate::state::clock::{BrowserClock, Clock};
use crate::state::widget::{NavigationOutcome, WidgetCore};

/// Start watching for navigation.
///
/// `on_new_content` runs after the conversation has been reset for a new video.
///
/// # Errors
///
/// Fails when the document is unavailable or the observer cannot be created.
pub fn watch_navigation(
    core: RwSignal<WidgetCore>,
    debounce_ms: u32,
    on_new_content: impl Fn() + 'static,
) -> Result<MutationWatch, DomError> {
    let doc = super::document()?;
    let debounce = Rc::new(Debounce::default());
    let on_new_content = Rc::new(on_new_content);

    MutationWatch::observe(&doc, move || {
        if !debounce.arm() {
            return;
        }
        let debounce = Rc::clone(&debounce);
        let on_new_content = Rc::clone(&on_new_content);
        Timeout::new(debounce_ms, move || {
            debounce.fire();
            let href = current_href();
            match core.with_core(|c| c.observe_location(&href, BrowserClock.now())) {
                Some(NavigationOutcome::NewContent(_)) => on_new_content(),
                Some(NavigationOutcome::LeftContent) => log::debug!("left video page: {href}"),
                Some(NavigationOutcome::Unchanged | NavigationOutcome::SameContent) => {}
                None => log::debug!("navigation ignored: widget disposed"),
            }
        })
        .forget();
    })
}
