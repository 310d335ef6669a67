//! Mounting the toggle button and chat panel into the live page.
//!
//! Both elements are mounted on the body. The button waits for an anchor
//! (see [`super::anchor`]) and then a settle delay; when no anchor exists
//! yet, a [`BoundedWait`] watches for one up to a fixed deadline. Every path
//! re-checks the reserved id before mounting.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::anchor::{
    AffordanceHost, AnchorStrategy, InsertAttempt, InsertionPlan, MountOnce, mount_once, plan_insertion, try_insert,
};
use super::observer::MutationWatch;
use super::schedule::{BoundedWait, Deadline};
use super::{DomError, document};
use crate::components::chat_panel::ChatPanel;
use crate::components::toggle_button::ToggleButton;
use crate::config::WidgetConfig;
use crate::consts::{CHAT_PANEL_ID, TOGGLE_BUTTON_ID};
use crate::net::api::HttpBackend;
use crate::state::widget::WidgetCore;

/// The live document; `mount` hands the body to the wrapped closure.
struct DomHost<'a, F> {
    doc: &'a Document,
    mount: F,
}

impl<F> DomHost<'_, F> {
    fn find_anchor(&self, strategy: AnchorStrategy) -> Option<Element> {
        match strategy {
            AnchorStrategy::Body => self.doc.body().map(Into::into),
            _ => self.doc.query_selector(strategy.selector()).unwrap_or_default(),
        }
    }
}

impl<F: FnMut(HtmlElement)> AffordanceHost for DomHost<'_, F> {
    fn has_element(&self, id: &str) -> bool {
        self.doc.get_element_by_id(id).is_some()
    }

    fn has_anchor(&self, strategy: AnchorStrategy) -> bool {
        self.find_anchor(strategy).is_some()
    }

    fn mount(&mut self) -> bool {
        let Some(body) = self.doc.body() else {
            return false;
        };
        (self.mount)(body);
        true
    }
}

fn toggle_host(doc: &Document, core: RwSignal<WidgetCore>) -> DomHost<'_, impl FnMut(HtmlElement)> {
    DomHost {
        doc,
        mount: move |body| leptos::mount::mount_to(body, move || view! { <ToggleButton core=core/> }).forget(),
    }
}

/// Make sure the toggle button ends up in the page.
///
/// # Errors
///
/// Fails when the document is unavailable or the anchor watch cannot start.
pub fn install_toggle(core: RwSignal<WidgetCore>, config: &WidgetConfig) -> Result<(), DomError> {
    let doc = document()?;
    match plan_insertion(&toggle_host(&doc, core), TOGGLE_BUTTON_ID) {
        InsertionPlan::AlreadyPresent => log::debug!("toggle already present"),
        InsertionPlan::Insert(anchor) => {
            log::debug!("anchor {anchor:?} found, inserting toggle");
            schedule_insert(core, config.insert_settle_delay_ms);
        }
        InsertionPlan::Wait => wait_for_anchor(&doc, core, config)?,
    }
    Ok(())
}

/// Mount the chat panel on the body unless it is already there.
///
/// # Errors
///
/// Fails when the document or its body is unavailable.
pub fn install_panel(core: RwSignal<WidgetCore>, backend: HttpBackend) -> Result<(), DomError> {
    let doc = document()?;
    let mut host = DomHost {
        doc: &doc,
        mount: move |body| {
            let backend = backend.clone();
            leptos::mount::mount_to(body, move || view! { <ChatPanel core=core backend=backend/> }).forget();
        },
    };
    match mount_once(&mut host, CHAT_PANEL_ID) {
        MountOnce::Mounted => log::debug!("chat panel mounted"),
        MountOnce::AlreadyPresent => log::debug!("chat panel already present"),
        MountOnce::Refused => return Err(DomError::NoBody),
    }
    Ok(())
}

fn schedule_insert(core: RwSignal<WidgetCore>, delay_ms: u32) {
    Timeout::new(delay_ms, move || insert_now(core)).forget();
}

fn insert_now(core: RwSignal<WidgetCore>) {
    let doc = match document() {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("toggle insert skipped: {e}");
            return;
        }
    };
    match try_insert(&mut toggle_host(&doc, core), TOGGLE_BUTTON_ID) {
        InsertAttempt::Inserted(anchor) => log::info!("toggle inserted, page ready at {anchor:?}"),
        InsertAttempt::AlreadyPresent => log::debug!("toggle already present"),
        InsertAttempt::NoAnchor => log::warn!("anchor vanished before insert"),
        InsertAttempt::Refused(_) => log::warn!("no document body, toggle not inserted"),
    }
}

fn wait_for_anchor(doc: &Document, core: RwSignal<WidgetCore>, config: &WidgetConfig) -> Result<(), DomError> {
    let wait: Rc<RefCell<BoundedWait<MutationWatch>>> = Rc::default();
    let settle_ms = config.insert_settle_delay_ms;
    let timeout_ms = config.insert_timeout_ms;

    let observed = MutationWatch::observe(doc, {
        let wait = Rc::clone(&wait);
        move || {
            if !wait.borrow().is_watching() {
                return;
            }
            let Ok(doc) = document() else {
                return;
            };
            let plan = plan_insertion(&toggle_host(&doc, core), TOGGLE_BUTTON_ID);
            if let Some(anchor) = wait.borrow_mut().on_batch(plan) {
                log::debug!("anchor {anchor:?} appeared");
                schedule_insert(core, settle_ms);
            }
        }
    })?;
    wait.borrow_mut().attach(observed);

    Timeout::new(timeout_ms, move || {
        if wait.borrow_mut().on_deadline() == Deadline::Expired {
            log::warn!("no anchor after {timeout_ms}ms, toggle not inserted");
        }
    })
    .forget();
    Ok(())
}
