//! The widget controller: one per page, alive until the page goes away.
//!
//! SYSTEM CONTEXT
//! ==============
//! `WidgetController` is built once from a [`WidgetConfig`], owns the
//! reactive core and the navigation watch, and hands the core signal to every
//! handler that needs it. A single thread-local slot keeps it alive; there is
//! no teardown because the page never asks for one.

use std::cell::RefCell;

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::dom::DomError;
use crate::dom::affordance::{install_panel, install_toggle};
use crate::dom::navigation::watch_navigation;
use crate::dom::observer::MutationWatch;
use crate::dom::page::current_href;
use crate::net::api::HttpBackend;
use crate::state::clock::{BrowserClock, Clock};
use crate::state::widget::WidgetCore;

thread_local! {
    static CONTROLLER: RefCell<Option<WidgetController>> = const { RefCell::new(None) };
}

pub struct WidgetController {
    _owner: Owner,
    core: RwSignal<WidgetCore>,
    _navigation: MutationWatch,
}

impl WidgetController {
    /// Build the controller and inject the widget.
    ///
    /// # Errors
    ///
    /// Fails when the page has no document or the panel cannot be mounted.
    pub fn start(config: WidgetConfig) -> Result<Self, DomError> {
        let owner = Owner::new();
        owner.with(|| {
            let href = current_href();
            let core = RwSignal::new(WidgetCore::new(&href, config.stale_policy, BrowserClock.now()));
            let backend = HttpBackend::new(&config);
            log::info!("video q&a widget starting on {href}, backend {}", backend.ask_url());

            spawn_health_probe(backend.clone());

            let navigation = watch_navigation(core, config.navigation_debounce_ms, {
                let config = config.clone();
                move || {
                    if let Err(e) = install_toggle(core, &config) {
                        log::warn!("toggle reinstall failed: {e}");
                    }
                }
            })?;

            install_toggle(core, &config)?;
            install_panel(core, backend)?;

            Ok(Self { _owner: owner.clone(), core, _navigation: navigation })
        })
    }

    #[must_use]
    pub fn core(&self) -> RwSignal<WidgetCore> {
        self.core
    }
}

/// Create the page's controller unless one already exists.
pub fn install(config: WidgetConfig) {
    if CONTROLLER.with(|slot| slot.borrow().is_some()) {
        log::debug!("widget already installed");
        return;
    }
    match WidgetController::start(config) {
        Ok(controller) => CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller)),
        Err(e) => log::error!("widget failed to start: {e}"),
    }
}

fn spawn_health_probe(backend: HttpBackend) {
    leptos::task::spawn_local(async move {
        match backend.check_health().await {
            Ok(()) => log::info!("backend reachable"),
            Err(e) => log::warn!("backend health check failed: {e}"),
        }
    });
}
