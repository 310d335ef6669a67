//! Floating button that opens and closes the chat panel.

use leptos::prelude::*;

use crate::consts::{TOGGLE_BUTTON_ID, TOGGLE_BUTTON_LABEL, TOGGLE_BUTTON_STYLE};
use crate::state::widget::WidgetCore;

/// Fixed-position toggle. Carries the reserved id; mount it at most once.
#[component]
pub fn ToggleButton(core: RwSignal<WidgetCore>) -> impl IntoView {
    let on_click = move |_| {
        if let Some(visibility) = core.try_update(WidgetCore::toggle_visibility) {
            log::debug!("panel {visibility:?}");
        }
    };

    view! {
        <div id=TOGGLE_BUTTON_ID class="ai-assistant-btn" style=TOGGLE_BUTTON_STYLE on:click=on_click>
            {TOGGLE_BUTTON_LABEL}
        </div>
    }
}
