//! Chat panel: message history, question input, and status line.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::consts::{CHAT_PANEL_ID, INPUT_PLACEHOLDER};
use crate::dom::page::capture_snapshot;
use crate::net::api::HttpBackend;
use crate::net::relay::{SubmitOutcome, submit_question};
use crate::state::clock::BrowserClock;
use crate::state::conversation::Message;
use crate::state::widget::WidgetCore;

/// CSS `display` value of the status line.
fn status_display(status: &str) -> &'static str {
    if status.is_empty() { "none" } else { "block" }
}

/// Changes whenever the message list does; draft edits leave it alone.
/// Message ids keep increasing across resets, so the last id is enough.
fn history_version(core: &WidgetCore) -> Option<u64> {
    core.conversation().last().map(|m| m.id)
}

/// Whether a key press submits the question.
fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Chat panel bound to the widget core. Carries the reserved id; mount it at most once.
#[component]
pub fn ChatPanel(core: RwSignal<WidgetCore>, backend: HttpBackend) -> impl IntoView {
    let backend = StoredValue::new(backend);
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let visible = Memo::new(move |_| core.with(|c| c.visibility().is_visible()));
    let last_message_id = Memo::new(move |_| core.with(history_version));
    let status = Memo::new(move |_| core.with(|c| c.status().to_owned()));

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = last_message_id.get();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    // Focus the question field whenever the panel opens.
    Effect::new(move || {
        if !visible.get() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            if let Some(input) = input_ref.get() {
                if let Err(e) = input.focus() {
                    log::debug!("focus failed: {e:?}");
                }
            }
        }
    });

    let submit = move || {
        let page = capture_snapshot();
        let backend = backend.get_value();
        leptos::task::spawn_local(async move {
            let outcome = submit_question(&core, &backend, page, &BrowserClock).await;
            if outcome == SubmitOutcome::Detached {
                log::debug!("submission finished after the widget was disposed");
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div id=CHAT_PANEL_ID class="ai-chat-container" class:hidden=move || !visible.get()>
            <div class="ai-chat-header">
                <h3>"AI Assistant"</h3>
                <button class="ai-chat-close" on:click=move |_| core.update(WidgetCore::hide)>
                    "×"
                </button>
            </div>

            <div class="ai-chat-messages" node_ref=messages_ref>
                <For
                    each=move || {
                        last_message_id.track();
                        core.with_untracked(|c| c.conversation().messages().to_vec())
                    }
                    key=|msg: &Message| msg.id
                    children=move |msg: Message| {
                        view! {
                            <div class=msg.sender.css_class()>
                                <div class="message-content">{msg.text}</div>
                                <div class="message-time">{msg.time_label}</div>
                            </div>
                        }
                    }
                />
            </div>

            <div class="ai-chat-input">
                <input
                    type="text"
                    node_ref=input_ref
                    placeholder=INPUT_PLACEHOLDER
                    prop:value=move || core.with(|c| c.draft().to_owned())
                    on:input=move |ev| core.update(|c| c.set_draft(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button class="ai-send-btn" on:click=move |_| submit()>
                    <svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
                        <path d="M2,21L23,12L2,3V10L17,12L2,14V21Z"></path>
                    </svg>
                </button>
            </div>

            <div class="ai-chat-status" style:display=move || status_display(&status.get())>
                {move || status.get()}
            </div>
        </div>
    }
}
