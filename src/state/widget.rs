//! Widget controller core.
//!
//! DESIGN
//! ======
//! `WidgetCore` owns every piece of mutable widget state: the tracked video,
//! the conversation, panel visibility, the status line, the input draft, and
//! in-flight call bookkeeping. It has no browser dependencies; the DOM shell
//! feeds it URLs and page snapshots and renders whatever it holds.
//!
//! STALE RESPONSES
//! ===============
//! Every outgoing call carries the video id read from the page at send time.
//! A reply is stale when the tracked video is no longer that id by the time
//! it lands, and is then handled per [`StaleResponsePolicy`]. Submitting also
//! folds the submit-time URL into navigation state, so a question asked
//! before the navigation watch has caught up starts the new conversation
//! instead of being wiped by it.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use crate::config::StaleResponsePolicy;
use crate::consts::{
    BACKEND_FAILURE_MESSAGE, IN_PROGRESS_STATUS, MISSING_IDENTITY_MESSAGE, NEW_CONTENT_GREETING, WELCOME_GREETING,
};
use crate::net::types::{AskRequest, RelayError};
use crate::state::clock::Timestamp;
use crate::state::conversation::{ConversationState, Sender};
use crate::state::identity::{ContentIdentity, extract_identity, is_content_page};

/// Panel visibility. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// Page context captured at the moment a question is submitted.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSnapshot {
    pub href: String,
    /// Playback position in seconds; 0 when there is no media element.
    pub playback_position: f64,
}

/// Result of comparing a freshly observed URL with the last one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Same URL as before.
    Unchanged,
    /// URL changed to a page that is not a video page. State is kept.
    LeftContent,
    /// URL changed but still points at the tracked video.
    SameContent,
    /// A different video (or a video page without an id); the conversation
    /// was reset.
    NewContent(Option<ContentIdentity>),
}

/// Tag for one outgoing backend call.
#[derive(Clone, Debug, PartialEq)]
pub struct AskTicket {
    pub seq: u64,
    pub identity: ContentIdentity,
    pub request: AskRequest,
}

/// Result of trying to submit the current draft.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    /// Blank question; nothing happened.
    Ignored,
    /// No video id on the page; an error message was appended.
    Rejected,
    /// The question was appended and a call should be issued.
    Dispatched(AskTicket),
}

/// What happened when a backend call finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Answered,
    Failed,
    /// The conversation moved on and the reply was dropped.
    Discarded,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetCore {
    identity: Option<ContentIdentity>,
    last_href: String,
    conversation: ConversationState,
    visibility: Visibility,
    status: String,
    draft: String,
    in_flight: usize,
    next_seq: u64,
    stale_policy: StaleResponsePolicy,
}

impl WidgetCore {
    /// Controller state for a page first seen at `href`.
    #[must_use]
    pub fn new(href: &str, stale_policy: StaleResponsePolicy, now: Timestamp) -> Self {
        let identity = if is_content_page(href) { extract_identity(href) } else { None };
        Self {
            identity,
            last_href: href.to_owned(),
            conversation: ConversationState::with_greeting(WELCOME_GREETING, now),
            visibility: Visibility::Hidden,
            status: String::new(),
            draft: String::new(),
            in_flight: 0,
            next_seq: 0,
            stale_policy,
        }
    }

    // --- Navigation ---

    /// Compare `href` with the last observed URL and reset on a new video.
    pub fn observe_location(&mut self, href: &str, now: Timestamp) -> NavigationOutcome {
        if href == self.last_href {
            return NavigationOutcome::Unchanged;
        }
        self.last_href = href.to_owned();

        if !is_content_page(href) {
            return NavigationOutcome::LeftContent;
        }

        let identity = extract_identity(href);
        if identity == self.identity {
            return NavigationOutcome::SameContent;
        }

        self.identity.clone_from(&identity);
        self.conversation.reset_with_greeting(NEW_CONTENT_GREETING, now);
        match &identity {
            Some(id) => log::info!("new video detected: {id}"),
            None => log::info!("video page without an id: {href}"),
        }
        NavigationOutcome::NewContent(identity)
    }

    // --- Visibility ---

    /// Flip panel visibility and return the new value.
    pub fn toggle_visibility(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        self.visibility
    }

    pub fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    // --- Draft ---

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    // --- Conversation flow ---

    /// Turn the current draft into a backend call, if possible.
    pub fn begin_submission(&mut self, page: &PageSnapshot, now: Timestamp) -> Submission {
        let question = self.draft.trim().to_owned();
        if question.is_empty() {
            return Submission::Ignored;
        }

        // The watch may not have seen this URL yet.
        self.observe_location(&page.href, now);

        let Some(identity) = extract_identity(&page.href) else {
            log::warn!("submission without a video id: {}", page.href);
            self.conversation.push(Sender::Assistant, MISSING_IDENTITY_MESSAGE, now);
            return Submission::Rejected;
        };

        self.conversation.push(Sender::User, question.clone(), now);
        self.draft.clear();
        self.in_flight += 1;
        self.status = IN_PROGRESS_STATUS.to_owned();

        let seq = self.next_seq;
        self.next_seq += 1;
        log::debug!(
            "ask #{seq}: video={identity} position={:.1}s question={question:?}",
            page.playback_position
        );

        Submission::Dispatched(AskTicket {
            seq,
            request: AskRequest {
                video_id: identity.as_str().to_owned(),
                current_time: sanitize_position(page.playback_position),
                question,
            },
            identity,
        })
    }

    /// Record the outcome of the call issued for `ticket`.
    pub fn complete_submission(
        &mut self,
        ticket: &AskTicket,
        result: Result<String, RelayError>,
        now: Timestamp,
    ) -> Completion {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight == 0 {
            self.status.clear();
        }

        if let Err(e) = &result {
            log::warn!("ask #{} for {} failed: {e}", ticket.seq, ticket.identity);
        }

        let stale = self.identity.as_ref() != Some(&ticket.identity);
        if stale && self.stale_policy == StaleResponsePolicy::Discard {
            log::info!("dropping reply #{} for {}: video changed", ticket.seq, ticket.identity);
            return Completion::Discarded;
        }

        match result {
            Ok(answer) => {
                self.conversation.push(Sender::Assistant, answer, now);
                Completion::Answered
            }
            Err(_) => {
                self.conversation.push(Sender::Assistant, BACKEND_FAILURE_MESSAGE, now);
                Completion::Failed
            }
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn identity(&self) -> Option<&ContentIdentity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

fn sanitize_position(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds >= 0.0 { seconds } else { 0.0 }
}
