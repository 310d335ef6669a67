use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::config::StaleResponsePolicy;
use crate::consts::{BACKEND_FAILURE_MESSAGE, MISSING_IDENTITY_MESSAGE};
use crate::state::clock::Timestamp;
use crate::state::conversation::Sender;

const VIDEO: &str = "https://www.youtube.com/watch?v=vid42";
const LISTING: &str = "https://www.youtube.com/";

// =============================================================
// Helpers
// =============================================================

struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        Timestamp { epoch_ms: 0.0, utc_offset_minutes: 0 }
    }
}

struct MockBackend {
    reply: Result<AskResponse, RelayError>,
    calls: Cell<usize>,
    last_request: RefCell<Option<AskRequest>>,
}

impl MockBackend {
    fn answering(text: &str) -> Self {
        Self::with_reply(Ok(AskResponse {
            response: text.to_owned(),
            video_id: None,
            timestamp: None,
            analysis: None,
        }))
    }

    fn failing(err: RelayError) -> Self {
        Self::with_reply(Err(err))
    }

    fn with_reply(reply: Result<AskResponse, RelayError>) -> Self {
        Self { reply, calls: Cell::new(0), last_request: RefCell::new(None) }
    }
}

impl AnswerBackend for MockBackend {
    fn ask(&self, request: &AskRequest) -> impl Future<Output = Result<AskResponse, RelayError>> {
        self.calls.set(self.calls.get() + 1);
        *self.last_request.borrow_mut() = Some(request.clone());
        let reply = self.reply.clone();
        async move { reply }
    }
}

/// Backend that navigates the page to another video before answering.
struct NavigatingBackend<'a> {
    core: &'a RefCell<WidgetCore>,
}

impl AnswerBackend for NavigatingBackend<'_> {
    fn ask(&self, _request: &AskRequest) -> impl Future<Output = Result<AskResponse, RelayError>> {
        self.core
            .borrow_mut()
            .observe_location("https://www.youtube.com/watch?v=other", FixedClock.now());
        async {
            Ok(AskResponse { response: "late".to_owned(), video_id: None, timestamp: None, analysis: None })
        }
    }
}

fn core_with_draft(draft: &str) -> RefCell<WidgetCore> {
    let mut core = WidgetCore::new(VIDEO, StaleResponsePolicy::Discard, FixedClock.now());
    core.set_draft(draft);
    RefCell::new(core)
}

fn page(href: &str) -> PageSnapshot {
    PageSnapshot { href: href.to_owned(), playback_position: 61.5 }
}

fn messages(core: &RefCell<WidgetCore>) -> Vec<(Sender, String)> {
    core.borrow()
        .conversation()
        .messages()
        .iter()
        .map(|m| (m.sender, m.text.clone()))
        .collect()
}

// =============================================================
// submit_question
// =============================================================

#[test]
fn empty_question_makes_no_call() {
    let core = core_with_draft("   ");
    let backend = MockBackend::answering("X");
    let outcome = block_on(submit_question(&core, &backend, page(VIDEO), &FixedClock));

    assert_eq!(outcome, SubmitOutcome::Ignored);
    assert_eq!(backend.calls.get(), 0);
    assert_eq!(messages(&core).len(), 1);
}

#[test]
fn missing_identity_makes_no_call_and_appends_one_error() {
    let core = core_with_draft("Q");
    let backend = MockBackend::answering("X");
    let outcome = block_on(submit_question(&core, &backend, page(LISTING), &FixedClock));

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(backend.calls.get(), 0);
    let msgs = messages(&core);
    assert_eq!(msgs.len(), 2);
    assert_eq!(msgs[1], (Sender::Assistant, MISSING_IDENTITY_MESSAGE.to_owned()));
}

#[test]
fn success_appends_question_then_answer() {
    let core = core_with_draft("Q");
    let backend = MockBackend::answering("X");
    let outcome = block_on(submit_question(&core, &backend, page(VIDEO), &FixedClock));

    assert_eq!(outcome, SubmitOutcome::Completed(Completion::Answered));
    assert_eq!(backend.calls.get(), 1);
    let msgs = messages(&core);
    assert_eq!(msgs[1..], [(Sender::User, "Q".to_owned()), (Sender::Assistant, "X".to_owned())]);
    assert_eq!(core.borrow().status(), "");
}

#[test]
fn request_carries_identity_position_and_question() {
    let core = core_with_draft("  why?  ");
    let backend = MockBackend::answering("because");
    block_on(submit_question(&core, &backend, page(VIDEO), &FixedClock));

    let sent = backend.last_request.borrow().clone();
    assert_eq!(
        sent,
        Some(AskRequest { video_id: "vid42".to_owned(), current_time: 61.5, question: "why?".to_owned() })
    );
}

#[test]
fn server_error_appends_one_generic_message() {
    let core = core_with_draft("Q");
    let backend = MockBackend::failing(RelayError::Status {
        status: 500,
        detail: Some("Traceback: KeyError".to_owned()),
    });
    let outcome = block_on(submit_question(&core, &backend, page(VIDEO), &FixedClock));

    assert_eq!(outcome, SubmitOutcome::Completed(Completion::Failed));
    let msgs = messages(&core);
    let assistant_after_question: Vec<_> = msgs[2..].iter().filter(|(s, _)| *s == Sender::Assistant).collect();
    assert_eq!(assistant_after_question.len(), 1);
    assert_eq!(assistant_after_question[0].1, BACKEND_FAILURE_MESSAGE);
    assert_eq!(core.borrow().status(), "");
}

#[test]
fn transport_error_is_reported_like_server_error() {
    let core = core_with_draft("Q");
    let backend = MockBackend::failing(RelayError::Transport("connection refused".to_owned()));
    block_on(submit_question(&core, &backend, page(VIDEO), &FixedClock));

    let last = messages(&core).pop().map(|(_, text)| text);
    assert_eq!(last.as_deref(), Some(BACKEND_FAILURE_MESSAGE));
}

#[test]
fn reply_for_previous_video_is_dropped() {
    let core = core_with_draft("Q");
    let backend = NavigatingBackend { core: &core };
    let outcome = block_on(submit_question(&core, &backend, page(VIDEO), &FixedClock));

    assert_eq!(outcome, SubmitOutcome::Completed(Completion::Discarded));
    assert_eq!(messages(&core).len(), 1);
    assert_eq!(core.borrow().status(), "");
}

#[test]
fn question_on_freshly_opened_video_keeps_its_answer() {
    let core = core_with_draft("Q");
    let backend = MockBackend::answering("about other");
    let other = "https://www.youtube.com/watch?v=other";
    let outcome = block_on(submit_question(&core, &backend, page(other), &FixedClock));
    core.borrow_mut().observe_location(other, FixedClock.now());

    assert_eq!(outcome, SubmitOutcome::Completed(Completion::Answered));
    let msgs = messages(&core);
    assert_eq!(msgs[1..], [(Sender::User, "Q".to_owned()), (Sender::Assistant, "about other".to_owned())]);
}
