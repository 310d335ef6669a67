//! Question relay: draft → backend call → rendered answer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The relay is the only await point in the widget. Core state is borrowed
//! twice, once before the call and once after it, and never across the
//! await, so other handlers (navigation, toggling) keep running while the
//! backend thinks.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use std::cell::RefCell;
use std::future::Future;

use leptos::prelude::{RwSignal, Update};

use crate::net::types::{AskRequest, AskResponse, RelayError};
use crate::state::clock::Clock;
use crate::state::widget::{Completion, PageSnapshot, Submission, WidgetCore};

/// Anything that can answer a question about a video.
pub trait AnswerBackend {
    fn ask(&self, request: &AskRequest) -> impl Future<Output = Result<AskResponse, RelayError>>;
}

/// Mutable access to the controller core, wherever it is stored.
pub trait CoreAccess {
    /// Run `f` against the core. `None` when the core is gone.
    fn with_core<R>(&self, f: impl FnOnce(&mut WidgetCore) -> R) -> Option<R>;
}

impl CoreAccess for RefCell<WidgetCore> {
    fn with_core<R>(&self, f: impl FnOnce(&mut WidgetCore) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl CoreAccess for RwSignal<WidgetCore> {
    fn with_core<R>(&self, f: impl FnOnce(&mut WidgetCore) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// End state of one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored,
    Rejected,
    Completed(Completion),
    /// The core was disposed while the call was in flight.
    Detached,
}

/// Submit the current draft and render the outcome.
pub async fn submit_question<C, B, K>(core: &C, backend: &B, page: PageSnapshot, clock: &K) -> SubmitOutcome
where
    C: CoreAccess,
    B: AnswerBackend,
    K: Clock,
{
    let Some(submission) = core.with_core(|c| c.begin_submission(&page, clock.now())) else {
        return SubmitOutcome::Detached;
    };
    let ticket = match submission {
        Submission::Ignored => return SubmitOutcome::Ignored,
        Submission::Rejected => return SubmitOutcome::Rejected,
        Submission::Dispatched(ticket) => ticket,
    };

    let result = backend.ask(&ticket.request).await.map(|resp| {
        if let Some(analysis) = &resp.analysis {
            log::debug!(
                "ask #{} analysed as {:?} via {:?}",
                ticket.seq,
                analysis.question_type,
                analysis.strategy
            );
        }
        resp.response
    });

    core.with_core(|c| c.complete_submission(&ticket, result, clock.now()))
        .map_or(SubmitOutcome::Detached, SubmitOutcome::Completed)
}
