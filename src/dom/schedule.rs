//! Timing rules for the DOM watchers, kept apart from the browser so they
//! can be tested natively.
//!
//! - [`Debounce`] folds a burst of mutation batches into one URL check.
//! - [`BoundedWait`] owns the anchor watch and guarantees it is disconnected
//!   either when an anchor shows up or when the deadline passes.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::Cell;

use super::anchor::{AnchorStrategy, InsertionPlan};

// =============================================================================
// Debounce
// =============================================================================

/// At most one pending check at a time.
#[derive(Debug, Default)]
pub struct Debounce {
    pending: Cell<bool>,
}

impl Debounce {
    /// Record a batch. `true` means no check was pending and the caller
    /// should schedule one now.
    pub fn arm(&self) -> bool {
        !self.pending.replace(true)
    }

    /// The scheduled check is running; the next batch schedules a new one.
    pub fn fire(&self) {
        self.pending.set(false);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

// =============================================================================
// Bounded anchor wait
// =============================================================================

/// Something observing the page that can be told to stop.
pub trait Watch {
    fn disconnect(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WaitState {
    Watching,
    Found,
    Expired,
}

/// What the deadline found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deadline {
    /// An anchor had already appeared.
    AlreadyFound,
    /// Nothing appeared in time; the button will not be inserted.
    Expired,
}

/// Waits for an anchor until a deadline, holding the watch that feeds it.
#[derive(Debug)]
pub struct BoundedWait<W> {
    watch: Option<W>,
    state: WaitState,
}

impl<W> Default for BoundedWait<W> {
    fn default() -> Self {
        Self { watch: None, state: WaitState::Watching }
    }
}

impl<W: Watch> BoundedWait<W> {
    /// Hand over the watch once it is observing.
    pub fn attach(&mut self, watch: W) {
        if self.state == WaitState::Watching {
            self.watch = Some(watch);
        } else {
            watch.disconnect();
        }
    }

    /// Feed the plan computed for one mutation batch.
    ///
    /// Returns the anchor to insert under the first time one is seen. Any
    /// plan other than [`InsertionPlan::Wait`] ends the wait and disconnects
    /// the watch; the watch itself is kept until [`Self::on_deadline`] so it
    /// is never dropped from inside its own callback.
    pub fn on_batch(&mut self, plan: InsertionPlan) -> Option<AnchorStrategy> {
        if self.state != WaitState::Watching || plan == InsertionPlan::Wait {
            return None;
        }
        self.state = WaitState::Found;
        if let Some(watch) = &self.watch {
            watch.disconnect();
        }
        match plan {
            InsertionPlan::Insert(anchor) => Some(anchor),
            InsertionPlan::AlreadyPresent | InsertionPlan::Wait => None,
        }
    }

    /// The deadline passed: disconnect and release the watch whatever happened.
    pub fn on_deadline(&mut self) -> Deadline {
        if let Some(watch) = self.watch.take() {
            watch.disconnect();
        }
        match self.state {
            WaitState::Found => Deadline::AlreadyFound,
            WaitState::Watching | WaitState::Expired => {
                self.state = WaitState::Expired;
                Deadline::Expired
            }
        }
    }

    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.state == WaitState::Watching
    }

    #[must_use]
    pub fn holds_watch(&self) -> bool {
        self.watch.is_some()
    }
}
