//! Anchor lookup and idempotent insertion of the toggle button.
//!
//! DESIGN
//! ======
//! The host page renders asynchronously. An anchor is a host element whose
//! presence means the page has rendered far enough to take the button;
//! candidates are tried from most to least specific, with the document body
//! as the last resort. The anchor only gates insertion: our elements are
//! always mounted on the body, out of reach of the host's re-renders and of
//! any transformed ancestor that would break fixed positioning.
//!
//! Mounting goes through [`AffordanceHost`] so the ordering and idempotency
//! rules are shared by the browser and the tests.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// One way to find an anchor element, most specific first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorStrategy {
    /// Title row above the description.
    TopRow,
    /// Any element carrying the metadata class.
    MetadataClass,
    /// Primary column of the watch layout.
    PrimaryColumn,
    /// The metadata custom element itself.
    MetadataElement,
    /// The document body.
    Body,
}

/// Lookup order for anchors.
pub const ANCHOR_CANDIDATES: [AnchorStrategy; 5] = [
    AnchorStrategy::TopRow,
    AnchorStrategy::MetadataClass,
    AnchorStrategy::PrimaryColumn,
    AnchorStrategy::MetadataElement,
    AnchorStrategy::Body,
];

impl AnchorStrategy {
    /// CSS selector for `querySelector`.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::TopRow => "#top-row",
            Self::MetadataClass => ".ytd-watch-metadata",
            Self::PrimaryColumn => "#container #primary",
            Self::MetadataElement => "ytd-watch-metadata",
            Self::Body => "body",
        }
    }
}

/// What to do about the reserved element right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertionPlan {
    /// An element with the reserved id exists; do nothing.
    AlreadyPresent,
    /// The page is ready; this is the first anchor found.
    Insert(AnchorStrategy),
    /// No anchor yet; keep watching.
    Wait,
}

/// The page as seen by the insertion logic.
pub trait AffordanceHost {
    fn has_element(&self, id: &str) -> bool;
    fn has_anchor(&self, strategy: AnchorStrategy) -> bool;
    /// Mount the host's element on the body. `false` if there is no body.
    fn mount(&mut self) -> bool;
}

/// Decide what to do about `reserved_id` given the current page.
pub fn plan_insertion<H: AffordanceHost + ?Sized>(host: &H, reserved_id: &str) -> InsertionPlan {
    if host.has_element(reserved_id) {
        return InsertionPlan::AlreadyPresent;
    }
    ANCHOR_CANDIDATES
        .into_iter()
        .find(|&strategy| host.has_anchor(strategy))
        .map_or(InsertionPlan::Wait, InsertionPlan::Insert)
}

/// Result of one insertion attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertAttempt {
    AlreadyPresent,
    Inserted(AnchorStrategy),
    NoAnchor,
    Refused(AnchorStrategy),
}

/// Re-plan and insert if needed. Safe to call any number of times.
pub fn try_insert<H: AffordanceHost + ?Sized>(host: &mut H, reserved_id: &str) -> InsertAttempt {
    match plan_insertion(host, reserved_id) {
        InsertionPlan::AlreadyPresent => InsertAttempt::AlreadyPresent,
        InsertionPlan::Wait => InsertAttempt::NoAnchor,
        InsertionPlan::Insert(anchor) => {
            if host.mount() {
                InsertAttempt::Inserted(anchor)
            } else {
                InsertAttempt::Refused(anchor)
            }
        }
    }
}

/// Result of mounting an element that needs no anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOnce {
    AlreadyPresent,
    Mounted,
    Refused,
}

/// Mount `reserved_id` on the body unless it is already in the page.
pub fn mount_once<H: AffordanceHost + ?Sized>(host: &mut H, reserved_id: &str) -> MountOnce {
    if host.has_element(reserved_id) {
        MountOnce::AlreadyPresent
    } else if host.mount() {
        MountOnce::Mounted
    } else {
        MountOnce::Refused
    }
}
