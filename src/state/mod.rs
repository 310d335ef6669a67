//! Browser-independent widget state.
//!
//! DESIGN
//! ======
//! Everything the widget remembers lives here so it can be tested natively;
//! the `dom` and `components` modules only read and drive it.

pub mod clock;
pub mod conversation;
pub mod identity;
pub mod widget;
