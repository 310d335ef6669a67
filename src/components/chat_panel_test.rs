use super::*;
use crate::config::StaleResponsePolicy;
use crate::state::clock::Timestamp;
use crate::state::widget::PageSnapshot;

const VIDEO_A: &str = "https://www.youtube.com/watch?v=aaa";

#[test]
fn status_line_hidden_when_empty() {
    assert_eq!(status_display(""), "none");
}

#[test]
fn status_line_shown_while_busy() {
    assert_eq!(status_display("Analyzing the video..."), "block");
}

#[test]
fn enter_submits() {
    assert!(is_submit_key("Enter", false));
}

#[test]
fn shift_enter_and_other_keys_do_not_submit() {
    assert!(!is_submit_key("Enter", true));
    assert!(!is_submit_key("a", false));
    assert!(!is_submit_key("Escape", false));
}

#[test]
fn typing_does_not_touch_history_version() {
    let mut core = WidgetCore::new(VIDEO_A, StaleResponsePolicy::Discard, Timestamp::default());
    let before = history_version(&core);
    for draft in ["w", "wh", "why", ""] {
        core.set_draft(draft);
        assert_eq!(history_version(&core), before);
    }
}

#[test]
fn new_message_and_reset_bump_history_version() {
    let mut core = WidgetCore::new(VIDEO_A, StaleResponsePolicy::Discard, Timestamp::default());
    let start = history_version(&core);

    core.set_draft("Q");
    let page = PageSnapshot { href: VIDEO_A.to_owned(), playback_position: 0.0 };
    core.begin_submission(&page, Timestamp::default());
    let after_question = history_version(&core);
    assert_ne!(after_question, start);

    core.observe_location("https://www.youtube.com/watch?v=bbb", Timestamp::default());
    assert_eq!(core.conversation().len(), 1);
    assert_ne!(history_version(&core), after_question);
}
