use super::*;

fn ts(epoch_ms: f64, utc_offset_minutes: i32) -> Timestamp {
    Timestamp { epoch_ms, utc_offset_minutes }
}

#[test]
fn label_at_epoch_is_midnight() {
    assert_eq!(ts(0.0, 0).hour_minute_label(), "00:00");
}

#[test]
fn label_is_zero_padded() {
    // 09:05 UTC
    assert_eq!(ts(32_700_000.0, 0).hour_minute_label(), "09:05");
}

#[test]
fn label_applies_positive_offset() {
    // 23:30 UTC + 60 min wraps past midnight
    assert_eq!(ts(84_600_000.0, 60).hour_minute_label(), "00:30");
}

#[test]
fn label_applies_negative_offset() {
    // 00:15 UTC - 5h
    assert_eq!(ts(900_000.0, -300).hour_minute_label(), "19:15");
}

#[test]
fn label_ignores_seconds() {
    // 10:00:59.999 UTC
    assert_eq!(ts(36_059_999.0, 0).hour_minute_label(), "10:00");
}

#[test]
fn browser_clock_is_after_2020() {
    // 2020-01-01T00:00:00Z
    assert!(BrowserClock.now().epoch_ms > 1_577_836_800_000.0);
}
