//! Wall-clock timestamps for chat messages.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

const MS_PER_MINUTE: f64 = 60_000.0;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Instant a message was appended, with the viewer's local UTC offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Timestamp {
    /// Milliseconds since the Unix epoch.
    pub epoch_ms: f64,
    /// Minutes east of UTC.
    pub utc_offset_minutes: i32,
}

impl Timestamp {
    /// Local time of day as zero-padded 24-hour `HH:MM`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn hour_minute_label(self) -> String {
        let utc_minutes = (self.epoch_ms / MS_PER_MINUTE).floor() as i64;
        let local = (utc_minutes + i64::from(self.utc_offset_minutes)).rem_euclid(MINUTES_PER_DAY);
        format!("{:02}:{:02}", local / 60, local % 60)
    }
}

/// Source of timestamps.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Clock backed by `Date` in the browser and the system clock elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now(&self) -> Timestamp {
        #[cfg(feature = "csr")]
        {
            let date = js_sys::Date::new_0();
            // getTimezoneOffset is UTC minus local.
            let utc_offset_minutes = -(date.get_timezone_offset() as i32);
            Timestamp { epoch_ms: date.get_time(), utc_offset_minutes }
        }
        #[cfg(not(feature = "csr"))]
        {
            let epoch_ms = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0.0, |d| d.as_secs_f64() * 1_000.0);
            Timestamp { epoch_ms, utc_offset_minutes: 0 }
        }
    }
}
