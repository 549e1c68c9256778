//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats an optional calendar window such as `2025-03-03 → 2025-03-14`.
///
/// Missing bounds print as `?`; a window with no dates at all prints as
/// `undated`.
pub struct DateRange<'a>(pub Option<&'a str>, pub Option<&'a str>);

impl fmt::Display for DateRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.0.filter(|s| !s.trim().is_empty());
        let end = self.1.filter(|s| !s.trim().is_empty());
        match (start, end) {
            (None, None) => f.write_str("undated"),
            (start, end) => write!(f, "{} → {}", start.unwrap_or("?"), end.unwrap_or("?")),
        }
    }
}
