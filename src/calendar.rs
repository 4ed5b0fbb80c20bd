//! Business-day arithmetic.
//!
//! The calendar treats Saturday and Sunday as non-business days; there is
//! no holiday table. The caller supplies the start instant, so the walk is
//! fully deterministic and testable without mocking time.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

/// Add `days` business days to `start`, skipping weekends.
///
/// Walks forward one calendar day at a time; a day counts toward `days`
/// only if it is not Saturday or Sunday. Total for any finite input.
///
/// Precondition: `days >= 1`. The loop advances at least one calendar day
/// before testing, so `days = 0` returns `start` unchanged and is not a
/// meaningful caller input.
pub fn add_business_days(start: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    let mut current = start;
    let mut remaining = days;
    while remaining > 0 {
        current += Duration::days(1);
        if !is_weekend(current) {
            remaining -= 1;
        }
    }
    current
}

fn is_weekend(date: DateTime<Utc>) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
