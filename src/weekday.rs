//! Weekday grouping of presence records
//!
//! Buckets one user's per-date records into fixed 7-slot arrays indexed by
//! weekday (Monday = 0 .. Sunday = 6). Slots for weekdays without data stay
//! empty, so consumers always see all seven.

use chrono::Datelike;

use crate::presence::DayMap;
use crate::stats::{interval, seconds_since_midnight};

/// Number of weekday slots in every bucket
pub const WEEKDAYS: usize = 7;

/// Three-letter weekday labels in fixed Monday..Sunday order
pub const WEEKDAY_ABBR: [&str; WEEKDAYS] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Presence intervals (seconds) grouped by weekday
pub type DurationBuckets = [Vec<i64>; WEEKDAYS];

/// Arrival/departure instants (seconds since midnight) grouped by weekday
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointBuckets {
    pub starts: [Vec<i64>; WEEKDAYS],
    pub ends: [Vec<i64>; WEEKDAYS],
}

/// Group presence entries by weekday as interval lengths
pub fn by_weekday_durations(days: &DayMap) -> DurationBuckets {
    let mut buckets = DurationBuckets::default();
    for (date, day) in days {
        let slot = date.weekday().num_days_from_monday() as usize;
        buckets[slot].push(interval(day.start, day.end));
    }
    buckets
}

/// Group presence entries by weekday as (arrival, departure) instants
pub fn by_weekday_points(days: &DayMap) -> PointBuckets {
    let mut buckets = PointBuckets::default();
    for (date, day) in days {
        let slot = date.weekday().num_days_from_monday() as usize;
        buckets.starts[slot].push(seconds_since_midnight(day.start));
        buckets.ends[slot].push(seconds_since_midnight(day.end));
    }
    buckets
}
