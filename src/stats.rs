//! Numeric helpers for presence statistics
//!
//! Everything here is pure arithmetic over wall-clock times and collected
//! interval samples; the weekday grouping lives in `weekday`.

use chrono::{NaiveTime, Timelike};

/// Seconds elapsed since midnight for a wall-clock time
///
/// Range is [0, 86399]; leap seconds are not represented in the source data.
pub fn seconds_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 3600 + i64::from(time.minute()) * 60 + i64::from(time.second())
}

/// Interval in seconds between two wall-clock times on the same day
///
/// Negative when `end` precedes `start` (overnight rows in the source are
/// recorded that way and flow through unclamped).
pub fn interval(start: NaiveTime, end: NaiveTime) -> i64 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}

/// Arithmetic mean of a sample set
///
/// Returns 0.0 for an empty slice rather than NaN so empty weekday buckets
/// render as zero in reports.
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

/// Sum of a sample set
pub fn total(values: &[i64]) -> i64 {
    values.iter().sum()
}
