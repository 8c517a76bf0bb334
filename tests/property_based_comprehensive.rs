//! Comprehensive property-based tests for pre-commit hook
//!
//! Covers the core invariants of the ingestion and statistics pipeline
//! with proptest. Designed to run quickly as a pre-commit quality gate.
//!
//! Core properties tested:
//! 1. Row parsing never panics and only accepts 4-field rows
//! 2. Statistics identities (mean bounds, interval definition)
//! 3. Weekday bucketing conserves the number of entries

use proptest::prelude::*;

use chrono::{NaiveDate, NaiveTime};
use presencia::presence::{parse_row, PresenceDay};
use presencia::stats::{interval, mean, seconds_since_midnight, total};
use presencia::weekday::{by_weekday_durations, by_weekday_points, WEEKDAYS};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_parse_row_never_panics(line in ".{0,120}") {
        // Property: arbitrary input must be rejected or parsed, never panic
        let _ = parse_row(&line);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_parse_row_roundtrip(
        user_id in 0u32..100_000,
        year in 2000i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        start_s in 0u32..86_400,
        end_s in 0u32..86_400,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let start = NaiveTime::from_num_seconds_from_midnight_opt(start_s, 0).unwrap();
        let end = NaiveTime::from_num_seconds_from_midnight_opt(end_s, 0).unwrap();
        let line = format!(
            "{},{},{},{}",
            user_id,
            date.format("%Y-%m-%d"),
            start.format("%H:%M:%S"),
            end.format("%H:%M:%S"),
        );

        let (parsed_id, parsed_date, parsed_day) = parse_row(&line).unwrap();
        prop_assert_eq!(parsed_id, user_id);
        prop_assert_eq!(parsed_date, date);
        prop_assert_eq!(parsed_day.start, start);
        prop_assert_eq!(parsed_day.end, end);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_seconds_since_midnight_in_range(seconds in 0u32..86_400) {
        let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap();
        let ssm = seconds_since_midnight(time);
        prop_assert!((0..86_400).contains(&ssm));
        prop_assert_eq!(ssm, i64::from(seconds));
    }

    #[test]
    fn prop_interval_matches_definition(start_s in 0u32..86_400, end_s in 0u32..86_400) {
        let start = NaiveTime::from_num_seconds_from_midnight_opt(start_s, 0).unwrap();
        let end = NaiveTime::from_num_seconds_from_midnight_opt(end_s, 0).unwrap();
        prop_assert_eq!(
            interval(start, end),
            seconds_since_midnight(end) - seconds_since_midnight(start)
        );
    }

    #[test]
    fn prop_mean_bounded_by_extremes(values in prop::collection::vec(-86_400i64..86_400, 1..50)) {
        let m = mean(&values);
        let min = *values.iter().min().unwrap() as f64;
        let max = *values.iter().max().unwrap() as f64;
        prop_assert!(min <= m && m <= max);
    }

    #[test]
    fn prop_total_is_sum(values in prop::collection::vec(-86_400i64..86_400, 0..50)) {
        prop_assert_eq!(total(&values), values.iter().sum::<i64>());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_weekday_buckets_conserve_entries(
        days in prop::collection::btree_map(
            (2000i32..2100, 1u32..=12, 1u32..=28),
            (0u32..86_400, 0u32..86_400),
            0..60,
        ),
    ) {
        let day_map = days
            .into_iter()
            .map(|((y, m, d), (s, e))| {
                (
                    NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                    PresenceDay {
                        start: NaiveTime::from_num_seconds_from_midnight_opt(s, 0).unwrap(),
                        end: NaiveTime::from_num_seconds_from_midnight_opt(e, 0).unwrap(),
                    },
                )
            })
            .collect();

        let durations = by_weekday_durations(&day_map);
        prop_assert_eq!(durations.len(), WEEKDAYS);
        let duration_samples: usize = durations.iter().map(Vec::len).sum();
        prop_assert_eq!(duration_samples, day_map.len());

        let points = by_weekday_points(&day_map);
        let start_samples: usize = points.starts.iter().map(Vec::len).sum();
        let end_samples: usize = points.ends.iter().map(Vec::len).sum();
        prop_assert_eq!(start_samples, day_map.len());
        prop_assert_eq!(end_samples, day_map.len());
    }
}
