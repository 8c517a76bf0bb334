//! Presencia - attendance presence analyzer
//!
//! This library ingests daily attendance logs (per-user clock-in/clock-out
//! rows) and a user roster, memoizes the parsed data behind a TTL cache,
//! and produces weekday-bucketed presence statistics for a reporting
//! surface.

pub mod cache;
pub mod cli;
pub mod csv_output;
pub mod json_output;
pub mod presence;
pub mod report;
pub mod roster;
pub mod stats;
pub mod weekday;
