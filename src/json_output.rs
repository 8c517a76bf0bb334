//! JSON output format for presence reports
//!
//! Renders the facade's rows in the shapes the reporting API serves: the
//! per-weekday reports as lists of lists, the user listing as a list of
//! objects.

use serde::Serialize;

use crate::report::{PresenceRow, UserEntry};

/// A full report ready for JSON rendering
///
/// Wrapping the row kinds in one enum keeps the binary's dispatch to a
/// single render call per format.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum JsonReport {
    Users(Vec<UserEntry>),
    MeanByWeekday(Vec<(&'static str, f64)>),
    TotalByWeekday(Vec<PresenceRow>),
    MeanStartEnd(Vec<(&'static str, f64, f64)>),
}

impl JsonReport {
    /// Compact JSON, the shape the original API serves
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty-printed JSON for terminal use
    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
