//! Report assembly over the cached presence snapshot
//!
//! The facade combines the weekday aggregator and the numeric helpers into
//! the three API-shaped reports plus the user listing. An unknown user id is
//! not an error: it produces an empty report, indistinguishable from a user
//! with no recorded presence.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::PresenceCache;
use crate::presence::UserId;
use crate::stats::{mean, total};
use crate::weekday::{by_weekday_durations, by_weekday_points, WEEKDAY_ABBR};

/// One row of the total-presence report
///
/// Serializes untagged, so both variants render as JSON arrays exactly like
/// the list-of-lists consumed by the reporting API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PresenceRow {
    /// Leading column-header row
    Header(&'static str, &'static str),
    /// Weekday label and summed presence seconds
    Total(&'static str, i64),
}

/// One user in the listing, serialized as a JSON object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub user_id: UserId,
    pub name: String,
}

/// Read-side facade over the presence cache
pub struct Reporter<'a> {
    cache: &'a PresenceCache,
}

impl<'a> Reporter<'a> {
    pub fn new(cache: &'a PresenceCache) -> Self {
        Self { cache }
    }

    /// Users present in the current snapshot, ascending by id
    pub fn users(&self) -> Vec<UserEntry> {
        let data = self.cache.get();
        let mut ids: Vec<UserId> = data.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter()
            .map(|user_id| UserEntry {
                user_id,
                name: format!("User {}", user_id),
            })
            .collect()
    }

    /// Mean presence seconds per weekday; empty for an unknown user
    pub fn mean_by_weekday(&self, user_id: UserId) -> Vec<(&'static str, f64)> {
        let data = self.cache.get();
        let Some(days) = data.get(&user_id) else {
            debug!("user {} not found", user_id);
            return Vec::new();
        };

        let buckets = by_weekday_durations(days);
        WEEKDAY_ABBR
            .iter()
            .zip(buckets.iter())
            .map(|(&label, samples)| (label, mean(samples)))
            .collect()
    }

    /// Total presence seconds per weekday, preceded by a header row
    ///
    /// Eight rows for a known user, zero for an unknown one.
    pub fn total_by_weekday(&self, user_id: UserId) -> Vec<PresenceRow> {
        let data = self.cache.get();
        let Some(days) = data.get(&user_id) else {
            debug!("user {} not found", user_id);
            return Vec::new();
        };

        let buckets = by_weekday_durations(days);
        let mut rows = Vec::with_capacity(WEEKDAY_ABBR.len() + 1);
        rows.push(PresenceRow::Header("Weekday", "Presence (s)"));
        rows.extend(
            WEEKDAY_ABBR
                .iter()
                .zip(buckets.iter())
                .map(|(&label, samples)| PresenceRow::Total(label, total(samples))),
        );
        rows
    }

    /// Mean arrival and departure instants per weekday, as seconds since
    /// midnight; empty for an unknown user
    pub fn mean_start_end_by_weekday(&self, user_id: UserId) -> Vec<(&'static str, f64, f64)> {
        let data = self.cache.get();
        let Some(days) = data.get(&user_id) else {
            debug!("user {} not found", user_id);
            return Vec::new();
        };

        let buckets = by_weekday_points(days);
        WEEKDAY_ABBR
            .iter()
            .enumerate()
            .map(|(slot, &label)| (label, mean(&buckets.starts[slot]), mean(&buckets.ends[slot])))
            .collect()
    }
}
