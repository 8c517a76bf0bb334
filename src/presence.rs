//! Presence log ingestion
//!
//! Parses the comma-delimited attendance source into per-user, per-date
//! start/end records, cross-referencing each row against the roster. The
//! scan is tolerant: malformed rows and rows for unknown users are dropped
//! with diagnostics, never aborting the ingestion.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;
use tracing::{debug, warn};

/// User identifier shared across the roster and presence sources
pub type UserId = u32;

/// Recorded start/end of one user's presence on one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceDay {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// One user's presence records keyed by calendar date
///
/// Attendance rows arrive chronologically, so date order matches the order
/// the rows were ingested in.
pub type DayMap = BTreeMap<NaiveDate, PresenceDay>;

/// Full ingestion result: every roster user seen in the log, with their
/// per-date records
pub type PresenceMap = HashMap<UserId, DayMap>;

/// Why a presence row was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    /// Header/footer noise; not diagnosed per row
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),
    #[error("user id is not an integer")]
    BadUserId,
    #[error("date is not YYYY-MM-DD")]
    BadDate,
    #[error("time is not HH:MM:SS")]
    BadTime,
}

/// Parse one `user_id,YYYY-MM-DD,HH:MM:SS,HH:MM:SS` row
pub fn parse_row(line: &str) -> Result<(UserId, NaiveDate, PresenceDay), RowError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Err(RowError::FieldCount(fields.len()));
    }

    let user_id: UserId = fields[0].trim().parse().map_err(|_| RowError::BadUserId)?;
    let date = NaiveDate::parse_from_str(fields[1].trim(), "%Y-%m-%d")
        .map_err(|_| RowError::BadDate)?;
    let start = NaiveTime::parse_from_str(fields[2].trim(), "%H:%M:%S")
        .map_err(|_| RowError::BadTime)?;
    let end = NaiveTime::parse_from_str(fields[3].trim(), "%H:%M:%S")
        .map_err(|_| RowError::BadTime)?;

    Ok((user_id, date, PresenceDay { start, end }))
}

/// Extract presence data from the CSV source, grouped by user id
///
/// Only user ids present in `roster_ids` are kept; rows for unknown users
/// are dropped and diagnosed once per distinct id. Duplicate (user, date)
/// pairs resolve last-row-wins. An unopenable source degrades to an empty
/// map with a warning rather than an error.
pub fn load_presence(path: &Path, roster_ids: &HashSet<UserId>) -> PresenceMap {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            warn!("cannot open presence source {}: {}", path.display(), err);
            return PresenceMap::new();
        }
    };

    let mut data = PresenceMap::new();
    let mut orphans: HashSet<UserId> = HashSet::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("read error in presence source at line {}: {}", index + 1, err);
                break;
            }
        };

        let (user_id, date, day) = match parse_row(&line) {
            Ok(parsed) => parsed,
            // Header and footer lines never have 4 fields; skip quietly
            Err(RowError::FieldCount(_)) => continue,
            Err(err) => {
                debug!("problem with line {}: {}", index + 1, err);
                continue;
            }
        };

        if roster_ids.contains(&user_id) {
            data.entry(user_id).or_default().insert(date, day);
        } else {
            orphans.insert(user_id);
        }
    }

    for orphan in &orphans {
        debug!("user {} has presence data but no roster entry", orphan);
    }

    data
}
