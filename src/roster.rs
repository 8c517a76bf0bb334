//! Roster ingestion
//!
//! Parses the user-identity XML source into a map from user id to display
//! attributes. The roster is small and read fresh on every ingestion cycle;
//! a missing or malformed source degrades to an empty map with a warning so
//! reporting stays available.

use std::collections::HashMap;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::{debug, warn};

use crate::presence::UserId;

/// Display attributes for one roster user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetail {
    pub name: String,
    /// Path or URL of the user's avatar image
    pub avatar: String,
}

/// Known users keyed by id
pub type RosterMap = HashMap<UserId, UserDetail>;

/// Failure opening or scanning a roster source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot open roster source: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed roster XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Parse the roster XML and group it by user id
///
/// Any failure (unopenable file, malformed XML) is recovered by returning an
/// empty map; a `user` element missing its id, name, or avatar is skipped
/// individually. Callers treat an empty roster the same as an empty source.
pub fn load_roster(path: &Path) -> RosterMap {
    match parse_roster(path) {
        Ok(details) => details,
        Err(err) => {
            warn!("cannot read roster source {}: {}", path.display(), err);
            RosterMap::new()
        }
    }
}

/// Field of a `user` element currently being read
enum UserField {
    Name,
    Avatar,
}

fn parse_roster(path: &Path) -> Result<RosterMap, SourceError> {
    let file = std::fs::File::open(path)?;
    let mut reader = Reader::from_reader(std::io::BufReader::new(file));
    reader.config_mut().trim_text(true);

    let mut details = RosterMap::new();
    let mut current_id: Option<UserId> = None;
    let mut current_name: Option<String> = None;
    let mut current_avatar: Option<String> = None;
    let mut current_field: Option<UserField> = None;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(element) => match element.name().as_ref() {
                b"user" => {
                    current_id = element
                        .try_get_attribute("id")
                        .ok()
                        .flatten()
                        .and_then(|attr| attr.unescape_value().ok())
                        .and_then(|value| value.parse().ok());
                    current_name = None;
                    current_avatar = None;
                }
                b"name" => current_field = Some(UserField::Name),
                b"avatar" => current_field = Some(UserField::Avatar),
                _ => {}
            },
            Event::Text(text) => {
                if let Ok(value) = text.unescape() {
                    match current_field {
                        Some(UserField::Name) => current_name = Some(value.into_owned()),
                        Some(UserField::Avatar) => current_avatar = Some(value.into_owned()),
                        None => {}
                    }
                }
            }
            Event::End(element) => match element.name().as_ref() {
                b"user" => {
                    match (current_id.take(), current_name.take(), current_avatar.take()) {
                        (Some(id), Some(name), Some(avatar)) => {
                            details.insert(id, UserDetail { name, avatar });
                        }
                        _ => debug!("skipping incomplete roster user element"),
                    }
                }
                b"name" | b"avatar" => current_field = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(details)
}
