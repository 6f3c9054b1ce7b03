//! ULID-based note identifier with prefix matching and serde support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::time::SystemTime;
use ulid::Ulid;

/// Number of characters shown when a note is listed.
pub const PREFIX_LEN: usize = 10;

/// A stable identifier for a note, generated when the note is created.
///
/// Positions in a list shift whenever a note is removed or a filter is
/// applied; the id never does, so every mutation is addressed by it.
///
/// # Examples
///
/// ```
/// use tick::domain::NoteId;
///
/// let id = NoteId::new();
/// assert_eq!(id.to_string().len(), 26);
/// assert_eq!(id.prefix().len(), 10);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteId(Ulid);

impl NoteId {
    /// Creates a new NoteId with the current timestamp.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Creates a NoteId from a specific datetime (useful for testing).
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        let system_time: SystemTime = datetime.into();
        Self(Ulid::from_datetime(system_time))
    }

    /// Returns the short form shown in listings.
    pub fn prefix(&self) -> String {
        self.0.to_string()[..PREFIX_LEN].to_string()
    }

    /// Returns true if `prefix` is a case-insensitive prefix of this id.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let full = self.0.to_string();
        prefix.len() <= full.len() && full[..prefix.len()].eq_ignore_ascii_case(prefix)
    }

    /// Returns the timestamp when this ID was created.
    pub fn timestamp(&self) -> DateTime<Utc> {
        let millis = self.0.timestamp_ms();
        DateTime::from_timestamp_millis(millis as i64).unwrap_or_default()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid ULID string.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s)
            .map(NoteId)
            .map_err(|e| ParseNoteIdError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
