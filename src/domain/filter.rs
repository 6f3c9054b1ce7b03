//! Search and status filtering over a note list.
//!
//! A [`FilteredView`] borrows the notes it shows and remembers each one's id,
//! so a position picked from the view can be turned back into the id of the
//! note the user actually saw.

use crate::domain::{Note, NoteId, NoteList};
use std::fmt;
use std::str::FromStr;

/// Which notes to show by completion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Complete,
    Incomplete,
}

impl StatusFilter {
    /// Returns true if a note with this checked state passes.
    pub fn accepts(self, is_checked: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Complete => is_checked,
            StatusFilter::Incomplete => !is_checked,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Complete => "complete",
            StatusFilter::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unknown status name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusFilterError(String);

impl fmt::Display for ParseStatusFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown status '{}': expected all, complete, or incomplete",
            self.0
        )
    }
}

impl std::error::Error for ParseStatusFilterError {}

impl FromStr for StatusFilter {
    type Err = ParseStatusFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "complete" | "done" => Ok(StatusFilter::Complete),
            "incomplete" | "open" => Ok(StatusFilter::Incomplete),
            _ => Err(ParseStatusFilterError(s.to_string())),
        }
    }
}

/// A search query plus a status filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    query: String,
    status: StatusFilter,
}

impl ViewFilter {
    pub fn new(query: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    /// A filter on the query alone.
    pub fn query(query: impl Into<String>) -> Self {
        Self::new(query, StatusFilter::All)
    }

    pub fn query_str(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
    }

    /// Returns true when the filter lets every note through.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.status == StatusFilter::All
    }

    /// Case-insensitive substring match on text, plus the status check.
    pub fn matches(&self, note: &Note) -> bool {
        self.status.accepts(note.is_checked()) && contains_ignore_case(note.text(), &self.query)
    }

    /// Builds the view of `notes` that passes this filter.
    pub fn apply<'a>(&self, notes: &'a NoteList) -> FilteredView<'a> {
        FilteredView {
            entries: notes.iter().filter(|n| self.matches(n)).collect(),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filters `notes` by a case-insensitive substring query.
///
/// An empty query returns every note in order.
///
/// # Examples
///
/// ```
/// use tick::domain::{filter, NoteList};
///
/// let mut notes = NoteList::new();
/// notes.add("Buy Milk");
/// notes.add("Clean");
///
/// let view = filter(&notes, "milk");
/// assert_eq!(view.len(), 1);
/// assert_eq!(view.get(0).unwrap().text(), "Buy Milk");
/// ```
pub fn filter<'a>(notes: &'a NoteList, query: &str) -> FilteredView<'a> {
    ViewFilter::query(query).apply(notes)
}

/// The notes that passed a filter, in list order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    entries: Vec<&'a Note>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the note at a 0-based view position.
    pub fn get(&self, position: usize) -> Option<&'a Note> {
        self.entries.get(position).copied()
    }

    /// Returns the id of the note at a 0-based view position.
    pub fn id_at(&self, position: usize) -> Option<&'a NoteId> {
        self.get(position).map(Note::id)
    }

    /// Iterates over the visible notes.
    pub fn iter(&self) -> impl Iterator<Item = &'a Note> + '_ {
        self.entries.iter().copied()
    }
}
