//! The ordered collection of notes.

use crate::domain::{Note, NoteId};
use serde::{Deserialize, Serialize};

/// An ordered list of notes in insertion order.
///
/// Every mutation is addressed by [`NoteId`]. Positional access is available
/// through [`NoteList::id_at`], which turns a position into the id that
/// currently sits there. Operations on an unknown id or an out-of-range
/// position leave the list untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteList {
    notes: Vec<Note>,
}

impl NoteList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list from existing notes, keeping their order.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Returns the number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if the list holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Iterates over the notes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Returns the note at `index`, if any.
    pub fn get_at(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    /// Returns the id of the note at `index`, if any.
    pub fn id_at(&self, index: usize) -> Option<&NoteId> {
        self.notes.get(index).map(Note::id)
    }

    /// Returns the note with the given id.
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Returns the current position of the note with the given id.
    pub fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id() == id)
    }

    /// Notes whose id starts with `prefix`, ignoring case.
    pub fn find_by_id_prefix(&self, prefix: &str) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| n.id().matches_prefix(prefix))
            .collect()
    }

    /// Appends an unchecked note.
    ///
    /// Returns `None` without changing the list when `text` is empty or only
    /// whitespace. The text is stored as given, not trimmed.
    pub fn add(&mut self, text: &str) -> Option<NoteId> {
        if text.trim().is_empty() {
            return None;
        }
        let note = Note::new(text);
        let id = note.id().clone();
        self.notes.push(note);
        Some(id)
    }

    /// Replaces the text of a note, keeping its id and checked state.
    ///
    /// Returns false if no note has this id or its text is already `text`.
    pub fn replace_text(&mut self, id: &NoteId, text: &str) -> bool {
        match self.notes.iter_mut().find(|n| n.id() == id) {
            Some(note) if note.text() != text => {
                note.set_text(text);
                true
            }
            _ => false,
        }
    }

    /// Flips the checked state of a note.
    ///
    /// Returns false if no note has this id.
    pub fn toggle(&mut self, id: &NoteId) -> bool {
        match self.notes.iter_mut().find(|n| n.id() == id) {
            Some(note) => {
                note.toggle();
                true
            }
            None => false,
        }
    }

    /// Removes a note; later notes move up one position.
    pub fn remove(&mut self, id: &NoteId) -> Option<Note> {
        let index = self.position(id)?;
        Some(self.notes.remove(index))
    }
}

impl<'a> IntoIterator for &'a NoteList {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

impl FromIterator<Note> for NoteList {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self {
            notes: iter.into_iter().collect(),
        }
    }
}
