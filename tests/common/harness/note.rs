//! Builder for test notes with sensible defaults.

use tick::domain::{Note, NoteId};

/// Builder for creating test notes.
///
/// Generates an id automatically; unchecked unless told otherwise.
#[derive(Debug)]
pub struct TestNote {
    id: NoteId,
    text: String,
    checked: bool,
}

impl TestNote {
    /// Creates a new unchecked test note with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            text: text.into(),
            checked: false,
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into().parse().expect("Invalid NoteId");
        self
    }

    /// Marks the note as checked.
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Returns the 10-character ID prefix.
    pub fn id_prefix(&self) -> String {
        self.id.prefix()
    }

    /// Builds the domain note.
    pub fn to_note(&self) -> Note {
        Note::with_id(self.id.clone(), self.text.clone(), self.checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("Buy milk").to_note();
        assert_eq!(note.text(), "Buy milk");
        assert!(!note.is_checked());
    }

    #[test]
    fn test_note_with_id_and_checked() {
        let note = TestNote::new("Done")
            .id("01HQ3K5M7NXJK4QZPW8V2R6T9Y")
            .checked();
        assert_eq!(note.id_prefix(), "01HQ3K5M7N");
        assert!(note.to_note().is_checked());
    }
}
