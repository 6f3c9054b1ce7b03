//! A single to-do entry: some text and a completion flag.

use crate::domain::NoteId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A note in the list.
///
/// The persisted shape is `{"id": "...", "text": "...", "isChecked": false}`.
/// Entries written without an `id` (older blobs only carried `text` and
/// `isChecked`) are assigned a fresh one when they are read.
///
/// # Examples
///
/// ```
/// use tick::domain::Note;
///
/// let note = Note::new("Buy milk");
/// assert_eq!(note.text(), "Buy milk");
/// assert!(!note.is_checked());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteId,
    text: String,
    #[serde(rename = "isChecked")]
    is_checked: bool,
}

impl Note {
    /// Creates an unchecked note with a newly generated id.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(NoteId::new(), text, false)
    }

    /// Creates a note from all of its parts.
    pub fn with_id(id: NoteId, text: impl Into<String>, is_checked: bool) -> Self {
        Self {
            id,
            text: text.into(),
            is_checked,
        }
    }

    /// Returns the note's identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's text exactly as it was entered.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the note has been checked off.
    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn toggle(&mut self) {
        self.is_checked = !self.is_checked;
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_checked { 'x' } else { ' ' };
        write!(f, "[{}] {}", mark, self.text)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("is_checked", &self.is_checked)
            .finish()
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct NoteHelper {
            #[serde(default)]
            id: Option<NoteId>,
            text: String,
            #[serde(default, rename = "isChecked")]
            is_checked: bool,
        }

        let helper = NoteHelper::deserialize(deserializer)?;
        Ok(Note::with_id(
            helper.id.unwrap_or_default(),
            helper.text,
            helper.is_checked,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_note_id() -> NoteId {
        "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap()
    }

    #[test]
    fn new_note_is_unchecked() {
        let note = Note::new("Buy milk");
        assert_eq!(note.text(), "Buy milk");
        assert!(!note.is_checked());
    }

    #[test]
    fn text_is_kept_verbatim() {
        let note = Note::new("  padded  ");
        assert_eq!(note.text(), "  padded  ");
    }

    #[test]
    fn toggle_flips_flag() {
        let mut note = Note::new("Clean");
        note.toggle();
        assert!(note.is_checked());
        note.toggle();
        assert!(!note.is_checked());
    }

    #[test]
    fn set_text_keeps_flag_and_id() {
        let mut note = Note::with_id(test_note_id(), "old", true);
        note.set_text("new");
        assert_eq!(note.text(), "new");
        assert!(note.is_checked());
        assert_eq!(note.id(), &test_note_id());
    }

    #[test]
    fn serializes_with_camel_case_flag() {
        let note = Note::with_id(test_note_id(), "Buy milk", true);
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "01HQ3K5M7NXJK4QZPW8V2R6T9Y",
                "text": "Buy milk",
                "isChecked": true,
            })
        );
    }

    #[test]
    fn deserializes_legacy_entry_without_id() {
        let note: Note = serde_json::from_str(r#"{"text":"Clean","isChecked":true}"#).unwrap();
        assert_eq!(note.text(), "Clean");
        assert!(note.is_checked());
        assert_eq!(note.id().to_string().len(), 26);
    }

    #[test]
    fn missing_flag_defaults_to_unchecked() {
        let note: Note = serde_json::from_str(r#"{"text":"Clean"}"#).unwrap();
        assert!(!note.is_checked());
    }

    #[test]
    fn missing_text_is_rejected() {
        let result: Result<Note, _> = serde_json::from_str(r#"{"isChecked":false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn display_shows_checkbox() {
        let note = Note::with_id(test_note_id(), "Clean", true);
        assert_eq!(note.to_string(), "[x] Clean");
        let note = Note::with_id(test_note_id(), "Clean", false);
        assert_eq!(note.to_string(), "[ ] Clean");
    }
}
