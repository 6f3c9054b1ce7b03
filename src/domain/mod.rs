//! Core types: Note, NoteId (ULID), NoteList, filtered views, editor overlay

mod editor;
mod filter;
mod note;
mod note_id;
mod note_list;

pub use editor::{Commit, Editor};
pub use filter::{FilteredView, ParseStatusFilterError, StatusFilter, ViewFilter, filter};
pub use note::Note;
pub use note_id::{NoteId, PREFIX_LEN, ParseNoteIdError};
pub use note_list::NoteList;
