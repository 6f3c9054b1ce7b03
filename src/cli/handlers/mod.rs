//! Command handlers for the CLI.

mod add;
mod check;
mod completions;
mod edit;
mod editor;
mod list;
mod remove;
mod resolve;
mod shell;


use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::{Action, AppState, update_all};
use crate::cli::config::{Backend, Config};
use crate::domain::{Note, ViewFilter};
use crate::infra::{FileStorage, LoadOutcome, NoteStore, SqliteStorage, Storage};

// Re-export public items
pub use add::{add_note, handle_add};
pub use check::{handle_check, toggle_note};
pub use completions::handle_completions;
pub use edit::{edit_note, handle_edit};
pub use editor::{EditorLauncher, ExternalEditor, edit_text};
pub use list::{format_view, handle_list, handle_search};
pub use remove::{handle_remove, remove_note};
pub use resolve::{ResolveResult, resolve_note};
pub use shell::handle_shell;

// ===========================================
// Shared Utilities
// ===========================================

/// A store over whichever backend the config selects.
pub type BoxedStore = NoteStore<Box<dyn Storage>>;

/// What a note-targeting command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteOutcome {
    /// The note after the change (for removal, the note that was removed).
    Changed(Note),
    /// The text was blank, so nothing was saved.
    Blank,
    /// The reference matched no note; nothing was touched.
    NotFound,
    /// An ID prefix matched several notes.
    Ambiguous(Vec<Note>),
}

/// Returns the SQLite database path for a data directory.
pub(crate) fn sqlite_db_path(data_dir: &Path) -> PathBuf {
    data_dir.join("tick.db")
}

/// Opens the configured storage backend in `data_dir`.
pub fn open_store(data_dir: &Path, config: &Config) -> Result<BoxedStore> {
    debug!(dir = %data_dir.display(), backend = ?config.backend, "opening store");
    let storage: Box<dyn Storage> = match config.backend {
        Backend::File => Box::new(
            FileStorage::open(data_dir)
                .with_context(|| format!("failed to open data directory {}", data_dir.display()))?,
        ),
        Backend::Sqlite => {
            let db_path = sqlite_db_path(data_dir);
            Box::new(
                SqliteStorage::open(&db_path)
                    .with_context(|| format!("failed to open database {}", db_path.display()))?,
            )
        }
    };
    Ok(NoteStore::new(storage))
}

/// Loads the notes and narrows the state to `filter`, so that positions
/// typed by the user refer to the same view `ls` would print.
pub(crate) fn load_state<S: Storage>(
    store: &mut NoteStore<S>,
    filter: &ViewFilter,
) -> Result<AppState> {
    let (notes, outcome) = store
        .load_with_outcome()
        .with_context(|| "failed to load notes")?;
    if outcome == LoadOutcome::Recovered {
        eprintln!("warning: saved notes could not be read; starting with an empty list");
    }
    let t = update_all(
        AppState::new(notes),
        [
            Action::Search(filter.query_str().to_string()),
            Action::SetStatus(filter.status()),
        ],
    );
    Ok(t.state)
}

/// Prints an outcome the way every note-targeting command reports it.
///
/// `describe` turns the changed note into the success line.
pub(crate) fn report_outcome(
    reference: &str,
    outcome: &NoteOutcome,
    describe: impl FnOnce(&Note) -> String,
) -> Result<()> {
    match outcome {
        NoteOutcome::Changed(note) => {
            println!("{}", describe(note));
            Ok(())
        }
        NoteOutcome::Blank => {
            println!("Nothing to save.");
            Ok(())
        }
        NoteOutcome::NotFound => {
            eprintln!("No note matches '{}'.", reference);
            Ok(())
        }
        NoteOutcome::Ambiguous(notes) => {
            resolve::print_ambiguous_notes(reference, notes);
            bail!("ambiguous note reference");
        }
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// First line of a note, for one-line messages.
pub(crate) fn summary(note: &Note) -> String {
    let first = note.text().lines().next().unwrap_or_default();
    truncate_str(first.trim(), 60)
}
