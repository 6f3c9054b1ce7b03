//! Add command handler.

use anyhow::Result;
use std::path::Path;

use super::{
    EditorLauncher, ExternalEditor, NoteOutcome, edit_text, load_state, open_store,
    report_outcome, summary,
};
use crate::app::{Action, update_all};
use crate::cli::config::Config;
use crate::cli::{AddArgs, join_words};
use crate::domain::ViewFilter;
use crate::infra::{NoteStore, Storage};

/// Adds a note through the editor overlay and saves the list.
///
/// Blank text is not an error; it yields [`NoteOutcome::Blank`] and leaves
/// the store untouched.
pub fn add_note<S: Storage>(store: &mut NoteStore<S>, text: &str) -> Result<NoteOutcome> {
    let state = load_state(store, &ViewFilter::default())?;
    let t = update_all(
        state,
        [
            Action::OpenCreate,
            Action::SetDraft(text.to_string()),
            Action::Apply,
        ],
    );

    if !t.changed {
        return Ok(NoteOutcome::Blank);
    }
    store.persist(t.state.notes())?;

    let added = t.state.notes().iter().last().cloned();
    Ok(added.map_or(NoteOutcome::Blank, NoteOutcome::Changed))
}

pub(crate) fn handle_add_impl<E: EditorLauncher>(
    args: &AddArgs,
    data_dir: &Path,
    config: &Config,
    editor: &E,
) -> Result<()> {
    let text = match join_words(&args.text) {
        Some(text) => Some(text),
        None => edit_text(editor, "")?,
    };

    let outcome = match text {
        Some(text) => {
            let mut store = open_store(data_dir, config)?;
            add_note(&mut store, &text)?
        }
        None => NoteOutcome::Blank,
    };

    report_outcome("", &outcome, |note| {
        format!("Added: {} [{}]", summary(note), note.id().prefix())
    })
}

pub fn handle_add(args: &AddArgs, data_dir: &Path, config: &Config) -> Result<()> {
    handle_add_impl(args, data_dir, config, &ExternalEditor(config))
}
