//! Edit command handler.

use anyhow::Result;
use std::path::Path;

use super::{
    EditorLauncher, ExternalEditor, NoteOutcome, ResolveResult, edit_text, load_state,
    open_store, report_outcome, resolve_note, summary,
};
use crate::app::{Action, update_all};
use crate::cli::config::Config;
use crate::cli::{EditArgs, join_words};
use crate::domain::ViewFilter;
use crate::infra::{NoteStore, Storage};

/// Replaces the text of the note `reference` points to.
///
/// With `text` set to `None` the current text is opened in `editor`.
/// The note keeps its id, position and checked state.
pub fn edit_note<S: Storage, E: EditorLauncher>(
    store: &mut NoteStore<S>,
    filter: &ViewFilter,
    reference: &str,
    text: Option<&str>,
    editor: &E,
) -> Result<NoteOutcome> {
    let state = load_state(store, filter)?;
    let id = match resolve_note(&state, reference) {
        ResolveResult::Unique(id) => id,
        ResolveResult::Ambiguous(notes) => return Ok(NoteOutcome::Ambiguous(notes)),
        ResolveResult::NotFound => return Ok(NoteOutcome::NotFound),
    };

    let text = match text {
        Some(text) => Some(text.to_string()),
        None => {
            let current = state.notes().get(&id).map(|n| n.text()).unwrap_or_default();
            edit_text(editor, current)?
        }
    };
    let Some(text) = text else {
        return Ok(NoteOutcome::Blank);
    };

    let t = update_all(
        state,
        [Action::OpenEdit(id.clone()), Action::SetDraft(text), Action::Apply],
    );
    if !t.changed {
        return Ok(NoteOutcome::Blank);
    }
    store.persist(t.state.notes())?;

    Ok(t
        .state
        .notes()
        .get(&id)
        .cloned()
        .map_or(NoteOutcome::NotFound, NoteOutcome::Changed))
}

pub(crate) fn handle_edit_impl<E: EditorLauncher>(
    args: &EditArgs,
    data_dir: &Path,
    config: &Config,
    editor: &E,
) -> Result<()> {
    let mut store = open_store(data_dir, config)?;
    let text = join_words(&args.text);
    let outcome = edit_note(
        &mut store,
        &args.view.to_filter(),
        &args.note,
        text.as_deref(),
        editor,
    )?;

    report_outcome(&args.note, &outcome, |note| {
        format!("Updated: {} [{}]", summary(note), note.id().prefix())
    })
}

pub fn handle_edit(args: &EditArgs, data_dir: &Path, config: &Config) -> Result<()> {
    handle_edit_impl(args, data_dir, config, &ExternalEditor(config))
}
