//! Remove command handler.

use anyhow::Result;
use std::path::Path;

use super::{
    NoteOutcome, ResolveResult, load_state, open_store, report_outcome, resolve_note, summary,
};
use crate::app::{Action, update};
use crate::cli::RemoveArgs;
use crate::cli::config::Config;
use crate::domain::ViewFilter;
use crate::infra::{NoteStore, Storage};

/// Deletes the note `reference` points to, returning it in the outcome.
pub fn remove_note<S: Storage>(
    store: &mut NoteStore<S>,
    filter: &ViewFilter,
    reference: &str,
) -> Result<NoteOutcome> {
    let state = load_state(store, filter)?;
    let id = match resolve_note(&state, reference) {
        ResolveResult::Unique(id) => id,
        ResolveResult::Ambiguous(notes) => return Ok(NoteOutcome::Ambiguous(notes)),
        ResolveResult::NotFound => return Ok(NoteOutcome::NotFound),
    };

    let Some(removed) = state.notes().get(&id).cloned() else {
        return Ok(NoteOutcome::NotFound);
    };
    let t = update(state, Action::Remove(id));
    if t.changed {
        store.persist(t.state.notes())?;
    }

    Ok(NoteOutcome::Changed(removed))
}

pub fn handle_remove(args: &RemoveArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let mut store = open_store(data_dir, config)?;
    let outcome = remove_note(&mut store, &args.view.to_filter(), &args.note)?;

    report_outcome(&args.note, &outcome, |note| {
        format!("Removed: {}", summary(note))
    })
}
