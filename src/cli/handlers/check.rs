//! Check command handler.

use anyhow::Result;
use std::path::Path;

use super::{
    NoteOutcome, ResolveResult, load_state, open_store, report_outcome, resolve_note, summary,
};
use crate::app::{Action, update};
use crate::cli::CheckArgs;
use crate::cli::config::Config;
use crate::domain::ViewFilter;
use crate::infra::{NoteStore, Storage};

/// Flips the checked state of the note `reference` points to.
pub fn toggle_note<S: Storage>(
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

    let t = update(state, Action::Toggle(id.clone()));
    if t.changed {
        store.persist(t.state.notes())?;
    }

    Ok(t
        .state
        .notes()
        .get(&id)
        .cloned()
        .map_or(NoteOutcome::NotFound, NoteOutcome::Changed))
}

pub fn handle_check(args: &CheckArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let mut store = open_store(data_dir, config)?;
    let outcome = toggle_note(&mut store, &args.view.to_filter(), &args.note)?;

    report_outcome(&args.note, &outcome, |note| {
        let verb = if note.is_checked() { "Checked" } else { "Unchecked" };
        format!("{}: {}", verb, summary(note))
    })
}
