//! Note reference resolution.

use crate::app::AppState;
use crate::domain::{Note, NoteId};

/// Minimum length for a reference to be tried as an ID prefix.
const MIN_PREFIX_LEN: usize = 4;

/// Result of resolving a note reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveResult {
    /// Exactly one note matched.
    Unique(NoteId),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<Note>),
    /// No notes matched.
    NotFound,
}

/// Prints the candidates of an ambiguous reference.
pub(crate) fn print_ambiguous_notes(reference: &str, notes: &[Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", reference, notes.len());
    for note in notes {
        eprintln!("  {} - {}", note.id().prefix(), super::summary(note));
    }
    eprintln!();
    eprintln!("Use a longer ID prefix to specify which note you mean.");
}

/// Resolves a reference typed on the command line.
///
/// Resolution order:
/// 1. A decimal number is a 1-based position in the state's current view
/// 2. Anything else of at least four alphanumeric characters is an ID prefix,
///    matched against every note regardless of the view
pub fn resolve_note(state: &AppState, reference: &str) -> ResolveResult {
    let reference = reference.trim();

    if !reference.is_empty() && reference.chars().all(|c| c.is_ascii_digit()) {
        let id = reference
            .parse::<usize>()
            .ok()
            .and_then(|pos| pos.checked_sub(1))
            .and_then(|index| state.view().id_at(index).cloned());
        return match id {
            Some(id) => ResolveResult::Unique(id),
            None => ResolveResult::NotFound,
        };
    }

    let looks_like_id = reference.len() >= MIN_PREFIX_LEN
        && reference.chars().all(|c| c.is_ascii_alphanumeric());
    if !looks_like_id {
        return ResolveResult::NotFound;
    }

    let mut matches = state.notes().find_by_id_prefix(reference);
    match matches.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(matches.remove(0).id().clone()),
        _ => ResolveResult::Ambiguous(matches.into_iter().cloned().collect()),
    }
}
