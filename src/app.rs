//! Application state and the update function that drives it.
//!
//! Every user interaction becomes an [`Action`]. [`update`] consumes the
//! current [`AppState`] and returns the next one inside a [`Transition`];
//! callers persist the note list whenever `changed` is set, then re-render.

use tracing::debug;

use crate::domain::{Commit, Editor, FilteredView, NoteId, NoteList, StatusFilter, ViewFilter};

/// Everything the application shows and edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    notes: NoteList,
    editor: Editor,
    filter: ViewFilter,
}

impl AppState {
    /// Starts from a loaded note list with the editor hidden and no filter.
    pub fn new(notes: NoteList) -> Self {
        Self {
            notes,
            editor: Editor::Hidden,
            filter: ViewFilter::default(),
        }
    }

    pub fn notes(&self) -> &NoteList {
        &self.notes
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    /// The notes currently visible under the active filter.
    pub fn view(&self) -> FilteredView<'_> {
        self.filter.apply(&self.notes)
    }
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenCreate,
    OpenEdit(NoteId),
    SetDraft(String),
    Cancel,
    Apply,
    Toggle(NoteId),
    Remove(NoteId),
    Search(String),
    SetStatus(StatusFilter),
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    /// True when the note list differs from before and must be saved.
    pub changed: bool,
}

impl Transition {
    fn new(state: AppState, changed: bool) -> Self {
        Self { state, changed }
    }

    fn unchanged(state: AppState) -> Self {
        Self {
            state,
            changed: false,
        }
    }
}

/// Applies `action` to `state`.
///
/// Actions that name a note which no longer exists leave the state as it was.
pub fn update(state: AppState, action: Action) -> Transition {
    debug!(?action, "update");
    let AppState {
        mut notes,
        editor,
        mut filter,
    } = state;

    match action {
        Action::OpenCreate => Transition::unchanged(AppState {
            notes,
            editor: editor.open_create(),
            filter,
        }),
        Action::OpenEdit(id) => {
            let editor = match notes.get(&id) {
                Some(note) => editor.open_edit(id, note.text()),
                None => editor,
            };
            Transition::unchanged(AppState {
                notes,
                editor,
                filter,
            })
        }
        Action::SetDraft(text) => Transition::unchanged(AppState {
            notes,
            editor: editor.set_draft(text),
            filter,
        }),
        Action::Cancel => Transition::unchanged(AppState {
            notes,
            editor: editor.cancel(),
            filter,
        }),
        Action::Apply => {
            let (editor, commit) = editor.apply();
            let changed = match commit {
                Some(Commit::Add(text)) => notes.add(&text).is_some(),
                Some(Commit::Replace(id, text)) => notes.replace_text(&id, &text),
                None => false,
            };
            Transition::new(
                AppState {
                    notes,
                    editor,
                    filter,
                },
                changed,
            )
        }
        Action::Toggle(id) => {
            let changed = notes.toggle(&id);
            Transition::new(
                AppState {
                    notes,
                    editor,
                    filter,
                },
                changed,
            )
        }
        Action::Remove(id) => {
            let changed = notes.remove(&id).is_some();
            Transition::new(
                AppState {
                    notes,
                    editor,
                    filter,
                },
                changed,
            )
        }
        Action::Search(query) => {
            filter.set_query(query);
            Transition::unchanged(AppState {
                notes,
                editor,
                filter,
            })
        }
        Action::SetStatus(status) => {
            filter.set_status(status);
            Transition::unchanged(AppState {
                notes,
                editor,
                filter,
            })
        }
    }
}

/// Applies a sequence of actions, reporting whether any of them changed the
/// note list.
pub fn update_all(state: AppState, actions: impl IntoIterator<Item = Action>) -> Transition {
    actions
        .into_iter()
        .fold(Transition::unchanged(state), |acc, action| {
            let next = update(acc.state, action);
            Transition::new(next.state, acc.changed || next.changed)
        })
}
