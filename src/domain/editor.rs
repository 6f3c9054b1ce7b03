//! The create/edit overlay.

use crate::domain::NoteId;

/// What applying a draft asks the note list to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    Add(String),
    Replace(NoteId, String),
}

/// State of the editor overlay.
///
/// ```text
/// Hidden ──open_create──▶ Creating ─┐
///    ▲  ──open_edit────▶ Editing  ─┤ apply (non-blank) / cancel
///    └──────────────────────────────┘
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Editor {
    #[default]
    Hidden,
    Creating {
        draft: String,
    },
    Editing {
        id: NoteId,
        draft: String,
    },
}

impl Editor {
    /// Opens an empty draft for a new note. No-op while already open.
    pub fn open_create(self) -> Self {
        match self {
            Editor::Hidden => Editor::Creating {
                draft: String::new(),
            },
            open => open,
        }
    }

    /// Opens a draft preloaded with an existing note's text.
    pub fn open_edit(self, id: NoteId, text: impl Into<String>) -> Self {
        match self {
            Editor::Hidden => Editor::Editing {
                id,
                draft: text.into(),
            },
            open => open,
        }
    }

    /// Replaces the draft text. Ignored while hidden.
    pub fn set_draft(self, text: impl Into<String>) -> Self {
        match self {
            Editor::Hidden => Editor::Hidden,
            Editor::Creating { .. } => Editor::Creating { draft: text.into() },
            Editor::Editing { id, .. } => Editor::Editing {
                id,
                draft: text.into(),
            },
        }
    }

    /// Closes the overlay and throws the draft away.
    pub fn cancel(self) -> Self {
        Editor::Hidden
    }

    /// Commits the draft.
    ///
    /// A blank draft commits nothing and leaves the overlay open.
    pub fn apply(self) -> (Self, Option<Commit>) {
        match self {
            Editor::Creating { draft } if !draft.trim().is_empty() => {
                (Editor::Hidden, Some(Commit::Add(draft)))
            }
            Editor::Editing { id, draft } if !draft.trim().is_empty() => {
                (Editor::Hidden, Some(Commit::Replace(id, draft)))
            }
            other => (other, None),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Editor::Hidden)
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            Editor::Hidden => None,
            Editor::Creating { draft } | Editor::Editing { draft, .. } => Some(draft),
        }
    }

    /// Heading shown above the draft.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Editor::Hidden => None,
            Editor::Creating { .. } => Some("NEW NOTE"),
            Editor::Editing { .. } => Some("EDIT NOTE"),
        }
    }
}
