//! Text rendering of the application state.

use std::io::{self, Write};

use crate::app::AppState;
use crate::domain::{Note, StatusFilter};

/// Draws the list view, and the editor overlay when it is open.
pub fn render<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "TODO LIST")?;

    let filter = state.filter();
    if !filter.query_str().is_empty() {
        writeln!(out, "Search: \"{}\"", filter.query_str())?;
    }
    if filter.status() != StatusFilter::All {
        writeln!(out, "Showing: {}", filter.status())?;
    }
    writeln!(out)?;

    let view = state.view();
    if view.is_empty() {
        writeln!(out, "  Empty...")?;
    } else {
        for (i, note) in view.iter().enumerate() {
            writeln!(out, "{}", note_line(i + 1, note))?;
        }
    }

    let editor = state.editor();
    if let (Some(title), Some(draft)) = (editor.title(), editor.draft()) {
        writeln!(out)?;
        writeln!(out, "--- {} ---", title)?;
        if draft.is_empty() {
            writeln!(out, "  (empty)")?;
        } else {
            writeln!(out, "  {}", draft)?;
        }
        writeln!(
            out,
            "Type the text and press Enter. An empty line applies the draft as shown, :cancel discards it."
        )?;
    }

    Ok(())
}

/// Formats one numbered row of the list.
pub fn note_line(position: usize, note: &Note) -> String {
    let mark = if note.is_checked() { 'x' } else { ' ' };
    format!("{:>3}. [{}] {}", position, mark, note.text())
}

/// The prompt matching the current mode.
pub fn prompt(state: &AppState) -> &'static str {
    if state.editor().is_visible() {
        "note> "
    } else {
        "> "
    }
}
