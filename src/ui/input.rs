//! Parsing of interactive input lines.

use crate::domain::StatusFilter;

/// A command typed while the note list is showing.
///
/// Positions are 1-based, as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Add,
    Edit(usize),
    Toggle(usize),
    Remove(usize),
    Search(String),
    Status(StatusFilter),
    Help,
    Quit,
    Refresh,
    Invalid(String),
}

/// A line typed while the editor overlay is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorInput {
    /// Apply, replacing the draft first when text was typed.
    Apply(Option<String>),
    Cancel,
}

pub const HELP: &str = "\
Commands:
  a, add            new note
  e, edit N         edit note N
  x, check N        check / uncheck note N
  d, rm N           delete note N
  / TEXT            search (a bare / clears the search)
  status S          show all, complete, or incomplete notes
  h, help           this help
  q, quit           leave";

/// Parses one line typed at the list prompt.
pub fn parse_command(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();

    if let Some(query) = trimmed.strip_prefix('/') {
        return Input::Search(query.trim_start().to_string());
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word.to_lowercase().as_str() {
        "" => Input::Refresh,
        "a" | "add" | "new" => Input::Add,
        "e" | "edit" => position(rest).map_or_else(Input::Invalid, Input::Edit),
        "x" | "check" | "toggle" => position(rest).map_or_else(Input::Invalid, Input::Toggle),
        "d" | "rm" | "delete" => position(rest).map_or_else(Input::Invalid, Input::Remove),
        "search" => Input::Search(rest.to_string()),
        "status" => match rest.parse::<StatusFilter>() {
            Ok(status) => Input::Status(status),
            Err(err) => Input::Invalid(err.to_string()),
        },
        "h" | "help" | "?" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        other => Input::Invalid(format!("unknown command '{other}', type h for help")),
    }
}

fn position(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ if arg.is_empty() => Err("expected a note number".to_string()),
        _ => Err(format!("'{arg}' is not a note number")),
    }
}

/// Parses one line typed at the editor prompt.
pub fn parse_editor_line(line: &str) -> EditorInput {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim() == ":cancel" {
        EditorInput::Cancel
    } else if line.is_empty() {
        EditorInput::Apply(None)
    } else {
        EditorInput::Apply(Some(line.to_string()))
    }
}
