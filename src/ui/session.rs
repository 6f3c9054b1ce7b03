//! The interactive read-update-render loop.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, error};

use super::input::{EditorInput, HELP, Input, parse_command, parse_editor_line};
use super::render::{prompt, render};
use crate::app::{Action, AppState, update_all};
use crate::domain::NoteId;
use crate::infra::{LoadOutcome, NoteStore, Storage};

/// An interactive session over any line-based input and text output.
pub struct Session<S: Storage, R: BufRead, W: Write> {
    store: NoteStore<S>,
    state: AppState,
    input: R,
    out: W,
}

impl<S: Storage, R: BufRead, W: Write> Session<S, R, W> {
    /// Loads the saved notes and prepares the session.
    pub fn start(mut store: NoteStore<S>, input: R, mut out: W) -> Result<Self> {
        let (notes, outcome) = store
            .load_with_outcome()
            .with_context(|| "failed to load notes")?;
        if outcome == LoadOutcome::Recovered {
            writeln!(
                out,
                "warning: saved notes could not be read; starting with an empty list"
            )?;
        }
        Ok(Self {
            store,
            state: AppState::new(notes),
            input,
            out,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            render(&mut self.out, &self.state)?;
            write!(self.out, "{}", prompt(&self.state))?;
            self.out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input");
                writeln!(self.out)?;
                return Ok(());
            }

            if self.state.editor().is_visible() {
                self.handle_editor_line(&line)?;
            } else if !self.handle_command_line(&line)? {
                return Ok(());
            }
        }
    }

    /// Returns false when the session should end.
    fn handle_command_line(&mut self, line: &str) -> Result<bool> {
        match parse_command(line) {
            Input::Quit => return Ok(false),
            Input::Help => writeln!(self.out, "{HELP}")?,
            Input::Refresh => {}
            Input::Invalid(msg) => writeln!(self.out, "{msg}")?,
            Input::Add => self.dispatch(vec![Action::OpenCreate])?,
            Input::Search(query) => self.dispatch(vec![Action::Search(query)])?,
            Input::Status(status) => self.dispatch(vec![Action::SetStatus(status)])?,
            Input::Edit(pos) => self.dispatch_at(pos, Action::OpenEdit)?,
            Input::Toggle(pos) => self.dispatch_at(pos, Action::Toggle)?,
            Input::Remove(pos) => self.dispatch_at(pos, Action::Remove)?,
        }
        Ok(true)
    }

    fn handle_editor_line(&mut self, line: &str) -> Result<()> {
        match parse_editor_line(line) {
            EditorInput::Cancel => self.dispatch(vec![Action::Cancel]),
            EditorInput::Apply(None) => self.dispatch(vec![Action::Apply]),
            EditorInput::Apply(Some(text)) => {
                self.dispatch(vec![Action::SetDraft(text), Action::Apply])
            }
        }
    }

    /// Translates a displayed position into the id shown there, then acts on it.
    fn dispatch_at(
        &mut self,
        position: usize,
        action: impl FnOnce(NoteId) -> Action,
    ) -> Result<()> {
        let id = self
            .state
            .view()
            .id_at(position.saturating_sub(1))
            .cloned();
        match id {
            Some(id) => self.dispatch(vec![action(id)]),
            None => {
                writeln!(self.out, "No note number {position}.")?;
                Ok(())
            }
        }
    }

    fn dispatch(&mut self, actions: Vec<Action>) -> Result<()> {
        let t = update_all(std::mem::take(&mut self.state), actions);
        self.state = t.state;
        if t.changed
            && let Err(err) = self.store.persist(self.state.notes())
        {
            error!(error = %err, "failed to save notes");
            writeln!(self.out, "error: failed to save notes: {err}")?;
        }
        Ok(())
    }
}
