//! Output format types for CLI commands.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::FilteredView;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    /// 1-based position in the listed view
    pub position: usize,
    pub id: String,
    pub text: String,
    pub checked: bool,
    /// When the note was created, taken from its id
    pub created: DateTime<Utc>,
}

impl NoteListing {
    /// Builds listings for every note in a view.
    pub fn from_view(view: &FilteredView<'_>) -> Vec<Self> {
        view.iter()
            .enumerate()
            .map(|(i, note)| NoteListing {
                position: i + 1,
                id: note.id().to_string(),
                text: note.text().to_string(),
                checked: note.is_checked(),
                created: note.id().timestamp(),
            })
            .collect()
    }
}
