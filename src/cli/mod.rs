//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::{StatusFilter, ViewFilter};
use output::OutputFormat;

/// tick - a small to-do list for the terminal
#[derive(Parser, Debug)]
#[command(name = "tick", version, about, long_about = None)]
pub struct Cli {
    /// Data directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// With no command, starts an interactive session
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a note (opens your editor when no text is given)
    Add(AddArgs),

    /// Replace a note's text (opens your editor when no text is given)
    Edit(EditArgs),

    /// Check or uncheck a note
    #[command(alias = "toggle")]
    Check(CheckArgs),

    /// Delete a note
    #[command(name = "rm", alias = "remove")]
    Remove(RemoveArgs),

    /// List notes, optionally filtered
    #[command(name = "ls", alias = "list")]
    List(ListArgs),

    /// Case-insensitive search across note text
    Search(SearchArgs),

    /// Start an interactive session
    Shell,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Completion state accepted by `--status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    #[default]
    All,
    Complete,
    Incomplete,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => StatusFilter::All,
            StatusArg::Complete => StatusFilter::Complete,
            StatusArg::Incomplete => StatusFilter::Incomplete,
        }
    }
}

/// Selects the view that positions refer to.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Only include notes containing this text (case-insensitive)
    #[arg(short = 's', long)]
    pub search: Option<String>,

    /// Only include notes with this completion state
    #[arg(long, value_enum, default_value_t = StatusArg::All)]
    pub status: StatusArg,
}

impl ViewArgs {
    pub fn to_filter(&self) -> ViewFilter {
        ViewFilter::new(self.search.clone().unwrap_or_default(), self.status.into())
    }
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note text (words are joined with spaces)
    pub text: Vec<String>,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Position in the listed view, or an ID prefix
    pub note: String,

    /// New text (words are joined with spaces)
    pub text: Vec<String>,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Arguments for the `check` command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Position in the listed view, or an ID prefix
    pub note: String,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Position in the listed view, or an ID prefix
    pub note: String,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Only include notes with this completion state
    #[arg(long, value_enum, default_value_t = StatusArg::All)]
    pub status: StatusArg,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Joins positional words into one note text.
pub(crate) fn join_words(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
