//! tick - a small to-do list for the terminal

pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_check, handle_completions, handle_edit, handle_list, handle_remove,
        handle_search, handle_shell,
    },
};
use logging::{Verbosity, init_logging};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_count(cli.verbose));

    let config = Config::load(cli.config.as_deref())?;
    let data_dir = config.data_dir(cli.dir.as_ref());
    debug!(dir = %data_dir.display(), "using data directory");

    match &cli.command {
        None | Some(Command::Shell) => handle_shell(&data_dir, &config),
        Some(Command::Add(args)) => handle_add(args, &data_dir, &config),
        Some(Command::Edit(args)) => handle_edit(args, &data_dir, &config),
        Some(Command::Check(args)) => handle_check(args, &data_dir, &config),
        Some(Command::Remove(args)) => handle_remove(args, &data_dir, &config),
        Some(Command::List(args)) => handle_list(args, &data_dir, &config),
        Some(Command::Search(args)) => handle_search(args, &data_dir, &config),
        Some(Command::Completions(args)) => handle_completions(args),
    }
}
