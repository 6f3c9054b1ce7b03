//! List and search command handlers.

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use super::{load_state, open_store, truncate_str};
use crate::cli::config::Config;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{ListArgs, SearchArgs};
use crate::domain::{FilteredView, ViewFilter};

/// Writes a view in the requested format.
pub fn format_view<W: Write>(
    out: &mut W,
    view: &FilteredView<'_>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if view.is_empty() {
                writeln!(out, "No notes found.")?;
                return Ok(());
            }

            writeln!(out, "{:>3}  {:<3}  {:<50}  {:<10}", "#", "", "Note", "ID")?;
            writeln!(
                out,
                "{:>3}  {:<3}  {:<50}  {:<10}",
                "---",
                "---",
                "--------------------------------------------------",
                "----------"
            )?;
            for (i, note) in view.iter().enumerate() {
                let mark = if note.is_checked() { "[x]" } else { "[ ]" };
                let first_line = note.text().lines().next().unwrap_or_default();
                writeln!(
                    out,
                    "{:>3}  {:<3}  {:<50}  {:<10}",
                    i + 1,
                    mark,
                    truncate_str(first_line, 50),
                    note.id().prefix()
                )?;
            }

            writeln!(out)?;
            writeln!(out, "{} note(s)", view.len())?;
        }
        OutputFormat::Json => {
            let output = Output::new(NoteListing::from_view(view));
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}

fn print_view(
    data_dir: &Path,
    config: &Config,
    filter: &ViewFilter,
    format: OutputFormat,
) -> Result<()> {
    let mut store = open_store(data_dir, config)?;
    let state = load_state(&mut store, filter)?;
    let stdout = std::io::stdout();
    format_view(&mut stdout.lock(), &state.view(), format)
}

pub fn handle_list(args: &ListArgs, data_dir: &Path, config: &Config) -> Result<()> {
    print_view(data_dir, config, &args.view.to_filter(), args.format)
}

pub fn handle_search(args: &SearchArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let filter = ViewFilter::new(args.query.clone(), args.status.into());
    print_view(data_dir, config, &filter, args.format)
}
