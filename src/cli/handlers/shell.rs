//! Interactive session handler.

use anyhow::Result;
use std::io;
use std::path::Path;

use super::open_store;
use crate::cli::config::Config;
use crate::ui::Session;

pub fn handle_shell(data_dir: &Path, config: &Config) -> Result<()> {
    let store = open_store(data_dir, config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::start(store, stdin.lock(), stdout.lock())?;
    session.run()
}
