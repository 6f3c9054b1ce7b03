//! Writing note text in an external editor.

use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::cli::config::Config;

/// Trait for launching an editor (allows mocking in tests).
pub trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Launches the editor command from the config.
pub struct ExternalEditor<'a>(pub &'a Config);

impl EditorLauncher for ExternalEditor<'_> {
    fn open(&self, path: &Path) -> Result<()> {
        let editor = self.0.editor();

        // Parse editor command (may include args like "code --wait")
        let parts: Vec<&str> = editor.split_whitespace().collect();
        let Some((cmd, args)) = parts.split_first() else {
            bail!("editor command is empty");
        };

        debug!(%editor, path = %path.display(), "launching editor");
        let status = Command::new(cmd)
            .args(args)
            .arg(path)
            .status()
            .with_context(|| format!("failed to launch editor '{}'", editor))?;

        if !status.success() {
            bail!("editor '{}' exited with non-zero status", editor);
        }

        Ok(())
    }
}

/// Lets the user write text in an editor, starting from `initial`.
///
/// Trailing line breaks added by the editor are dropped. Returns `None` when
/// the result is blank, which callers treat as a cancelled draft.
pub fn edit_text<E: EditorLauncher>(editor: &E, initial: &str) -> Result<Option<String>> {
    let file = tempfile::Builder::new()
        .prefix("tick-")
        .suffix(".txt")
        .tempfile()
        .with_context(|| "failed to create draft file")?;

    std::fs::write(file.path(), initial)
        .with_context(|| format!("failed to write draft file {}", file.path().display()))?;

    editor.open(file.path())?;

    let text = std::fs::read_to_string(file.path())
        .with_context(|| format!("failed to read draft file {}", file.path().display()))?;
    let text = text.trim_end_matches(['\n', '\r']);

    if text.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(text.to_string()))
    }
}
