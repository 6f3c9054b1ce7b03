//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Which storage backend holds the notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One JSON file per key in the data directory
    #[default]
    File,
    /// A SQLite database in the data directory
    Sqlite,
}

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default data directory
    pub dir: Option<PathBuf>,

    /// Storage backend
    #[serde(default)]
    pub backend: Backend,

    /// Editor command for writing notes
    pub editor: Option<String>,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Parses configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/tick/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tick")
            .join("config.toml")
    }

    /// Resolve the data directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Platform data directory (`~/.local/share/tick` on Linux)
    /// 4. `./.tick`
    pub fn data_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .or_else(|| dirs::data_dir().map(|d| d.join("tick")))
            .unwrap_or_else(|| PathBuf::from(".tick"))
    }

    /// Resolve the editor command.
    ///
    /// Precedence order:
    /// 1. Config file `editor` setting
    /// 2. $EDITOR environment variable
    /// 3. $VISUAL environment variable
    /// 4. "vi" as fallback
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| "vi".to_string())
    }
}
