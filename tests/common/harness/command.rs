//! Fluent wrapper around assert_cmd::Command.

// Not every test binary uses every helper
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `tick` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct TickCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl TickCommand {
    /// Creates a new command for the `tick` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
        }
    }

    /// Sets the `--dir` option to specify the data directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Sets the `--config` option.
    pub fn config(mut self, path: &Path) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Sets an environment variable for the child process.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Feeds `input` to the child's stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("tick").expect("Failed to find tick binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `add` command with text.
    pub fn add(self, text: &str) -> Self {
        self.args(["add", text])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `search` command with a query.
    pub fn search(self, query: &str) -> Self {
        self.args(["search", query])
    }

    /// Configures for the `check` command.
    pub fn check(self, note: &str) -> Self {
        self.args(["check", note])
    }

    /// Configures for the `rm` command.
    pub fn rm(self, note: &str) -> Self {
        self.args(["rm", note])
    }

    /// Configures for the `shell` command.
    pub fn shell(self) -> Self {
        self.args(["shell"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for TickCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        TickCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = TickCommand::new().dir(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_output_success() {
        let output = TickCommand::new().args(["--help"]).output_success();
        assert!(output.contains("tick"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = TickCommand::new().ls().format_json();
        let args = cmd.get_args();
        assert!(args.contains(&"ls".to_string()));
        assert!(args.contains(&"--format".to_string()));
        assert!(args.contains(&"json".to_string()));
    }
}
