//! Isolated test environment with temp directory.

use super::{TestNote, TickCommand};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tick::domain::NoteList;
use tick::infra::{FileStorage, NOTES_KEY, NoteStore, Storage};

/// Isolated test environment with a temporary data directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Commands run against it never read the user's own config file.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the data directory
    data_dir: PathBuf,
    /// Config file passed to every command; only exists once written
    config_path: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let config_path = temp_dir.path().join("config.toml");
        Self {
            _temp_dir: temp_dir,
            data_dir,
            config_path,
        }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path of the JSON file the file backend writes.
    pub fn notes_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", NOTES_KEY))
    }

    /// Writes the config file used by [`cmd`](TestEnv::cmd).
    pub fn write_config(&self, contents: &str) {
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
    }

    /// Saves `notes` as the stored list, replacing anything already there.
    pub fn add_notes(&self, notes: &[TestNote]) {
        let list: NoteList = notes.iter().map(TestNote::to_note).collect();
        let mut store = NoteStore::new(self.file_storage());
        store.persist(&list).expect("Failed to seed notes");
    }

    /// Stores `raw` under the notes key verbatim.
    pub fn seed_blob(&self, raw: &str) {
        self.file_storage()
            .set(NOTES_KEY, raw)
            .expect("Failed to seed blob");
    }

    /// Reads a raw value from the file backend.
    pub fn read_key(&self, key: &str) -> Option<String> {
        self.file_storage().get(key).expect("Failed to read key")
    }

    /// Loads the stored list through the library.
    pub fn read_notes(&self) -> NoteList {
        NoteStore::new(self.file_storage())
            .load()
            .expect("Failed to load notes")
    }

    /// Creates a TickCommand configured for this test environment.
    pub fn cmd(&self) -> TickCommand {
        TickCommand::new()
            .dir(&self.data_dir)
            .config(&self.config_path)
    }

    fn file_storage(&self) -> FileStorage {
        FileStorage::open(&self.data_dir).expect("Failed to open data directory")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.add_notes(&[TestNote::new("temp")]);
            env.data_dir().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.data_dir().to_string_lossy());
        assert_eq!(args[2], "--config");
    }

    #[test]
    fn test_env_add_notes_round_trips() {
        let env = TestEnv::new();
        env.add_notes(&[TestNote::new("first"), TestNote::new("second").checked()]);

        assert!(env.notes_path().exists());
        let notes = env.read_notes();
        assert_eq!(notes.len(), 2);
        assert!(notes.get_at(1).unwrap().is_checked());
    }
}
