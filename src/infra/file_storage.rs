//! One JSON file per key, written atomically.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::storage::{Storage, StorageError, validate_key};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a crash never leaves a half-written value behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Uses `dir` for storage, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| StorageError::Io {
            path: dir.clone(),
            source: e,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that holds `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| StorageError::InvalidEncoding {
                    key: key.to_string(),
                    path,
                }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io { path, source: e }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|e| StorageError::Io {
            path: path.clone(),
            source: e,
        })?;

        temp.write_all(value.as_bytes())
            .map_err(|e| StorageError::Io {
                path: path.clone(),
                source: e,
            })?;

        temp.persist(&path).map_err(|e| StorageError::AtomicWrite {
            path: path.clone(),
            source: e.error,
        })?;

        Ok(())
    }
}
