//! Key-value storage backends.
//!
//! The note list is one string value under one key, so a backend only needs to
//! read and overwrite whole values.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key '{key}': use letters, digits, '.', '-' or '_'")]
    InvalidKey { key: String },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("value under '{key}' in {path} is not valid UTF-8")]
    InvalidEncoding { key: String, path: PathBuf },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// A string-keyed store of string values.
pub trait Storage {
    /// Returns the value under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }}

/// Checks that a key is usable as a file name on every backend.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
        })
    }
}

/// In-process storage, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage holding one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }}
