//! Loading and saving the note list.

use serde::Deserialize;
use serde::de::IgnoredAny;
use thiserror::Error;
use tracing::{debug, info, warn};
use ulid::Ulid;

use super::storage::{Storage, StorageError};
use crate::domain::NoteList;

/// Key holding the serialized note list.
pub const NOTES_KEY: &str = "notes";

/// Key where an unreadable note blob is preserved before it is replaced.
///
/// If this key already holds a different blob, the new one goes to
/// `notes.corrupt-<ULID>` instead.
pub const CORRUPT_BACKUP_KEY: &str = "notes.corrupt";

/// Errors while loading or saving notes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to serialize notes: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// How `load` ended up with its notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing had been saved yet.
    Empty,
    /// The saved blob parsed.
    Loaded,
    /// The saved blob parsed but some entries had no id; the ids generated
    /// for them have been saved.
    Migrated,
    /// The saved blob was malformed and has been moved to the backup key.
    Recovered,
}

/// The note list's persistent home.
///
/// The whole list lives as one JSON array under [`NOTES_KEY`] and is
/// rewritten in full by every [`persist`](NoteStore::persist).
#[derive(Debug)]
pub struct NoteStore<S: Storage> {
    storage: S,
}

impl<S: Storage> NoteStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Reads the saved notes.
    ///
    /// A missing blob gives an empty list. A blob that does not parse as a
    /// note array also gives an empty list; the raw text is first copied to
    /// [`CORRUPT_BACKUP_KEY`] so the next save cannot lose it silently.
    pub fn load(&mut self) -> Result<NoteList, StoreError> {
        self.load_with_outcome().map(|(notes, _)| notes)
    }

    /// Like [`load`](NoteStore::load), also reporting what happened.
    pub fn load_with_outcome(&mut self) -> Result<(NoteList, LoadOutcome), StoreError> {
        let Some(raw) = self.storage.get(NOTES_KEY)? else {
            debug!("no saved notes");
            return Ok((NoteList::new(), LoadOutcome::Empty));
        };

        match serde_json::from_str::<NoteList>(&raw) {
            Ok(notes) if has_missing_ids(&raw) => {
                info!(count = notes.len(), "assigning ids to notes saved without one");
                self.persist(&notes)?;
                Ok((notes, LoadOutcome::Migrated))
            }
            Ok(notes) => {
                debug!(count = notes.len(), "loaded notes");
                Ok((notes, LoadOutcome::Loaded))
            }
            Err(err) => {
                let backup = self.backup_key_for(&raw)?;
                warn!(
                    error = %err,
                    %backup,
                    "saved notes are malformed, starting with an empty list"
                );
                self.storage.set(&backup, &raw)?;
                Ok((NoteList::new(), LoadOutcome::Recovered))
            }
        }
    }

    /// Picks a backup key that does not overwrite an earlier, different backup.
    fn backup_key_for(&self, raw: &str) -> Result<String, StoreError> {
        match self.storage.get(CORRUPT_BACKUP_KEY)? {
            Some(existing) if existing != raw => {
                Ok(format!("{}-{}", CORRUPT_BACKUP_KEY, Ulid::new()))
            }
            _ => Ok(CORRUPT_BACKUP_KEY.to_string()),
        }
    }

    /// Overwrites the saved notes with `notes`.
    pub fn persist(&mut self, notes: &NoteList) -> Result<(), StoreError> {
        let json = serde_json::to_string(notes)?;
        self.storage.set(NOTES_KEY, &json)?;
        info!(count = notes.len(), "saved notes");
        Ok(())
    }
}

/// Returns true if any entry of a parsed note array was saved without an id.
fn has_missing_ids(raw: &str) -> bool {
    #[derive(Deserialize)]
    struct StoredId {
        #[serde(default)]
        id: Option<IgnoredAny>,
    }

    serde_json::from_str::<Vec<StoredId>>(raw)
        .map(|entries| entries.iter().any(|e| e.id.is_none()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Note, NoteId};
    use crate::infra::{FileStorage, MemoryStorage};
    use pretty_assertions::assert_eq;

    fn sample_list() -> NoteList {
        let mut notes = NoteList::new();
        notes.add("Buy Milk");
        let id = notes.add("Clean").unwrap();
        notes.toggle(&id);
        notes
    }

    #[test]
    fn load_empty_storage_gives_empty_list() {
        let mut store = NoteStore::new(MemoryStorage::new());
        let (notes, outcome) = store.load_with_outcome().unwrap();
        assert!(notes.is_empty());
        assert_eq!(outcome, LoadOutcome::Empty);
    }

    #[test]
    fn persist_then_load_round_trips() {
        let notes = sample_list();
        let mut store = NoteStore::new(MemoryStorage::new());

        store.persist(&notes).unwrap();

        let mut reopened = NoteStore::new(store.into_storage());
        assert_eq!(reopened.load().unwrap(), notes);
    }

    #[test]
    fn persist_overwrites_previous_blob() {
        let mut store = NoteStore::new(MemoryStorage::new());
        store.persist(&sample_list()).unwrap();
        store.persist(&NoteList::new()).unwrap();

        assert_eq!(
            store.storage().get(NOTES_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn load_legacy_blob_without_ids() {
        let raw = r#"[{"text":"Buy Milk","isChecked":false},{"text":"Clean","isChecked":true}]"#;
        let mut store = NoteStore::new(MemoryStorage::with_entry(NOTES_KEY, raw));

        let notes = store.load().unwrap();

        let texts: Vec<_> = notes.iter().map(Note::text).collect();
        assert_eq!(texts, vec!["Buy Milk", "Clean"]);
        assert!(notes.get_at(1).unwrap().is_checked());
        assert_ne!(notes.id_at(0), notes.id_at(1));
    }

    #[test]
    fn legacy_ids_are_saved_and_stable_across_loads() {
        let raw = r#"[{"text":"Buy Milk","isChecked":false}]"#;
        let mut store = NoteStore::new(MemoryStorage::with_entry(NOTES_KEY, raw));

        let (first, outcome) = store.load_with_outcome().unwrap();
        assert_eq!(outcome, LoadOutcome::Migrated);

        let (second, outcome) = store.load_with_outcome().unwrap();
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(first.id_at(0), second.id_at(0));
    }

    #[test]
    fn blob_with_ids_is_not_rewritten() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        let raw = format!(r#"[{{"id":"{id}","text":"Buy Milk"}}]"#);
        let mut store = NoteStore::new(MemoryStorage::with_entry(NOTES_KEY, &raw));

        let (_, outcome) = store.load_with_outcome().unwrap();

        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(store.storage().get(NOTES_KEY).unwrap(), Some(raw));
    }

    #[test]
    fn load_malformed_json_falls_back_and_backs_up() {
        let mut store = NoteStore::new(MemoryStorage::with_entry(NOTES_KEY, "{not json"));

        let (notes, outcome) = store.load_with_outcome().unwrap();

        assert!(notes.is_empty());
        assert_eq!(outcome, LoadOutcome::Recovered);
        assert_eq!(
            store.storage().get(CORRUPT_BACKUP_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn second_corruption_keeps_earlier_backup() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut store = NoteStore::new(FileStorage::open(dir.path()).unwrap());

        store.storage.set(NOTES_KEY, "{first").unwrap();
        store.load().unwrap();
        store.storage.set(NOTES_KEY, "{second").unwrap();
        store.load().unwrap();

        assert_eq!(
            store.storage().get(CORRUPT_BACKUP_KEY).unwrap().as_deref(),
            Some("{first")
        );
        let backups: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("notes.corrupt-"))
            .collect();
        assert_eq!(backups.len(), 1);
        let key = backups[0].trim_end_matches(".json");
        assert_eq!(store.storage().get(key).unwrap().as_deref(), Some("{second"));
    }

    #[test]
    fn same_corruption_twice_reuses_backup_key() {
        let mut store = NoteStore::new(MemoryStorage::with_entry(NOTES_KEY, "{bad"));
        store.load().unwrap();
        assert_eq!(
            store.backup_key_for("{bad").unwrap(),
            CORRUPT_BACKUP_KEY.to_string()
        );
    }

    #[test]
    fn load_wrong_shape_falls_back() {
        for raw in [r#"{"text":"x"}"#, "42", r#"[{"isChecked":true}]"#, r#"["a"]"#] {
            let mut store = NoteStore::new(MemoryStorage::with_entry(NOTES_KEY, raw));
            let (notes, outcome) = store.load_with_outcome().unwrap();
            assert!(notes.is_empty(), "expected empty list for {raw}");
            assert_eq!(outcome, LoadOutcome::Recovered);
        }
    }

    #[test]
    fn stored_blob_is_a_json_array_of_notes() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        let notes = NoteList::from_notes(vec![Note::with_id(id, "Buy Milk", true)]);
        let mut store = NoteStore::new(MemoryStorage::new());
        store.persist(&notes).unwrap();

        let raw = store.storage().get(NOTES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"id": "01HQ3K5M7NXJK4QZPW8V2R6T9Y", "text": "Buy Milk", "isChecked": true}
            ])
        );
    }
}
