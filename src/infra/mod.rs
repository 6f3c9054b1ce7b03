//! Storage backends and note persistence

mod file_storage;
mod sqlite_storage;
mod storage;
mod store;

pub use file_storage::FileStorage;
pub use sqlite_storage::SqliteStorage;
pub use storage::{MemoryStorage, Storage, StorageError};
pub use store::{CORRUPT_BACKUP_KEY, LoadOutcome, NOTES_KEY, NoteStore, StoreError};
