//! Opening the configured key-value backend.

use jotter_core::storage::{FileKeyValueStore, KeyValueStore, SqliteKeyValueStore};
use jotter_core::NoteRepository;
use tracing::debug;

use crate::config::StoreBackend;

use super::resolver::StoreLocation;

/// Database file used by the SQLite backend inside the store directory.
pub const SQLITE_FILE_NAME: &str = "notes.db";

/// The repository type every command works against.
pub type Repository = NoteRepository<Box<dyn KeyValueStore>>;

pub fn open_backend(location: &StoreLocation) -> anyhow::Result<Box<dyn KeyValueStore>> {
    debug!(dir = %location.dir.display(), backend = ?location.backend, "opening store");
    let backend: Box<dyn KeyValueStore> = match location.backend {
        StoreBackend::File => Box::new(FileKeyValueStore::open(&location.dir)?),
        StoreBackend::Sqlite => Box::new(SqliteKeyValueStore::open(
            &location.dir.join(SQLITE_FILE_NAME),
        )?),
    };
    Ok(backend)
}

pub fn open_repository(location: &StoreLocation) -> anyhow::Result<Repository> {
    Ok(NoteRepository::open(open_backend(location)?))
}
