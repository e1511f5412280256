//! Local key-value persistence for the note collection.
//!
//! - **traits**: the `KeyValueStore` interface every backend implements
//! - **file**: one JSON file per key in a directory
//! - **sqlite**: a single `kv` table in a SQLite database
//! - **memory**: in-process map, with failure injection for tests
//! - **local**: `LocalStore`, which loads and saves the whole collection
//!   under a fixed key

pub mod file;
pub mod local;
pub mod memory;
pub mod sqlite;
pub mod traits;

pub use file::FileKeyValueStore;
pub use local::{LocalStore, NOTES_KEY};
pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;
pub use traits::KeyValueStore;
