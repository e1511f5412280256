//! # Jotter Core
//!
//! Core library for Jotter - a local note-taking engine with optional
//! per-note password encryption.
//!
//! This crate provides the domain logic, storage abstractions, and data
//! models independent of any front end.
//!
//! ## Architecture
//!
//! - **note**: the `Note` record, tag and reminder helpers
//! - **storage**: key-value backends and the whole-collection `LocalStore`
//! - **crypto**: password-based encryption of note bodies
//! - **repository**: the in-memory collection with write-through persistence
//! - **editor**: the editing / preview / password-prompt state machine
//! - **export**: text and HTML export
//! - **notification**: transient status messages

pub mod crypto;
pub mod editor;
pub mod error;
pub mod export;
pub mod fs;
pub mod note;
pub mod notification;
pub mod repository;
pub mod storage;

pub use editor::{Editor, Phase};
pub use error::{JotterError, Result};
pub use note::{NewNote, Note};
pub use repository::NoteRepository;
pub use storage::{KeyValueStore, LocalStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
