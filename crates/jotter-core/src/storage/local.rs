//! Whole-collection persistence under a single key.
//!
//! `load` and `save` never fail: a missing or unreadable collection loads as
//! empty, and a failed write leaves the in-memory collection as the only
//! copy. Both are logged. `try_load`/`try_save` expose the failures.

use tracing::{debug, error, warn};

use crate::error::{JotterError, Result};
use crate::note::Note;
use crate::storage::traits::KeyValueStore;

/// Key the serialized note array is stored under.
pub const NOTES_KEY: &str = "notes";

/// Adapter between the note collection and a key-value backend.
#[derive(Debug)]
pub struct LocalStore<S> {
    backend: S,
}

impl<S: KeyValueStore> LocalStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Load the stored collection, falling back to empty on any failure.
    pub fn load(&self) -> Vec<Note> {
        match self.try_load() {
            Ok(notes) => notes,
            Err(err) => {
                warn!(error = %err, "failed to load notes; starting with an empty collection");
                Vec::new()
            }
        }
    }

    /// Load the stored collection, reporting failures.
    ///
    /// A missing key (or a stored `null`) is an empty collection, not an error.
    ///
    /// # Errors
    ///
    /// Returns `JotterError::Storage` if the backend read fails or the stored
    /// value is not a JSON array of notes.
    pub fn try_load(&self) -> Result<Vec<Note>> {
        let Some(raw) = self.backend.get(NOTES_KEY)? else {
            debug!("no stored notes");
            return Ok(Vec::new());
        };
        let notes: Option<Vec<Note>> = serde_json::from_str(&raw)
            .map_err(|e| JotterError::Storage(format!("Stored notes are malformed: {}", e)))?;
        let notes = notes.unwrap_or_default();
        debug!(count = notes.len(), "loaded notes");
        Ok(notes)
    }

    /// Persist the full collection; failures are logged and swallowed.
    pub fn save(&mut self, notes: &[Note]) {
        if let Err(err) = self.try_save(notes) {
            error!(error = %err, "failed to save notes; changes are kept in memory only");
        }
    }

    /// Persist the full collection, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns `JotterError::Storage` if serialization or the backend write fails.
    pub fn try_save(&mut self, notes: &[Note]) -> Result<()> {
        let raw = serde_json::to_string(notes)
            .map_err(|e| JotterError::Storage(format!("Failed to serialize notes: {}", e)))?;
        self.backend.set(NOTES_KEY, &raw)?;
        debug!(count = notes.len(), "saved notes");
        Ok(())
    }
}
