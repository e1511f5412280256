//! Error types for Jotter core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Jotter operations.
pub type Result<T> = std::result::Result<T, JotterError>;

/// Core error type for Jotter operations.
#[derive(Debug, Error)]
pub enum JotterError {
    /// Empty title/content, malformed reminder, missing password
    #[error("Validation error: {0}")]
    Validation(String),

    /// Wrong password or corrupt ciphertext
    #[error("Decryption failed: {0}")]
    Decryption(String),

    /// The cipher primitive failed while encrypting
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Key-value store read/write failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Note not found by ID
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Editor intent not accepted in the current state
    #[error("Invalid editor state: {0}")]
    InvalidState(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl JotterError {
    /// True when the error means the supplied password did not open the note.
    pub fn is_decryption(&self) -> bool {
        matches!(self, JotterError::Decryption(_))
    }
}

impl From<std::io::Error> for JotterError {
    fn from(err: std::io::Error) -> Self {
        JotterError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for JotterError {
    fn from(err: rusqlite::Error) -> Self {
        JotterError::Storage(format!("SQLite: {}", err))
    }
}
