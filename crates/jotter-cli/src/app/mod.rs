//! Application-level utilities for the Jotter CLI.
//!
//! This module provides:
//! - Path resolution for the config file and the note store
//! - Opening the configured store backend
//! - Password handling with retry logic

mod context;
mod password;
mod resolver;
mod store;

// Re-export public API
pub use context::AppContext;
pub use password::{unlock_with_retry, with_password_retry};
pub use resolver::{resolve_config_path, StoreLocation};
pub use store::{open_backend, Repository, SQLITE_FILE_NAME};
