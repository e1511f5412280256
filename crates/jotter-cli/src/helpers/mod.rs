//! Input helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Password prompting (`input`)
//! - Reading note bodies from flags or stdin (`input`)

mod input;

// Re-export public API
pub use input::{
    env_password, no_password_error, prompt_new_password, read_content, read_password,
};
