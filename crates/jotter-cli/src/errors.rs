//! User-facing errors and their exit codes.

use std::fmt;

use jotter_core::JotterError;

use crate::constants::exit_codes;

/// An error that carries its own exit code and an optional hint line.
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub hint: Option<String>,
    pub code: i32,
}

impl CliError {
    pub fn new(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            hint: None,
            code,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, exit_codes::NOT_FOUND)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(message, exit_codes::INVALID_INPUT)
    }

    pub fn auth_failed(message: impl Into<String>) -> Self {
        Self::new(message, exit_codes::AUTH_FAILED)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Exit code for a core error.
pub fn core_exit_code(err: &JotterError) -> i32 {
    match err {
        JotterError::NotFound(_) => exit_codes::NOT_FOUND,
        JotterError::Validation(_) | JotterError::InvalidState(_) => exit_codes::INVALID_INPUT,
        JotterError::Decryption(_) => exit_codes::AUTH_FAILED,
        JotterError::Storage(_) | JotterError::Json { .. } => exit_codes::STORAGE_FAILED,
        JotterError::Crypto(_) => 1,
    }
}

/// Exit code for any error bubbling out of a command.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.code;
    }
    if let Some(core) = err.downcast_ref::<JotterError>() {
        return core_exit_code(core);
    }
    1
}

/// Print `err` (and its hint) to stderr in the CLI's format.
pub fn report(err: &anyhow::Error) {
    eprintln!("Error: {}", err);
    if let Some(hint) = err.downcast_ref::<CliError>().and_then(|e| e.hint.as_deref()) {
        eprintln!("Hint: {}", hint);
    }
}
