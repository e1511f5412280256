//! Password prompts and note body input.

use std::io::{self, IsTerminal, Read};

use dialoguer::Password;

use crate::constants::env_vars;
use crate::errors::CliError;

/// Password from JOTTER_PASSWORD, if set and non-blank.
pub fn env_password() -> Option<String> {
    std::env::var(env_vars::PASSWORD)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

pub fn no_password_error() -> CliError {
    CliError::auth_failed("No password available for a locked note")
        .with_hint("Set JOTTER_PASSWORD or run in a terminal.")
}

/// Prompt once for an existing password.
pub fn read_password(prompt: &str) -> anyhow::Result<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Password for locking a note: the environment, else a confirmed prompt.
pub fn prompt_new_password() -> anyhow::Result<String> {
    if let Some(value) = env_password() {
        return Ok(value);
    }
    if !io::stdin().is_terminal() {
        return Err(CliError::invalid_input("A password is required to lock a note")
            .with_hint("Set JOTTER_PASSWORD or run in a terminal.")
            .into());
    }
    Password::new()
        .with_prompt("New password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Note body from `--content`, or from stdin when absent or `-`.
pub fn read_content(content: Option<String>) -> anyhow::Result<String> {
    match content {
        Some(value) if value != "-" => Ok(value),
        _ => read_stdin(),
    }
}

fn read_stdin() -> anyhow::Result<String> {
    if io::stdin().is_terminal() {
        return Err(CliError::invalid_input("No note content provided")
            .with_hint("Pass --content or pipe the body via stdin.")
            .into());
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer.trim_end().to_string())
}
