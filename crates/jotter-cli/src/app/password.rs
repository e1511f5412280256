//! Password handling for locked notes, with retry logic.

use std::io::IsTerminal;

use jotter_core::storage::KeyValueStore;
use jotter_core::{Editor, JotterError, NoteRepository, Phase};

use crate::constants::MAX_PASSWORD_ATTEMPTS;
use crate::errors::CliError;
use crate::helpers::{env_password, no_password_error, read_password};

/// Run `attempt` with a password until it stops failing on decryption.
///
/// A password from JOTTER_PASSWORD gets one try. Interactive prompts get
/// `MAX_PASSWORD_ATTEMPTS`.
pub fn with_password_retry<T>(
    mut attempt: impl FnMut(&str) -> jotter_core::Result<T>,
) -> anyhow::Result<T> {
    if let Some(password) = env_password() {
        return attempt(&password).map_err(|err| -> anyhow::Error {
            match err {
                JotterError::Decryption(_) => CliError::auth_failed("Incorrect password")
                    .with_hint("Check the value of JOTTER_PASSWORD.")
                    .into(),
                other => other.into(),
            }
        });
    }

    if !std::io::stdin().is_terminal() {
        return Err(no_password_error().into());
    }

    for remaining in (0..MAX_PASSWORD_ATTEMPTS).rev() {
        let password = read_password("Password")?;
        match attempt(&password) {
            Ok(value) => return Ok(value),
            Err(err) if err.is_decryption() => {
                if remaining > 0 {
                    eprintln!("Incorrect password, try again.");
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
    Err(CliError::auth_failed("Too many incorrect password attempts").into())
}

/// Answer the editor's pending password prompt, if any.
pub fn unlock_with_retry<S: KeyValueStore>(
    editor: &mut Editor,
    repo: &NoteRepository<S>,
) -> anyhow::Result<()> {
    if editor.phase() != Phase::AwaitingPassword {
        return Ok(());
    }
    match with_password_retry(|password| editor.submit_password(repo, password)) {
        Ok(_) => Ok(()),
        Err(err) => {
            if editor.phase() == Phase::AwaitingPassword {
                editor.cancel_prompt()?;
            }
            Err(err)
        }
    }
}
