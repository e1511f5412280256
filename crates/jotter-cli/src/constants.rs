//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Note, config, or store not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password, too many attempts).
    pub const AUTH_FAILED: i32 = 5;

    /// The store could not be read or written.
    pub const STORAGE_FAILED: i32 = 6;
}

/// Environment variables read by the CLI.
pub mod env_vars {
    pub const CONFIG: &str = "JOTTER_CONFIG";
    pub const PASSWORD: &str = "JOTTER_PASSWORD";
    pub const LOG: &str = "JOTTER_LOG";
}

/// Wrong-password retries before giving up on a locked note.
pub const MAX_PASSWORD_ATTEMPTS: usize = 3;

/// Characters of body shown in list output.
pub const EXCERPT_CHARS: usize = 60;
