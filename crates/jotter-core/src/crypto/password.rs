//! Password handling.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::{JotterError, Result};

/// Reject passwords that cannot key the cipher.
///
/// Only emptiness is checked; short passwords such as `abc123` are accepted.
///
/// # Examples
///
/// ```
/// use jotter_core::crypto::validate_password;
///
/// assert!(validate_password("abc123").is_ok());
/// assert!(validate_password("").is_err());
/// ```
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(JotterError::Validation(
            "Password cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// A password held by the editor while a locked note is open.
///
/// The buffer is zeroized on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}
