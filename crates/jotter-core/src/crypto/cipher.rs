//! Age passphrase encryption with a text-safe envelope.
//!
//! Ciphertext format: standard base64 of a binary age file whose single
//! recipient stanza is `scrypt`.

use std::io::{Read, Write};
use std::iter;

use age::secrecy::SecretString;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::crypto::password::validate_password;
use crate::error::{JotterError, Result};

/// Encrypt `plaintext` with `password`.
///
/// Each call draws a fresh salt and file key, so encrypting the same text
/// twice yields different ciphertexts.
///
/// # Errors
///
/// Returns `JotterError::Validation` for an empty password and
/// `JotterError::Crypto` if the age writer fails.
///
/// # Examples
///
/// ```
/// use jotter_core::crypto::{decrypt, encrypt};
///
/// let ciphertext = encrypt("Milk, eggs", "abc123").unwrap();
/// assert_eq!(decrypt(&ciphertext, "abc123").unwrap(), "Milk, eggs");
/// ```
pub fn encrypt(plaintext: &str, password: &str) -> Result<String> {
    validate_password(password)?;

    let encryptor =
        age::Encryptor::with_user_passphrase(SecretString::from(password.to_string()));

    let mut encrypted = Vec::new();
    let mut writer = encryptor
        .wrap_output(&mut encrypted)
        .map_err(|e| JotterError::Crypto(format!("Failed to create encryptor: {}", e)))?;

    writer
        .write_all(plaintext.as_bytes())
        .map_err(|e| JotterError::Crypto(format!("Encryption write failed: {}", e)))?;

    writer
        .finish()
        .map_err(|e| JotterError::Crypto(format!("Encryption finish failed: {}", e)))?;

    Ok(STANDARD.encode(encrypted))
}

/// Decrypt a ciphertext produced by [`encrypt`].
///
/// # Errors
///
/// Returns `JotterError::Decryption` if:
/// - The password is incorrect
/// - The ciphertext is not valid base64 or not an age file
/// - The decrypted bytes are not valid UTF-8
pub fn decrypt(ciphertext: &str, password: &str) -> Result<String> {
    if password.is_empty() {
        return Err(JotterError::Decryption("Password is empty".to_string()));
    }

    let encrypted = STANDARD
        .decode(ciphertext.trim())
        .map_err(|e| JotterError::Decryption(format!("Ciphertext is not valid base64: {}", e)))?;

    let decryptor = age::Decryptor::new(encrypted.as_slice())
        .map_err(|e| JotterError::Decryption(format!("Ciphertext is corrupt: {}", e)))?;

    let identity = age::scrypt::Identity::new(SecretString::from(password.to_string()));
    let mut reader = decryptor
        .decrypt(iter::once(&identity as &dyn age::Identity))
        .map_err(|e| match e {
            age::DecryptError::NoMatchingKeys
            | age::DecryptError::DecryptionFailed
            | age::DecryptError::KeyDecryptionFailed => {
                debug!("password rejected");
                JotterError::Decryption("Incorrect password".to_string())
            }
            _ => JotterError::Decryption(format!("Ciphertext is corrupt: {}", e)),
        })?;

    let mut decrypted = Vec::new();
    reader
        .read_to_end(&mut decrypted)
        .map_err(|e| JotterError::Decryption(format!("Failed to read decrypted data: {}", e)))?;

    String::from_utf8(decrypted)
        .map_err(|_| JotterError::Decryption("Decrypted data is not valid text".to_string()))
}
