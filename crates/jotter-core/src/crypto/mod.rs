//! Password-based encryption of note bodies.
//!
//! Uses the passphrase mode of **Age** (https://age-encryption.org/): the
//! password is stretched with scrypt, and the salt and work factor travel in
//! the ciphertext header, so the password is the only thing needed to decrypt.
//!
//! We defend against:
//! - Reading a locked note's body from the store without the password
//!
//! We do NOT defend against:
//! - Weak passwords (no minimum length is enforced)
//! - Access to an unlocked editor session / memory

pub mod cipher;
pub mod password;

pub use cipher::{decrypt, encrypt};
pub use password::{validate_password, Password};
