//! Key-value store trait definition.
//!
//! Backends only move opaque strings; `LocalStore` owns the serialization.

use crate::error::Result;

/// A persistent string key-value store.
///
/// Implementations must make `set` visible to a later `get` on a fresh
/// instance pointed at the same location.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if nothing has been stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `JotterError::Storage` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `JotterError::Storage` if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_boxed(_store: Box<dyn KeyValueStore>) {}
    }
}
