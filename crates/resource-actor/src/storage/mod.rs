//! # Key-Value Storage
//!
//! The actor persists its collection under a single key of a string-valued store, the way a
//! browser page uses local storage: the whole document is read once on start and overwritten
//! after every mutation.
//!
//! - [`FileStorage`] - one JSON file per key inside a data directory
//! - [`MemoryStorage`] - shared in-process map, handy for tests and throwaway sessions

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// A string-valued key-value store.
pub trait KeyValueStorage: Send + 'static {
    /// Reads the raw value stored under `key`, or `None` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the value stored under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Rejects keys that could not be used as a single file name.
///
/// Every backend applies this on each call; configuration can apply it up front.
pub fn check_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}
