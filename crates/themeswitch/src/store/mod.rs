//! Persisted preference storage.
//!
//! The controller keeps exactly one entry in a [`PreferenceStore`]: the
//! configured key (`"theme"` by default) mapped to a mode string. Two stores
//! ship with the crate:
//!
//! - [`MemoryStore`]: in-process map, shared between clones
//! - [`FileStore`]: a small JSON object on disk, one file per origin

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// Client-local durable key-value storage.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Creates or overwrites the value for `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
