use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::PreferenceStore;
use crate::error::StoreError;

/// In-memory store.
///
/// Clones share the same map, so a test can keep one handle and hand another
/// to the controller, then inspect what was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Returns a copy of the stored value for `key`.
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.value(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites_single_entry() {
        let mut store = MemoryStore::with_entry("theme", "dark");
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clones_share_entries() {
        let observer = MemoryStore::new();
        let mut writer = observer.clone();
        writer.set("theme", "auto").unwrap();
        assert_eq!(observer.value("theme").as_deref(), Some("auto"));
    }
}
