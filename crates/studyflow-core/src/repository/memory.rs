//! In-memory storage backends.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::{DomainError, DomainResult};
use super::traits::KeyValueStore;

/// HashMap-backed store. Clones share the same map, so a test can keep a
/// handle while a controller owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value, bypassing the trait's error channel
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.insert(key, value);
        Ok(())
    }
}

/// Store that can be read but rejects every write, like a full quota or a
/// browser with storage disabled for writing.
#[derive(Debug, Clone, Default)]
pub struct ReadOnlyStore {
    inner: MemoryStore,
}

impl ReadOnlyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self { inner }
    }
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> DomainResult<()> {
        Err(DomainError::Storage(format!("quota exceeded writing `{key}`")))
    }
}
