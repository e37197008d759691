//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for durable storage.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::DomainResult;

/// Whole-value string storage keyed by name
///
/// Mirrors the browser `Storage` API: values are read and written wholesale,
/// and both directions may fail when storage is disabled or full.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` when absent
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set(key, value)
    }
}
