//! Storage Slot
//!
//! One durable key holding one JSON document, with a best-effort fallback:
//! when a write fails the serialized document is kept in process memory for
//! the rest of the session.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::DomainResult;
use super::traits::KeyValueStore;

pub struct StorageSlot<S: KeyValueStore> {
    backend: S,
    key: String,
    /// Latest document that could not be written to `backend`
    fallback: Option<String>,
}

impl<S: KeyValueStore> StorageSlot<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            fallback: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the last save only reached process memory
    pub fn is_degraded(&self) -> bool {
        self.fallback.is_some()
    }

    /// Load the document, or `T::default()` when it is absent or unreadable.
    pub fn load<T: DeserializeOwned + Default>(&self) -> T {
        let raw = match &self.fallback {
            Some(blob) => Some(blob.clone()),
            None => match self.backend.get(&self.key) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("[STORE] Reading `{}` failed: {}", self.key, e);
                    None
                }
            },
        };

        let Some(raw) = raw else {
            debug!("[STORE] `{}` is empty", self.key);
            return T::default();
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("[STORE] Discarding unreadable `{}`: {}", self.key, e);
                T::default()
            }
        }
    }

    /// Serialize and write the whole document.
    ///
    /// Only a serialization failure is returned; a rejected write degrades to
    /// the in-memory fallback.
    pub fn save<T: Serialize>(&mut self, value: &T) -> DomainResult<()> {
        let json = serde_json::to_string(value)?;
        match self.backend.set(&self.key, &json) {
            Ok(()) => {
                self.fallback = None;
            }
            Err(e) => {
                warn!("[STORE] Writing `{}` failed, keeping it in memory: {}", self.key, e);
                self.fallback = Some(json);
            }
        }
        Ok(())
    }
}
