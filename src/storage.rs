//! Browser Storage Backend
//!
//! `window.localStorage` behind the core's `KeyValueStore` trait.

use studyflow_core::domain::{DomainError, DomainResult};
use studyflow_core::repository::KeyValueStore;
use wasm_bindgen::JsValue;

/// Looks up `localStorage` on every call; the handle itself is not kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

fn js_error(e: JsValue) -> DomainError {
    DomainError::Storage(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

impl BrowserStorage {
    fn storage(&self) -> DomainResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| DomainError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Storage("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }
}
