//! `localStorage` backing for persisted preferences.
use fanpage_core::KeyValueStore;
use web_sys::Storage;

use crate::dom;

#[derive(Debug, thiserror::Error)]
pub enum WebStoreError {
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Browser `localStorage`. When storage is blocked (private mode, sandboxed
/// iframes) reads behave like an empty store and writes report
/// [`WebStoreError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    #[must_use]
    pub fn local() -> Self {
        let storage = dom::window().and_then(|win| match win.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage blocked: {}", dom::js_error_message(&err));
                None
            }
        });
        Self { storage }
    }
}

impl KeyValueStore for BrowserStore {
    type Error = WebStoreError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        storage
            .get_item(key)
            .map_err(|err| WebStoreError::Storage(dom::js_error_message(&err)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = self.storage.as_ref().ok_or(WebStoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| WebStoreError::Storage(dom::js_error_message(&err)))
    }
}
