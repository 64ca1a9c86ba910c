use mosquito_core::{SettingsBackend, StoreError};
use web_sys as web;

/// `window.localStorage` as a settings backend. Reads fail soft (private mode,
/// disabled storage) and behave like a missing record.
pub struct LocalStorageBackend {
    storage: Option<web::Storage>,
}

impl LocalStorageBackend {
    pub fn new() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[settings] localStorage unavailable; using defaults");
        }
        Self { storage }
    }
}

impl SettingsBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| StoreError::Backend("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }
}
