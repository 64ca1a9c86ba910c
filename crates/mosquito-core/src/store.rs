//! Persistence of the settings record.
//!
//! A `SettingsBackend` is a plain string key-value slot (browser
//! `localStorage`, a file on disk, an in-memory map). `SettingsStore` layers
//! the JSON encoding and the fallback-to-defaults policy on top of it.

use crate::constants::SETTINGS_KEY;
use crate::settings::{AudioSettings, SettingsError};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Invalid(#[from] SettingsError),
    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("settings backend write failed: {0}")]
    Backend(String),
}

pub trait SettingsBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl SettingsBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct SettingsStore<B> {
    backend: B,
}

impl<B: SettingsBackend> SettingsStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the persisted record, or `None` when it is missing, unreadable
    /// or outside the accepted range.
    pub fn load(&self) -> Option<AudioSettings> {
        let raw = self.backend.read(SETTINGS_KEY)?;
        let settings = match serde_json::from_str::<AudioSettings>(&raw) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[settings] ignoring malformed record: {}", e);
                return None;
            }
        };
        if let Err(e) = settings.validate() {
            log::warn!("[settings] ignoring out-of-range record: {}", e);
            return None;
        }
        Some(settings)
    }

    pub fn load_or_default(&self) -> AudioSettings {
        self.load().unwrap_or_default()
    }

    pub fn save(&mut self, settings: &AudioSettings) -> Result<(), StoreError> {
        settings.validate()?;
        let json = serde_json::to_string(settings)?;
        self.backend.write(SETTINGS_KEY, &json)?;
        log::info!(
            "[settings] saved {}Hz-{}Hz {}",
            settings.min_frequency,
            settings.max_frequency,
            settings.wave_type
        );
        Ok(())
    }

    /// Defaults for the edit surface. Nothing is written until `save`.
    pub fn reset(&self) -> AudioSettings {
        AudioSettings::default()
    }
}
