use mosquito_core::{SettingsBackend, StoreError};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings backend writing one `<key>.json` file per record.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SettingsBackend for FileBackend {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::Backend(e.to_string()))?;
        fs::write(self.path_for(key), value).map_err(|e| StoreError::Backend(e.to_string()))
    }
}

/// `$MOSQUITO_CONFIG_DIR`, else `$HOME/.config/mosquito`, else the working
/// directory.
pub fn default_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("MOSQUITO_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".config").join("mosquito"),
        None => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosquito_core::{AudioSettings, SettingsStore, WaveType, SETTINGS_KEY};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mosquito-{}-{}", name, std::process::id()));
        _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn save_creates_directory_and_round_trips() {
        let dir = scratch_dir("save");
        let mut store = SettingsStore::new(FileBackend::new(dir.join("nested")));
        let settings = AudioSettings {
            min_frequency: 100,
            max_frequency: 1200,
            wave_type: WaveType::Triangle,
        };
        store.save(&settings).unwrap();

        assert!(dir.join("nested").join(format!("{SETTINGS_KEY}.json")).exists());
        assert_eq!(store.load(), Some(settings));
        _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = scratch_dir("missing");
        let store = SettingsStore::new(FileBackend::new(&dir));
        assert_eq!(store.load_or_default(), AudioSettings::default());
    }
}
