use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{ Path, PathBuf };

use directories::ProjectDirs;

use crate::error::StorageError;

const PREFS_FILE: &str = "preferences.json";
const PREFS_PATH_ENV: &str = "PORTFOLIO_PREFS_PATH";

/// Durable string key-value store used for the theme preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object on disk, for the desktop and
/// mobile builds where there is no `localStorage`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$PORTFOLIO_PREFS_PATH` if set, else `preferences.json` in the
    /// platform config directory.
    pub fn locate() -> Result<Self, StorageError> {
        if let Ok(path) = std::env::var(PREFS_PATH_ENV) {
            log::debug!("Using preferences file from {}: {}", PREFS_PATH_ENV, path);
            return Ok(Self::new(path));
        }

        let dirs = ProjectDirs::from("dev", "portfolio", "portfolio").ok_or_else(|| {
            StorageError::Unavailable("no home directory for preferences".to_string())
        })?;
        Ok(Self::new(dirs.config_dir().join(PREFS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StorageError::Read(e.to_string())),
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // Only a corrupt file is replaced; anything else would lose the
        // other keys, so it is propagated.
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(StorageError::Corrupt(e)) => {
                log::warn!("Replacing corrupt preferences at {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&entries)
            .map_err(|e| StorageError::Write(e.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::PreferenceStore;
    use crate::error::StorageError;

    /// `window.localStorage`.
    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    impl LocalStorage {
        pub fn open() -> Result<Self, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
            let storage = window
                .local_storage()
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
            Ok(Self { storage })
        }
    }

    impl PreferenceStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage.get_item(key).map_err(|e| StorageError::Read(format!("{:?}", e)))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage.set_item(key, value).map_err(|e| StorageError::Write(format!("{:?}", e)))
        }
    }
}
