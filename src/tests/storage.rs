use std::fs;

use tempfile::TempDir;

use super::common::setup;
use crate::error::StorageError;
use crate::utils::{
    FileStore,
    FixedProbe,
    MemoryMarker,
    MemoryStore,
    PreferenceStore,
    ThemeMode,
    ThemeResolver,
    THEME_KEY,
};

#[test]
fn test_memory_store_overwrites() {
    let mut store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get(THEME_KEY), Ok(None));

    store.set(THEME_KEY, "dark").unwrap();
    store.set(THEME_KEY, "light").unwrap();
    assert_eq!(store.get(THEME_KEY), Ok(Some("light".to_string())));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_file_store_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("preferences.json"));
    assert_eq!(store.get(THEME_KEY), Ok(None));
}

#[test]
fn test_file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("preferences.json");

    let mut writer = FileStore::new(&path);
    writer.set(THEME_KEY, "dark").unwrap();
    writer.set("other", "kept").unwrap();

    let reader = FileStore::new(&path);
    assert_eq!(reader.get(THEME_KEY), Ok(Some("dark".to_string())));
    assert_eq!(reader.get("other"), Ok(Some("kept".to_string())));
    assert_eq!(reader.path(), path.as_path());
}

#[test]
fn test_file_store_reports_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, "{ not json").unwrap();

    let store = FileStore::new(&path);
    assert!(matches!(store.get(THEME_KEY), Err(StorageError::Corrupt(_))));
}

#[test]
fn test_file_store_replaces_corrupt_file_on_write() {
    setup();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let mut store = FileStore::new(&path);
    store.set(THEME_KEY, "light").unwrap();
    assert_eq!(store.get(THEME_KEY), Ok(Some("light".to_string())));
}

#[test]
fn test_file_store_write_keeps_unreadable_file() {
    setup();
    let dir = TempDir::new().unwrap();
    // A directory where the file should be reads as an I/O error, not as
    // corrupt JSON.
    let path = dir.path().join("preferences.json");
    fs::create_dir(&path).unwrap();

    let mut store = FileStore::new(&path);
    assert!(matches!(store.get(THEME_KEY), Err(StorageError::Read(_))));
    assert!(matches!(store.set(THEME_KEY, "dark"), Err(StorageError::Read(_))));
    assert!(path.is_dir());
}

#[test]
fn test_file_store_blank_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, "\n").unwrap();

    assert_eq!(FileStore::new(&path).get(THEME_KEY), Ok(None));
}

#[test]
fn test_corrupt_file_resolves_from_environment() {
    setup();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, "garbage").unwrap();

    let r = ThemeResolver::new(FileStore::new(&path), FixedProbe(true), MemoryMarker::default());
    assert_eq!(r.resolve_initial(), ThemeMode::Dark);
}

#[test]
fn test_file_backed_choice_survives_restart() {
    setup();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");

    let mut first = ThemeResolver::new(FileStore::new(&path), FixedProbe(true), MemoryMarker::default());
    let mode = first.resolve_initial();
    first.apply(first.toggle(mode));

    let restarted = ThemeResolver::new(FileStore::new(&path), FixedProbe(true), MemoryMarker::default());
    assert_eq!(restarted.resolve_initial(), ThemeMode::Light);
}

#[test]
fn test_boxed_store_delegates() {
    let mut store: Box<dyn PreferenceStore> = Box::new(MemoryStore::new());
    store.set(THEME_KEY, "dark").unwrap();
    assert_eq!(store.get(THEME_KEY), Ok(Some("dark".to_string())));
}

#[test]
fn test_storage_error_messages() {
    assert_eq!(
        StorageError::Unavailable("no window".to_string()).to_string(),
        "Storage unavailable: no window"
    );
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    assert_eq!(StorageError::from(io), StorageError::Write("read-only".to_string()));
}
