use std::cell::Cell;

use crate::error::StorageError;
use crate::utils::{ ColorSchemeProbe, PreferenceStore };

/// A store whose every call fails, like `localStorage` in a locked-down
/// browser profile.
#[derive(Default)]
pub struct BrokenStore {
    pub writes_attempted: Cell<usize>,
}

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("mock storage offline".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.writes_attempted.set(self.writes_attempted.get() + 1);
        Err(StorageError::Write("mock storage offline".to_string()))
    }
}

/// Probe that records how often it was asked.
pub struct CountingProbe {
    pub prefers_dark: bool,
    pub calls: Cell<usize>,
}

impl CountingProbe {
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark, calls: Cell::new(0) }
    }
}

impl ColorSchemeProbe for CountingProbe {
    fn prefers_dark(&self) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.prefers_dark
    }
}
