use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage read error: {0}")]
    Read(String),
    #[error("Storage write error: {0}")]
    Write(String),
    #[error("Corrupt preferences: {0}")]
    Corrupt(String),
}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        StorageError::Write(error.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Corrupt(error.to_string())
    }
}
