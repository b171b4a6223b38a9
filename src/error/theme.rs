use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Invalid theme mode: {0:?}")]
    InvalidMode(String),
}
