use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content parse error: {0}")]
    Parse(String),
    #[error("Duplicate {kind}: {value}")]
    Duplicate { kind: &'static str, value: String },
    #[error("Missing content field: {0}")]
    Missing(&'static str),
    #[error("Contact endpoint must be an https URL, got {0:?}")]
    InvalidEndpoint(String),
}

impl From<serde_json::Error> for ContentError {
    fn from(error: serde_json::Error) -> Self {
        ContentError::Parse(error.to_string())
    }
}
