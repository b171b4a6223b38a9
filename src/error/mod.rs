mod content;
mod storage;
mod theme;

pub use content::ContentError;
pub use storage::StorageError;
pub use theme::ThemeError;
