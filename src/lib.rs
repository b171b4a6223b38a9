mod app;
mod views;
mod components;
mod utils;
mod routes;
mod configs;
#[cfg(test)]
mod tests;
mod error;

pub use crate::app::App;
pub use crate::components::ThemeRoot;
pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::SiteContent;
pub use crate::error::{ ContentError, StorageError, ThemeError };
