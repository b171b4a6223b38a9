mod controller;
mod environment;
mod resolver;
mod root_marker;
mod storage;
mod theme_state;

pub mod platform;

pub use controller::{ SharedResolver, ThemeController };
pub use environment::{ ColorSchemeProbe, FixedProbe };
pub use resolver::{ ThemeResolver, THEME_KEY };
pub use root_marker::{ MemoryMarker, RootMarker };
pub use storage::{ FileStore, MemoryStore, PreferenceStore };
pub use theme_state::{ ThemeMode, ThemeState };

#[cfg(target_arch = "wasm32")]
pub use environment::MediaQueryProbe;
#[cfg(target_arch = "wasm32")]
pub use root_marker::DocumentRoot;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
