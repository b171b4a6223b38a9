//! Concrete theme adapters for the target being built.

use super::{ ColorSchemeProbe, PreferenceStore, RootMarker, ThemeResolver };

pub type PlatformResolver = ThemeResolver<
    Box<dyn PreferenceStore>,
    Box<dyn ColorSchemeProbe>,
    Box<dyn RootMarker>
>;

#[cfg(target_arch = "wasm32")]
pub fn resolver() -> PlatformResolver {
    use super::{ DocumentRoot, LocalStorage, MediaQueryProbe, MemoryStore };

    let store: Box<dyn PreferenceStore> = match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("{}, theme choice will not survive reload", e);
            Box::new(MemoryStore::new())
        }
    };
    ThemeResolver::new(store, Box::new(MediaQueryProbe), Box::new(DocumentRoot))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn resolver() -> PlatformResolver {
    use super::{ FileStore, FixedProbe, MemoryMarker, MemoryStore };

    let store: Box<dyn PreferenceStore> = match FileStore::locate() {
        Ok(file) => {
            log::debug!("Theme preferences at {}", file.path().display());
            Box::new(file)
        }
        Err(e) => {
            log::warn!("{}, theme choice will not survive restart", e);
            Box::new(MemoryStore::new())
        }
    };
    // Native webviews expose no colour-scheme hint to us; absent means light.
    ThemeResolver::new(store, Box::new(FixedProbe(false)), Box::new(MemoryMarker::default()))
}
