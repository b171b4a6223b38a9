use super::environment::ColorSchemeProbe;
use super::root_marker::RootMarker;
use super::storage::PreferenceStore;
use super::theme_state::ThemeMode;

/// Storage key holding the explicit theme choice.
pub const THEME_KEY: &str = "theme";

/// Keeps the active theme, the root styling marker and the persisted
/// choice in agreement.
///
/// Nothing here fails outward: an unreadable store counts as "no prior
/// choice" and a failed write is logged.
pub struct ThemeResolver<S, P, M> {
    store: S,
    probe: P,
    marker: M,
}

impl<S, P, M> ThemeResolver<S, P, M>
where
    S: PreferenceStore,
    P: ColorSchemeProbe,
    M: RootMarker,
{
    pub fn new(store: S, probe: P, marker: M) -> Self {
        Self { store, probe, marker }
    }

    /// Stored choice if present and valid, else the environment hint.
    pub fn resolve_initial(&self) -> ThemeMode {
        if let Some(mode) = self.stored_mode() {
            log::debug!("Theme {} restored from storage", mode);
            return mode;
        }
        let mode = ThemeMode::from_prefers_dark(self.probe.prefers_dark());
        log::debug!("Theme {} taken from colour-scheme preference", mode);
        mode
    }

    fn stored_mode(&self) -> Option<ThemeMode> {
        let raw = match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Ignoring stored theme: {}", e);
                return None;
            }
        };
        match raw.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                log::warn!("Ignoring stored theme: {}", e);
                None
            }
        }
    }

    /// Marks the root for `mode` and persists it. Idempotent.
    pub fn apply(&mut self, mode: ThemeMode) {
        self.marker.set_dark(mode.is_dark());
        if let Err(e) = self.store.set(THEME_KEY, mode.as_str()) {
            log::warn!("Theme {} not persisted: {}", mode, e);
        }
        log::info!("Theme applied: {}", mode);
    }

    pub fn toggle(&self, current: ThemeMode) -> ThemeMode {
        current.toggled()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn marker(&self) -> &M {
        &self.marker
    }
}
