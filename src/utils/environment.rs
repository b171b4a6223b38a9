/// Read-only "does the OS prefer a dark colour scheme" signal.
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

impl<P: ColorSchemeProbe + ?Sized> ColorSchemeProbe for Box<P> {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}

/// Fixed answer, used where the platform exposes no colour-scheme hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedProbe(pub bool);

impl ColorSchemeProbe for FixedProbe {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::MediaQueryProbe;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::ColorSchemeProbe;

    const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

    #[derive(Debug, Clone, Copy, Default)]
    pub struct MediaQueryProbe;

    impl ColorSchemeProbe for MediaQueryProbe {
        fn prefers_dark(&self) -> bool {
            let Some(window) = web_sys::window() else {
                return false;
            };
            match window.match_media(DARK_QUERY) {
                Ok(Some(list)) => list.matches(),
                Ok(None) => false,
                Err(e) => {
                    log::warn!("matchMedia failed: {:?}", e);
                    false
                }
            }
        }
    }
}
