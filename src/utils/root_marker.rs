/// Boolean styling hook on the page root; stylesheets key the dark
/// palette off it.
pub trait RootMarker {
    fn set_dark(&mut self, dark: bool);
    fn is_dark(&self) -> bool;
}

impl<M: RootMarker + ?Sized> RootMarker for Box<M> {
    fn set_dark(&mut self, dark: bool) {
        (**self).set_dark(dark)
    }

    fn is_dark(&self) -> bool {
        (**self).is_dark()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryMarker {
    dark: bool,
}

impl RootMarker for MemoryMarker {
    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }

    fn is_dark(&self) -> bool {
        self.dark
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::DocumentRoot;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RootMarker;

    const DARK_CLASS: &str = "dark";

    /// The `dark` class on `document.documentElement`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DocumentRoot;

    impl DocumentRoot {
        fn element() -> Option<web_sys::Element> {
            web_sys::window()?.document()?.document_element()
        }
    }

    impl RootMarker for DocumentRoot {
        fn set_dark(&mut self, dark: bool) {
            let Some(root) = Self::element() else {
                log::warn!("No document element to mark with theme");
                return;
            };
            let classes = root.class_list();
            let result = if dark { classes.add_1(DARK_CLASS) } else { classes.remove_1(DARK_CLASS) };
            if let Err(e) = result {
                log::warn!("Failed to update root theme class: {:?}", e);
            }
        }

        fn is_dark(&self) -> bool {
            Self::element().map(|root| root.class_list().contains(DARK_CLASS)).unwrap_or(false)
        }
    }
}
