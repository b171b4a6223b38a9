use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::platform::{ self, PlatformResolver };
use super::theme_state::{ ThemeMode, ThemeState };

/// Resolver handle passed to the root as a prop. Equal only to itself.
#[derive(Clone)]
pub struct SharedResolver(Rc<RefCell<PlatformResolver>>);

impl SharedResolver {
    pub fn new(resolver: PlatformResolver) -> Self {
        Self(Rc::new(RefCell::new(resolver)))
    }

    pub fn platform() -> Self {
        Self::new(platform::resolver())
    }

    pub fn with<R>(&self, f: impl FnOnce(&PlatformResolver) -> R) -> R {
        f(&self.0.borrow())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut PlatformResolver) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    /// Resolves the starting mode and applies it before first paint.
    pub fn start(&self) -> ThemeMode {
        self.with_mut(|resolver| {
            let mode = resolver.resolve_initial();
            resolver.apply(mode);
            mode
        })
    }
}

impl PartialEq for SharedResolver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Context handle for the active theme. Toggling applies the new mode
/// through the resolver before the signal changes.
#[derive(Clone)]
pub struct ThemeController {
    state: Signal<ThemeState>,
    resolver: SharedResolver,
}

impl ThemeController {
    pub fn new(state: Signal<ThemeState>, resolver: SharedResolver) -> Self {
        Self { state, resolver }
    }

    pub fn mode(&self) -> ThemeMode {
        self.state.read().mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    pub fn toggle(&self) -> ThemeMode {
        let current = self.state.peek().mode;
        let next = self.resolver.with_mut(|resolver| {
            let next = resolver.toggle(current);
            resolver.apply(next);
            next
        });
        let mut state = self.state;
        state.set(ThemeState::new(next));
        log::info!("Theme toggled to {}", next);
        next
    }
}
