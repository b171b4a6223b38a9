use dioxus::prelude::*;

use crate::utils::{ SharedResolver, ThemeController, ThemeState };

/// Resolves and applies the starting theme on first render, provides the
/// `ThemeController` context and carries the `dark` class for its children.
#[component]
pub fn ThemeRoot(resolver: SharedResolver, children: Element) -> Element {
    let state = use_signal(|| ThemeState::new(resolver.start()));
    use_context_provider(|| ThemeController::new(state, resolver.clone()));

    rsx! {
        div {
            class: state().root_class(),
            {children}
        }
    }
}
