use dioxus::prelude::*;

use crate::components::{ Icon, IconKind };
use crate::utils::ThemeController;

/// Sun in dark mode, moon in light mode.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_context::<ThemeController>();
    let is_dark = theme.is_dark();

    rsx! {
        button {
            class: "theme-toggle card",
            "aria-label": "Toggle theme",
            title: if is_dark { "Switch to light theme" } else { "Switch to dark theme" },
            onclick: move |_| {
                theme.toggle();
            },
            if is_dark {
                Icon { kind: IconKind::Sun }
            } else {
                Icon { kind: IconKind::Moon }
            }
        }
    }
}
