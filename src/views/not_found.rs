use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::warn!("No page at /{}", path);

    rsx! {
        section {
            class: "container-padded section",
            h2 { class: "section-title", "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { class: "card button", to: Route::Home {}, "Back home" }
        }
    }
}
