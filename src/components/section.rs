use dioxus::prelude::*;

#[component]
pub fn Section(id: String, title: String, children: Element) -> Element {
    rsx! {
        section {
            id: "{id}",
            class: "container-padded section",
            h2 { class: "section-title", "{title}" }
            div { class: "section-body", {children} }
        }
    }
}
