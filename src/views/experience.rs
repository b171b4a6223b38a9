use dioxus::prelude::*;

use crate::components::Section;
use crate::configs::SiteContent;

#[component]
pub fn Experience() -> Element {
    let content = use_context::<SiteContent>();

    rsx! {
        Section {
            id: "experience".to_string(),
            title: "Experience".to_string(),
            div {
                class: "timeline",
                {content.experience.iter().map(|item| rsx! {
                    div {
                        key: "{item.key()}",
                        class: "card timeline-item",
                        div {
                            class: "timeline-head",
                            p { class: "strong", "{item.role} · {item.org}" }
                            p { class: "muted small", "{item.period}" }
                        }
                        p { class: "muted small", "{item.description}" }
                    }
                })}
            }
        }
    }
}
