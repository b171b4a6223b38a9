use dioxus::prelude::*;

use crate::components::Section;
use crate::configs::SiteContent;

#[component]
pub fn Skills() -> Element {
    let content = use_context::<SiteContent>();

    rsx! {
        Section {
            id: "skills".to_string(),
            title: "Skills".to_string(),
            div {
                class: "skill-tags",
                {content.skills.iter().map(|skill| rsx! {
                    span { key: "{skill}", class: "card skill-tag", "{skill}" }
                })}
            }
        }
    }
}
