use dioxus::prelude::*;

use crate::components::{ Icon, IconKind, Section };
use crate::configs::SiteContent;

#[component]
pub fn Projects() -> Element {
    let content = use_context::<SiteContent>();

    rsx! {
        Section {
            id: "projects".to_string(),
            title: "Projects".to_string(),
            div {
                class: "project-grid",
                {content.projects.iter().map(|project| rsx! {
                    a {
                        key: "{project.title}",
                        class: "card project-card",
                        href: "{project.link}",
                        h3 {
                            class: "project-title",
                            "{project.title}"
                            Icon { kind: IconKind::ExternalLink, size: 16 }
                        }
                        p { class: "muted small", "{project.description}" }
                    }
                })}
            }
        }
    }
}
