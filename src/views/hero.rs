use dioxus::prelude::*;

use crate::components::{ Icon, IconKind };
use crate::configs::SiteContent;

/// Up to two uppercase initials from the owner's name, for the avatar.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn Hero() -> Element {
    let content = use_context::<SiteContent>();
    let avatar = initials(&content.owner);

    rsx! {
        section {
            id: "home",
            class: "container-padded hero",
            div {
                class: "hero-grid",
                div {
                    h1 { class: "section-title fade-up", "{content.headline}" }
                    p { class: "hero-intro fade-up delay-1", "{content.intro}" }
                    div {
                        class: "hero-actions fade-up delay-2",
                        a { class: "card button-primary", href: "#projects", "View projects" }
                        a { class: "card button", href: "#contact", "Contact" }
                    }
                    div {
                        class: "hero-socials fade-in delay-3",
                        {content.socials.iter().map(|link| {
                            let target = if link.external { "_blank" } else { "_self" };
                            rsx! {
                                a {
                                    key: "{link.label}",
                                    href: "{link.href}",
                                    target: "{target}",
                                    rel: if link.external { "noreferrer" } else { "" },
                                    "aria-label": "{link.label}",
                                    if let Some(kind) = IconKind::for_label(&link.label) {
                                        Icon { kind: kind, size: 24 }
                                    } else {
                                        "{link.label}"
                                    }
                                }
                            }
                        })}
                    }
                }
                div {
                    class: "hero-portrait-wrap fade-scale",
                    div {
                        class: "card hero-portrait animate-float",
                        role: "img",
                        "aria-label": "{content.owner} portrait",
                        span { class: "hero-initials", "{avatar}" }
                        div { class: "hero-sheen" }
                    }
                }
            }
        }
    }
}
