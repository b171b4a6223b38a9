use dioxus::prelude::*;

use crate::components::ThemeToggle;
use crate::configs::SiteContent;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// In-page anchors, in page order.
pub const SECTION_LINKS: [(&str, &str); 4] = [
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#experience", "Experience"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar() -> Element {
    let content = use_context::<SiteContent>();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        header {
            id: "navbar",
            div {
                class: "container-padded navbar-inner",
                div {
                    class: "card navbar-bar",
                    a { class: "brand", href: "#home", "{content.owner}" }
                    div {
                        class: "navbar-actions",
                        nav {
                            class: "navbar-links",
                            {SECTION_LINKS.iter().map(|(href, label)| rsx! {
                                a { key: "{href}", href: "{href}", "{label}" }
                            })}
                        }
                        ThemeToggle {}
                    }
                }
            }
        }
    }
}
