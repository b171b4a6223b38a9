use chrono::Datelike;
use dioxus::prelude::*;

use crate::configs::SiteContent;

pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("© {} {}. Built with Rust + Dioxus.", year, owner)
}

#[component]
pub fn Footer() -> Element {
    let content = use_context::<SiteContent>();
    let line = copyright_line(chrono::Local::now().year(), &content.owner);

    rsx! {
        footer {
            class: "container-padded page-footer",
            p { class: "small", "{line}" }
        }
    }
}
