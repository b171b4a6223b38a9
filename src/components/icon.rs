use dioxus::prelude::*;

/// Stroke icons drawn inline so the page needs no icon font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Sun,
    Moon,
    Github,
    Linkedin,
    Mail,
    ExternalLink,
}

impl IconKind {
    /// Icon for a social link label, matched case-insensitively.
    pub fn for_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "github" => Some(Self::Github),
            "linkedin" => Some(Self::Linkedin),
            "email" | "mail" => Some(Self::Mail),
            _ => None,
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[props(default = 18)] size: u32) -> Element {
    let body = match kind {
        IconKind::Sun => rsx! {
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 3v1M12 20v1M3 12h1M20 12h1M18.364 5.636l-.707.707M6.343 17.657l-.707.707M5.636 5.636l.707.707M17.657 17.657l.707.707" }
        },
        IconKind::Moon => rsx! {
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        },
        IconKind::Github => rsx! {
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        },
        IconKind::Linkedin => rsx! {
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { x: "2", y: "9", width: "4", height: "12" }
            circle { cx: "4", cy: "4", r: "2" }
        },
        IconKind::Mail => rsx! {
            rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        },
        IconKind::ExternalLink => rsx! {
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        },
    };

    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            "viewBox": "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            "aria-hidden": "true",
            {body}
        }
    }
}
