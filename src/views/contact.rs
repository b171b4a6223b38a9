use dioxus::prelude::*;

use crate::components::Section;
use crate::configs::SiteContent;

/// Posts natively to the configured endpoint; the browser handles
/// required-field validation and the endpoint renders the response.
#[component]
pub fn Contact() -> Element {
    let content = use_context::<SiteContent>();

    rsx! {
        Section {
            id: "contact".to_string(),
            title: "Contact".to_string(),
            form {
                class: "contact-form",
                action: "{content.contact.endpoint}",
                method: "POST",
                input { class: "card field", name: "name", placeholder: "Your name", required: true }
                input { class: "card field", r#type: "email", name: "email", placeholder: "Email", required: true }
                textarea { class: "card field message", name: "message", placeholder: "Message", required: true }
                button { class: "card button-primary", r#type: "submit", "Send" }
            }
        }
    }
}
