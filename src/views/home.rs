use dioxus::prelude::*;

use crate::views::{ Contact, Experience, Hero, Projects, Skills };

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        Projects {}
        Skills {}
        Experience {}
        Contact {}
    }
}
