use dioxus::prelude::*;

use crate::routes::Route;
use crate::views::{ Footer, Navbar };

#[component]
pub fn PageLayout() -> Element {
    rsx! {
        div {
            class: "gradient-surface",
            Navbar {}
            main { class: "page-main", Outlet::<Route> {} }
            Footer {}
        }
    }
}
