use dioxus::prelude::*;
use crate::views::{ Home, NotFound, PageLayout };

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[layout(PageLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound {
        segments: Vec<String>,
    },
}
