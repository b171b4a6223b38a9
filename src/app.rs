use dioxus::prelude::*;

use crate::components::ThemeRoot;
use crate::configs::SiteContent;
use crate::routes::Route;
use crate::utils::SharedResolver;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

#[component]
pub fn App() -> Element {
    let resolver = use_hook(SharedResolver::platform);
    use_context_provider(SiteContent::load);

    rsx! {
        ThemeRoot {
            resolver: resolver,
            document::Link { rel: "icon", href: FAVICON }
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            Router::<Route> {}
        }
    }
}
