//! techstore-web - TechStore storefront demo for the browser

pub mod pages;
pub mod url_state;

use dioxus::prelude::*;
use pages::Home;
use techstore_common::StorefrontConfig;
use techstore_ui::{RandomSource, Tracker};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:state")]
    Home { state: Option<String> },
}

/// Root component: provides the config, random source and tracker, then routes
#[component]
pub fn App() -> Element {
    use_context_provider(StorefrontConfig::default);
    use_context_provider(RandomSource::from_entropy);
    use_context_provider(Tracker::log);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
