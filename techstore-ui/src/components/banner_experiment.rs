//! A/B banner experiment stub

use crate::random::use_random_source;
use crate::styles::{inline_style, StyleRole};
use dioxus::prelude::*;
use techstore_common::{pick_variant, BannerVariant};

/// Banner showing one of three offers, picked per render unless `forced`.
///
/// `render_epoch` only exists to force a re-render (and a fresh pick).
#[component]
pub fn ExperimentStub(
    #[props(default)] forced: Option<BannerVariant>,
    #[props(default)] render_epoch: u64,
) -> Element {
    let _ = render_epoch;
    let random = use_random_source();
    let variant = forced.unwrap_or_else(|| random.with(|rng| pick_variant(rng)));
    let content = variant.content();
    let title = content.title;
    let subtitle = content.subtitle;

    rsx! {
        div {
            style: inline_style(StyleRole::Banner),
            "data-testid": "banner-experiment",
            "data-variant": "{variant}",
            h2 { "{title}" }
            p { "{subtitle}" }
        }
    }
}
