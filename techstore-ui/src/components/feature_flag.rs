//! Feature flag stub

use crate::random::use_random_source;
use dioxus::prelude::*;
use techstore_common::{is_feature_enabled, FeatureFlagState};

/// Renders the feature notice or nothing.
///
/// Draws a new decision on every render unless `forced` is set. Parents pass
/// a changing `render_epoch` to make it render (and draw) again.
#[component]
pub fn FeatureFlagStub(
    #[props(default = 0.5)] probability: f64,
    #[props(default)] forced: Option<FeatureFlagState>,
    #[props(default)] render_epoch: u64,
) -> Element {
    let random = use_random_source();
    let _ = render_epoch;
    let state = forced.unwrap_or_else(|| random.with(|rng| is_feature_enabled(rng, probability)));

    match state.notice() {
        Some(notice) => rsx! {
            div { "data-testid": "feature-flag", "{notice}" }
        },
        None => rsx! {},
    }
}
