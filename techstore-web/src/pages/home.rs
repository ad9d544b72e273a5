use crate::url_state::use_overrides;
use dioxus::prelude::*;
use techstore_ui::{use_device_class, use_storefront_config, Storefront};

/// Storefront page. Owns the viewport subscription for its lifetime.
///
/// URL overrides are decoded once per `state` value, not on every resize.
#[component]
pub fn Home(state: Option<String>) -> Element {
    let config = use_storefront_config();
    let device = use_device_class(config.mobile_breakpoint_px);
    let overrides = use_overrides(state);

    rsx! {
        Storefront { device: device(), overrides: overrides() }
    }
}
