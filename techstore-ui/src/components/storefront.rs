//! Full storefront page body

use crate::components::{
    ExperimentStub, FeatureFlagStub, Layout, PersonalizationStub, ProductList,
};
use crate::context::{use_storefront_config, use_track_handler};
use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use techstore_common::{catalog, DeviceClass, StorefrontOverrides};
use tracing::debug;

/// Header, banner, personalized headline and product grid.
///
/// Config and tracker come from context. `overrides.device` wins over the
/// observed `device`.
///
/// Every render bumps a render epoch handed to the random stubs, so they draw
/// again whenever the page re-renders instead of keeping their first result.
#[component]
pub fn Storefront(
    device: DeviceClass,
    #[props(default)] overrides: StorefrontOverrides,
) -> Element {
    let config = use_storefront_config();
    let on_track = use_track_handler();
    let products = use_hook(catalog);
    let epoch = use_hook(|| Rc::new(Cell::new(0u64)));
    epoch.set(epoch.get().wrapping_add(1));
    let render_epoch = epoch.get();
    let device = overrides.device.unwrap_or(device);
    debug!("Rendering storefront for {} (render {})", device, render_epoch);

    rsx! {
        Layout {
            title: config.store_name.clone(),
            header: rsx! {
                FeatureFlagStub {
                    probability: config.flag_probability,
                    forced: overrides.flag,
                    render_epoch,
                }
            },
            ExperimentStub { forced: overrides.variant, render_epoch }
            PersonalizationStub { device }
            ProductList { products, on_track }
        }
    }
}
