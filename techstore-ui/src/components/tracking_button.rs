//! Buy button that reports an interaction

use crate::components::button::Button;
use crate::styles::ButtonVariant;
use dioxus::prelude::*;
use techstore_common::{Product, TrackedEvent};

/// "Buy Now" control. Each activation calls `on_track` once with the product.
#[component]
pub fn TrackingButton(
    product: Product,
    on_track: EventHandler<TrackedEvent>,
    #[props(default)] variant: ButtonVariant,
) -> Element {
    let aria_label = format!("Buy {}", product.name);
    rsx! {
        Button {
            variant,
            aria_label: Some(aria_label),
            onclick: move |_| on_track.call(TrackedEvent::for_product(&product)),
            "Buy Now"
        }
    }
}
