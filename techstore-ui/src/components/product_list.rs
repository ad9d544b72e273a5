//! Product grid and cards - pure views with a tracking callback

use crate::components::tracking_button::TrackingButton;
use crate::styles::{inline_style, StyleRole};
use dioxus::prelude::*;
use techstore_common::{Product, TrackedEvent};

/// Responsive grid of product cards, in the order given
#[component]
pub fn ProductList(products: Vec<Product>, on_track: EventHandler<TrackedEvent>) -> Element {
    rsx! {
        div { style: inline_style(StyleRole::ProductGrid), "data-testid": "product-grid",
            for product in products {
                ProductCard { key: "{product.id}", product, on_track }
            }
        }
    }
}

#[component]
pub fn ProductCard(product: Product, on_track: EventHandler<TrackedEvent>) -> Element {
    let name = product.name.clone();
    let price = product.price_label();
    rsx! {
        div { style: inline_style(StyleRole::ProductCard), "data-testid": "product-card",
            h3 { "{name}" }
            p { "{price}" }
            TrackingButton { product, on_track }
        }
    }
}
