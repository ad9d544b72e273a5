//! Page layout: header bar and centered content container

use crate::styles::{inline_style, StyleRole};
use dioxus::prelude::*;

/// Layout view (pure, props-based)
#[component]
pub fn Layout(
    /// Store name shown in the header
    title: String,
    /// Content under the title inside the header
    #[props(default)]
    header: Option<Element>,
    /// Page content
    children: Element,
) -> Element {
    rsx! {
        div {
            header { style: inline_style(StyleRole::Header),
                h1 { "{title}" }
                if let Some(extra) = header {
                    {extra}
                }
            }
            div { style: inline_style(StyleRole::Container), {children} }
        }
    }
}
