//! Reusable button component

use crate::styles::{inline_style, ButtonVariant, StyleRole};
use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] style: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            style: style.as_deref(),
            r#type: "button",
            disabled,
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button styled from the style table
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        ChromelessButton {
            disabled,
            style: Some(inline_style(StyleRole::Button(variant))),
            aria_label,
            onclick,
            {children}
        }
    }
}
