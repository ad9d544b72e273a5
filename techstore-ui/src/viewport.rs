//! Viewport-driven device class
//!
//! [`use_device_class`] owns the only piece of shared state on the page. It
//! reads the width at mount, subscribes to `resize`, and drops the
//! subscription with the component.

use dioxus::prelude::*;
use techstore_common::{DeviceClass, ViewportState};

/// Width assumed when there is no browser window (SSR, native tests)
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1024.0;

fn current_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        crate::wasm_utils::inner_width().unwrap_or(FALLBACK_VIEWPORT_WIDTH)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        FALLBACK_VIEWPORT_WIDTH
    }
}

/// Live resize subscription. Dropping it detaches the listener.
#[cfg(target_arch = "wasm32")]
struct ResizeSubscription(#[allow(dead_code)] crate::wasm_utils::WindowEventListener);

#[cfg(not(target_arch = "wasm32"))]
struct ResizeSubscription;

impl ResizeSubscription {
    #[cfg(target_arch = "wasm32")]
    fn attach(mut state: ViewportState, mut device: Signal<DeviceClass>) -> Option<Self> {
        let window = web_sys::window()?;
        let listener =
            crate::wasm_utils::WindowEventListener::new(window, "resize", move |_event| {
                if let Some(next) = state.observe(current_width()) {
                    device.set(next);
                }
            });
        Some(Self(listener))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn attach(_state: ViewportState, _device: Signal<DeviceClass>) -> Option<Self> {
        Some(Self)
    }
}

/// Device class for the current viewport, updated on resize.
///
/// Only changes of class are written to the signal, so widths moving within
/// one class do not re-render readers.
pub fn use_device_class(breakpoint: f64) -> ReadSignal<DeviceClass> {
    let initial = use_hook(|| ViewportState::new(current_width(), breakpoint));
    let device = use_signal({
        let initial = initial.clone();
        move || initial.device()
    });
    // Held for the component's lifetime; dropped (and detached) on unmount.
    let _subscription = use_hook(move || {
        std::rc::Rc::new(ResizeSubscription::attach(initial, device))
    });
    device.into()
}
