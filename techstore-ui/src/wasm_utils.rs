//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a `Closure` must keep that closure alive
//! while attached. Instead of `closure.forget()`, which leaks the closure and
//! leaves the listener attached forever, the closure is stored in a struct
//! whose `Drop` removes the listener:
//!
//! ```ignore
//! // Listener is attached when WindowEventListener is created
//! let listener = WindowEventListener::new(window, "resize", callback);
//!
//! // Listener is removed when `listener` is dropped
//! drop(listener);
//! ```
//!
//! Held in a component hook, the listener lives exactly as long as the
//! component is mounted.

use tracing::debug;
use wasm_bindgen::prelude::*;

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowEventListener {
    /// Attaches a passive listener to the window.
    pub fn new(
        window: web_sys::Window,
        event_name: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(web_sys::Event)> = Closure::wrap(Box::new(callback));

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_name,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok();
        debug!("Attached window '{}' listener", event_name);

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
        debug!("Detached window '{}' listener", self.event_name);
    }
}

/// Current `window.innerWidth`, if there is a window
pub fn inner_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}
