//! techstore-ui - Storefront view components
//!
//! Pure view components plus the small amount of browser plumbing they need:
//! an injected random source, the viewport hook and context services.

pub mod components;
pub mod context;
pub mod random;
pub mod styles;
pub mod viewport;
#[cfg(target_arch = "wasm32")]
pub mod wasm_utils;

pub use components::*;
pub use context::{use_storefront_config, use_track_handler, use_tracker, Tracker};
pub use random::{use_random_source, RandomSource};
pub use styles::{ButtonVariant, StyleRole};
pub use viewport::{use_device_class, FALLBACK_VIEWPORT_WIDTH};
