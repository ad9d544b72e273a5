//! techstore-common - Platform-independent storefront logic
//!
//! Catalog data, device classification, the flag/experiment stubs and
//! event tracking. Nothing in here touches the DOM, so it is shared by the
//! UI components and exercised directly in unit tests.

mod catalog;
mod config;
mod device;
mod error;
mod experiment;
mod feature_flag;
mod overrides;
mod personalization;
mod tracking;

pub use catalog::{catalog, Product};
pub use config::StorefrontConfig;
pub use device::{DeviceClass, ViewportState, MOBILE_BREAKPOINT_PX};
pub use error::ParseError;
pub use experiment::{pick_variant, BannerContent, BannerVariant};
pub use feature_flag::{is_feature_enabled, FeatureFlagState, FEATURE_NOTICE};
pub use overrides::StorefrontOverrides;
pub use personalization::personalized_message;
pub use tracking::{EventSink, LogSink, TrackedEvent};

#[cfg(any(test, feature = "test-utils"))]
pub use tracking::MemorySink;
