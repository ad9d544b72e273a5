//! Storefront configuration

use crate::device::MOBILE_BREAKPOINT_PX;
use serde::{Deserialize, Serialize};

fn default_store_name() -> String {
    "TechStore".to_string()
}

fn default_breakpoint() -> f64 {
    MOBILE_BREAKPOINT_PX
}

fn default_flag_probability() -> f64 {
    0.5
}

/// Static knobs for the demo page.
///
/// Built in code and handed to the UI through context. Nothing reads it from
/// disk or the environment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default = "default_store_name")]
    pub store_name: String,
    /// Widths at or below this are `mobile`
    #[serde(default = "default_breakpoint")]
    pub mobile_breakpoint_px: f64,
    /// Chance the feature flag renders its notice on any given render
    #[serde(default = "default_flag_probability")]
    pub flag_probability: f64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
            mobile_breakpoint_px: default_breakpoint(),
            flag_probability: default_flag_probability(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.store_name, "TechStore");
        assert_eq!(config.mobile_breakpoint_px, 768.0);
        assert_eq!(config.flag_probability, 0.5);
    }
}
