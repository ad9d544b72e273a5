//! URL state for demo overrides
//!
//! The `state` query parameter carries base64-encoded JSON (a flat object of
//! strings), keeping URLs opaque and avoiding clashes with other parameters.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use dioxus::prelude::*;
use std::collections::BTreeMap;
use techstore_common::{ParseError, StorefrontOverrides};
use tracing::{info, warn};

/// Decode a state string from a URL query parameter into key-value pairs.
pub fn parse_state(encoded: &str) -> Result<Vec<(String, String)>, ParseError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let json_bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|e| ParseError::StateEncoding(e.to_string()))?;

    let map: BTreeMap<String, String> = serde_json::from_slice(&json_bytes)
        .map_err(|e| ParseError::StateEncoding(e.to_string()))?;

    Ok(map.into_iter().collect())
}

/// Overrides from the `state` parameter.
///
/// Anything that fails to decode is logged and ignored; the page then falls
/// back to its random and derived behavior.
pub fn overrides_from_state(encoded: Option<&str>) -> StorefrontOverrides {
    let Some(encoded) = encoded else {
        return StorefrontOverrides::default();
    };

    let pairs = match parse_state(encoded) {
        Ok(pairs) => pairs,
        Err(e) => {
            warn!("Ignoring URL state: {}", e);
            return StorefrontOverrides::default();
        }
    };

    let (overrides, errors) = StorefrontOverrides::from_pairs(pairs);
    for e in errors {
        warn!("Ignoring override: {}", e);
    }
    if !overrides.is_empty() {
        info!("Applying demo overrides: {:?}", overrides);
    }
    overrides
}

/// Overrides for a page, decoded again only when `state` changes.
pub fn use_overrides(state: Option<String>) -> Memo<StorefrontOverrides> {
    use_memo(use_reactive!(|state| overrides_from_state(state.as_deref())))
}
