//! Demo overrides for the random and derived stubs

use crate::device::DeviceClass;
use crate::error::ParseError;
use crate::experiment::BannerVariant;
use crate::feature_flag::FeatureFlagState;

/// Forced values for screenshots and manual checks.
///
/// `None` leaves the stub to its normal random or derived behavior.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StorefrontOverrides {
    pub flag: Option<FeatureFlagState>,
    pub variant: Option<BannerVariant>,
    pub device: Option<DeviceClass>,
}

impl StorefrontOverrides {
    /// Build overrides from `key=value` pairs.
    ///
    /// Unknown keys are skipped. Bad values are returned alongside the
    /// overrides that did parse, so one typo does not discard the rest.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> (Self, Vec<ParseError>)
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut overrides = Self::default();
        let mut errors = Vec::new();

        for (key, value) in pairs {
            let value = value.as_ref();
            let result = match key.as_ref() {
                "flag" => value
                    .parse::<FeatureFlagState>()
                    .map(|v| overrides.flag = Some(v)),
                "variant" => value
                    .parse::<BannerVariant>()
                    .map(|v| overrides.variant = Some(v)),
                "device" => value
                    .parse::<DeviceClass>()
                    .map(|v| overrides.device = Some(v)),
                _ => Ok(()),
            };
            if let Err(e) = result {
                errors.push(e);
            }
        }

        (overrides, errors)
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
