//! Feature flag stub

use crate::error::ParseError;
use rand::Rng;
use std::str::FromStr;

/// Notice rendered when the flag is on
pub const FEATURE_NOTICE: &str = "New feature enabled!";

/// Outcome of one flag evaluation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureFlagState {
    Enabled,
    Disabled,
}

impl FeatureFlagState {
    pub fn is_enabled(&self) -> bool {
        matches!(self, FeatureFlagState::Enabled)
    }

    /// What the flag renders: the fixed notice or nothing
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            FeatureFlagState::Enabled => Some(FEATURE_NOTICE),
            FeatureFlagState::Disabled => None,
        }
    }
}

impl From<bool> for FeatureFlagState {
    fn from(enabled: bool) -> Self {
        if enabled {
            FeatureFlagState::Enabled
        } else {
            FeatureFlagState::Disabled
        }
    }
}

/// Accepts `1`/`0`, `on`/`off` and `true`/`false`
impl FromStr for FeatureFlagState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "on" | "true" => Ok(FeatureFlagState::Enabled),
            "0" | "off" | "false" => Ok(FeatureFlagState::Disabled),
            other => Err(ParseError::FlagValue(other.to_string())),
        }
    }
}

/// Draw a fresh flag decision.
///
/// `probability` is clamped to `[0, 1]`; NaN counts as zero.
pub fn is_feature_enabled<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> FeatureFlagState {
    let p = if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    };
    rng.random_bool(p).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_notice_is_fixed_or_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            match is_feature_enabled(&mut rng, 0.5).notice() {
                None | Some(FEATURE_NOTICE) => {}
                Some(other) => panic!("unexpected notice {other:?}"),
            }
        }
    }

    #[test]
    fn test_roughly_half_enabled() {
        let mut rng = StdRng::seed_from_u64(42);
        let enabled = (0..10_000)
            .filter(|_| is_feature_enabled(&mut rng, 0.5).is_enabled())
            .count();
        assert!((4_500..=5_500).contains(&enabled), "enabled {enabled} times");
    }

    #[test]
    fn test_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(is_feature_enabled(&mut rng, 0.0), FeatureFlagState::Disabled);
            assert_eq!(is_feature_enabled(&mut rng, 1.0), FeatureFlagState::Enabled);
            assert_eq!(is_feature_enabled(&mut rng, 3.0), FeatureFlagState::Enabled);
            assert_eq!(
                is_feature_enabled(&mut rng, f64::NAN),
                FeatureFlagState::Disabled
            );
        }
    }

    #[test]
    fn test_same_seed_same_decisions() {
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..32)
                .map(|_| is_feature_enabled(&mut rng, 0.5))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(99), draw(99));
    }

    #[test]
    fn test_parse_flag_override() {
        assert_eq!("1".parse::<FeatureFlagState>(), Ok(FeatureFlagState::Enabled));
        assert_eq!("off".parse::<FeatureFlagState>(), Ok(FeatureFlagState::Disabled));
        assert_eq!(
            "maybe".parse::<FeatureFlagState>(),
            Err(ParseError::FlagValue("maybe".to_string()))
        );
    }
}
