//! Banner A/B experiment stub

use crate::error::ParseError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three banner alternatives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BannerVariant {
    #[serde(rename = "variation_1")]
    Variation1,
    #[serde(rename = "variation_2")]
    Variation2,
    #[serde(rename = "variation_3")]
    Variation3,
}

/// Title and subtitle rendered for a variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerContent {
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl BannerVariant {
    pub const ALL: [BannerVariant; 3] = [
        BannerVariant::Variation1,
        BannerVariant::Variation2,
        BannerVariant::Variation3,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            BannerVariant::Variation1 => "variation_1",
            BannerVariant::Variation2 => "variation_2",
            BannerVariant::Variation3 => "variation_3",
        }
    }

    pub fn content(&self) -> BannerContent {
        match self {
            BannerVariant::Variation1 => BannerContent {
                title: "30% Off!",
                subtitle: "On all smartphones",
            },
            BannerVariant::Variation2 => BannerContent {
                title: "Free Shipping",
                subtitle: "On orders over $500",
            },
            BannerVariant::Variation3 => BannerContent {
                title: "Special Offer",
                subtitle: "Limited time only",
            },
        }
    }
}

impl fmt::Display for BannerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BannerVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BannerVariant::ALL
            .into_iter()
            .find(|v| v.key() == s)
            .ok_or_else(|| ParseError::BannerVariant(s.to_string()))
    }
}

/// Pick a variant uniformly at random. Not sticky: every call draws again.
pub fn pick_variant<R: Rng + ?Sized>(rng: &mut R) -> BannerVariant {
    BannerVariant::ALL[rng.random_range(0..BannerVariant::ALL.len())]
}
