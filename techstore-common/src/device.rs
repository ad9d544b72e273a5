//! Device classification from viewport width

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Widths at or below this many CSS pixels count as mobile
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Coarse device classification derived from the viewport width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Classify a viewport width against the given breakpoint.
    ///
    /// The breakpoint itself is mobile. Non-finite or negative widths are
    /// treated as zero.
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if sanitize_width(width) <= breakpoint {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(DeviceClass::Mobile),
            "desktop" => Ok(DeviceClass::Desktop),
            other => Err(ParseError::DeviceClass(other.to_string())),
        }
    }
}

fn sanitize_width(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

/// Last observed viewport width and the device class it maps to.
///
/// Fed by resize notifications; `observe` reports only actual class changes
/// so callers can skip re-renders while the width moves within one class.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    width: f64,
    device: DeviceClass,
    breakpoint: f64,
}

impl ViewportState {
    /// Initial state at mount
    pub fn new(width: f64, breakpoint: f64) -> Self {
        let width = sanitize_width(width);
        Self {
            width,
            device: DeviceClass::from_width(width, breakpoint),
            breakpoint,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Record a new width. Returns the new class if it changed.
    pub fn observe(&mut self, width: f64) -> Option<DeviceClass> {
        self.width = sanitize_width(width);
        let next = DeviceClass::from_width(self.width, self.breakpoint);
        if next == self.device {
            return None;
        }
        debug!(
            "Device class {} -> {} at {}px",
            self.device, next, self.width
        );
        self.device = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_mobile() {
        assert_eq!(
            DeviceClass::from_width(768.0, MOBILE_BREAKPOINT_PX),
            DeviceClass::Mobile
        );
        assert_eq!(
            DeviceClass::from_width(769.0, MOBILE_BREAKPOINT_PX),
            DeviceClass::Desktop
        );
    }

    #[test]
    fn test_bad_widths_are_mobile() {
        for width in [f64::NAN, -10.0, f64::NEG_INFINITY, f64::INFINITY] {
            assert_eq!(
                DeviceClass::from_width(width, MOBILE_BREAKPOINT_PX),
                DeviceClass::Mobile
            );
        }
    }

    #[test]
    fn test_parse_device_class() {
        assert_eq!("mobile".parse::<DeviceClass>(), Ok(DeviceClass::Mobile));
        assert_eq!("desktop".parse::<DeviceClass>(), Ok(DeviceClass::Desktop));
        assert_eq!(
            "tablet".parse::<DeviceClass>(),
            Err(ParseError::DeviceClass("tablet".to_string()))
        );
    }

    #[test]
    fn test_shrinking_viewport_transitions_once() {
        let mut viewport = ViewportState::new(1024.0, MOBILE_BREAKPOINT_PX);
        assert_eq!(viewport.device(), DeviceClass::Desktop);

        let transitions: Vec<DeviceClass> = (500..=1024)
            .rev()
            .filter_map(|w| viewport.observe(w as f64))
            .collect();

        assert_eq!(transitions, vec![DeviceClass::Mobile]);
        assert_eq!(viewport.device(), DeviceClass::Mobile);
        assert_eq!(viewport.width(), 500.0);
    }

    #[test]
    fn test_transition_happens_at_crossing() {
        let mut viewport = ViewportState::new(1024.0, MOBILE_BREAKPOINT_PX);
        assert_eq!(viewport.observe(800.0), None);
        assert_eq!(viewport.observe(769.0), None);
        assert_eq!(viewport.observe(768.0), Some(DeviceClass::Mobile));
        assert_eq!(viewport.observe(500.0), None);
    }

    #[test]
    fn test_growing_viewport_returns_to_desktop() {
        let mut viewport = ViewportState::new(375.0, MOBILE_BREAKPOINT_PX);
        assert_eq!(viewport.device(), DeviceClass::Mobile);
        assert_eq!(viewport.observe(1280.0), Some(DeviceClass::Desktop));
        assert_eq!(viewport.observe(1440.0), None);
    }
}
