use thiserror::Error;

/// Errors from parsing externally supplied values (URL state, config).
///
/// Core decisions never fail; only text coming in from outside can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown device class: {0}")]
    DeviceClass(String),
    #[error("Unknown banner variant: {0}")]
    BannerVariant(String),
    #[error("Invalid flag value: {0}")]
    FlagValue(String),
    #[error("Invalid state encoding: {0}")]
    StateEncoding(String),
}
