use std::num::ParseIntError;

use thiserror::Error;

use crate::models::ShadeKey;

#[derive(Debug, Error)]
pub enum ShadeError {
    #[error("The color: {0} you provided is not valid")]
    InvalidHue(String),

    #[error("Unknown shade: {0}")]
    UnknownShade(String),

    #[error("Unknown color format: {0}")]
    UnknownFormat(String),

    #[error("Missing multiplier for shade {0}")]
    MissingMultiplier(ShadeKey),

    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned by the strict `FromStr` parser for [`crate::Rgba`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Digit count after stripping `#` is not 3, 6 or 8
    #[error("invalid hex color length {0} (expected 3, 6 or 8 digits)")]
    InvalidLength(usize),

    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}
