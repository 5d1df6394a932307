//! Error types for theme operations and configuration loading.

use apathy_color::ColorError;
use thiserror::Error;

/// Errors raised by [`Theme`](crate::Theme) operations.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A bulk color update was given something other than a text-to-text
    /// mapping.
    #[error("colors must be a mapping of slot names to color strings: {0}")]
    Type(String),

    /// A single color value does not match `#RRGGBB`.
    #[error("invalid color format: {0}")]
    Format(String),

    /// A stored color could not be decoded.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// An unknown theme kind name.
    #[error("unknown theme kind `{0}` (expected dark, light, or high_contrast)")]
    UnknownKind(String),

    /// The operation exists by name only and has no behavior.
    #[error("theme operation `{0}` is not defined")]
    UndefinedOperation(&'static str),

    /// Serializing a theme document failed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors when parsing configuration text.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
