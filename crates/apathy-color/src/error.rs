//! Errors raised while decoding color notations.

use thiserror::Error;

/// A color string could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The hex body (after stripping `#`) does not have exactly six digits.
    #[error("hex color `{input}` must have 6 digits, found {len}")]
    Length { input: String, len: usize },

    /// A character in the hex body is not a hexadecimal digit.
    #[error("invalid hex digit {digit:?} in `{input}`")]
    Digit { input: String, digit: char },

    /// The string uses a notation other than `#RRGGBB` or `rgb(r, g, b)`.
    #[error("unsupported color format: `{0}`")]
    Unsupported(String),

    /// An `rgb()` component is too large to represent.
    #[error("rgb component {component} in `{input}` does not fit in 32 bits")]
    ComponentRange { input: String, component: String },
}

impl ColorError {
    /// Whether this error describes malformed notation, as opposed to a
    /// well-formed string carrying an unusable value.
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::Length { .. } | Self::Digit { .. } | Self::Unsupported(_))
    }
}
