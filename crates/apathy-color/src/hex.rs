//! Hex color notation.
//!
//! Theme colors are stored as text in the `#RRGGBB` form. The pattern check
//! is the single gate for every validated write; decoding into bytes is a
//! separate, more forgiving step (any number of leading `#` characters are
//! stripped, digits may be upper or lower case).

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ColorError;

/// An 8-bit sRGB triple `(r, g, b)`.
pub type Rgb = (u8, u8, u8);

/// The pattern a stored theme color must match.
pub const HEX_COLOR_PATTERN: &str = r"^#[0-9A-Fa-f]{6}$";

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX_COLOR_PATTERN).expect("HEX_COLOR_PATTERN is a valid regex"));

/// Whether `s` is a `#RRGGBB` color string.
///
/// ```
/// use apathy_color::is_hex_color;
///
/// assert!(is_hex_color("#FF7A00"));
/// assert!(is_hex_color("#0f0d1a"));
/// assert!(!is_hex_color("FF7A00"));
/// assert!(!is_hex_color("#FFF"));
/// ```
#[must_use]
pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR.is_match(s)
}

/// Decode a hex color into an `(r, g, b)` triple.
///
/// Leading `#` characters are stripped; the remainder must be exactly six
/// hex digits.
///
/// # Errors
///
/// Returns [`ColorError::Length`] if the body is not six characters long,
/// or [`ColorError::Digit`] if it contains a non-hex character.
pub fn hex_to_rgb(s: &str) -> Result<Rgb, ColorError> {
    let value = parse_hex_value(s)?;
    let [_, r, g, b] = value.to_be_bytes();
    Ok((r, g, b))
}

/// Decode a hex color into its 24-bit integer value (`0xRRGGBB`).
///
/// # Errors
///
/// Same conditions as [`hex_to_rgb`].
pub fn parse_hex_value(s: &str) -> Result<u32, ColorError> {
    let body = s.trim_start_matches('#');
    let len = body.chars().count();
    if len != 6 {
        return Err(ColorError::Length { input: s.to_owned(), len });
    }

    body.chars().try_fold(0u32, |acc, c| {
        let digit = c
            .to_digit(16)
            .ok_or_else(|| ColorError::Digit { input: s.to_owned(), digit: c })?;
        Ok::<_, ColorError>((acc << 4) | digit)
    })
}

/// Format a 24-bit value as a lowercase `#rrggbb` string.
///
/// Values wider than 24 bits keep all their digits; the width is a minimum.
#[must_use]
pub fn format_hex_value(value: u32) -> String {
    format!("#{value:06x}")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
