//! Textual color notations and the forgiving converter built on them.
//!
//! Two notations are understood: `#RRGGBB` and `rgb(r, g, b)`. The notation
//! is picked from the prefix alone, so `"rgba(1, 2, 3, 0.5)"` is treated as
//! an `rgb` string that simply fails to match.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

use crate::error::ColorError;
use crate::hex::hex_to_rgb;

/// Integer color components as written in a color string.
///
/// `#RRGGBB` always yields values in 0-255; `rgb(r, g, b)` yields whatever
/// integers it holds, so `rgb(300, 0, 0)` is `(300, 0, 0)`.
pub type RgbComponents = (u32, u32, u32);

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgb\(([0-9]+),\s*([0-9]+),\s*([0-9]+)\)").expect("rgb() pattern is a valid regex")
});

/// The notation a color string is written in, judged by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorNotation {
    /// `#RRGGBB`
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
}

impl ColorNotation {
    /// Detect the notation of `value`, or `None` for anything else.
    #[must_use]
    pub fn detect(value: &str) -> Option<Self> {
        if value.starts_with('#') {
            Some(Self::Hex)
        } else if value.starts_with("rgb") {
            Some(Self::Rgb)
        } else {
            None
        }
    }
}

/// Extract the three components of an `rgb(r, g, b)` expression.
///
/// The expression may appear anywhere in `value`. Returns `Ok(None)` when
/// there is no match at all. Components are not clamped to 0-255.
///
/// # Errors
///
/// Returns [`ColorError::ComponentRange`] if a component overflows `u32`.
pub fn parse_rgb_function(value: &str) -> Result<Option<RgbComponents>, ColorError> {
    let Some(caps) = RGB_FUNCTION.captures(value) else {
        return Ok(None);
    };

    let component = |idx: usize| -> Result<u32, ColorError> {
        let text = &caps[idx];
        text.parse().map_err(|_| ColorError::ComponentRange {
            input: value.to_owned(),
            component: text.to_owned(),
        })
    };
    Ok(Some((component(1)?, component(2)?, component(3)?)))
}

/// Strictly convert `value` to RGB, propagating every failure.
///
/// # Errors
///
/// [`ColorError::Unsupported`] for unknown notations, plus whatever
/// [`hex_to_rgb`] or [`parse_rgb_function`] report.
pub fn convert(value: &str) -> Result<Option<RgbComponents>, ColorError> {
    match ColorNotation::detect(value) {
        Some(ColorNotation::Hex) => {
            hex_to_rgb(value).map(|(r, g, b)| Some((u32::from(r), u32::from(g), u32::from(b))))
        }
        Some(ColorNotation::Rgb) => parse_rgb_function(value),
        None => Err(ColorError::Unsupported(value.to_owned())),
    }
}

/// Logs the end of a conversion attempt when dropped, on every exit path.
struct CompletionNotice<'a> {
    input: &'a str,
}

impl Drop for CompletionNotice<'_> {
    fn drop(&mut self) {
        info!(input = self.input, "color conversion attempt completed");
    }
}

/// Convert `value` to RGB, absorbing every failure into `None`.
///
/// Errors are logged at `warn` and never escape.
///
/// ```
/// use apathy_color::safe_color_conversion;
///
/// assert_eq!(safe_color_conversion("#FF7A00"), Some((255, 122, 0)));
/// assert_eq!(safe_color_conversion("rgb(10, 20, 30)"), Some((10, 20, 30)));
/// assert_eq!(safe_color_conversion("rgb(300, 0, 0)"), Some((300, 0, 0)));
/// assert_eq!(safe_color_conversion("notacolor"), None);
/// ```
#[must_use]
pub fn safe_color_conversion(value: &str) -> Option<RgbComponents> {
    let _notice = CompletionNotice { input: value };

    match convert(value) {
        Ok(rgb) => rgb,
        Err(err) if err.is_format_error() => {
            warn!(input = value, error = %err, "color conversion error");
            None
        }
        Err(err) => {
            warn!(input = value, error = %err, "unexpected color conversion error");
            None
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
