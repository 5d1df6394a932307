//! Linear gradients between two 24-bit color values.
//!
//! The interpolation runs over the packed integer `0xRRGGBB`, not per
//! channel: entry `i` of an `n`-step gradient is
//!
//! ```text
//! floor((start * (n - i) + end * i) / n)      for i in 0..=n
//! ```
//!
//! so the first entry is always `start` and the last is always `end`.

use crate::error::ColorError;
use crate::hex::{format_hex_value, parse_hex_value};

/// Interpolate `steps + 1` colors from `start` to `end` (both inclusive).
///
/// `steps == 0` yields a single entry equal to `start`.
///
/// ```
/// use apathy_color::gradient_values;
///
/// assert_eq!(gradient_values(0x000000, 0x0000ff, 2), ["#000000", "#00007f", "#0000ff"]);
/// assert_eq!(gradient_values(0x123456, 0xffffff, 0), ["#123456"]);
/// ```
#[must_use]
pub fn gradient_values(start: u32, end: u32, steps: u32) -> Vec<String> {
    if steps == 0 {
        return vec![format_hex_value(start)];
    }

    let n = u128::from(steps);
    let (start_w, end_w) = (u128::from(start), u128::from(end));
    (0..=steps)
        .map(|i| {
            let i = u128::from(i);
            let value = (start_w * (n - i) + end_w * i) / n;
            // Weighted mean of two u32 values, so it fits in u32.
            format_hex_value(u32::try_from(value).unwrap_or(u32::MAX))
        })
        .collect()
}

/// Interpolate between two hex color strings (`#` optional).
///
/// # Errors
///
/// Returns a [`ColorError`] if either endpoint is not a six-digit hex color.
pub fn gradient(start: &str, end: &str, steps: u32) -> Result<Vec<String>, ColorError> {
    let start = parse_hex_value(start)?;
    let end = parse_hex_value(end)?;
    Ok(gradient_values(start, end, steps))
}
