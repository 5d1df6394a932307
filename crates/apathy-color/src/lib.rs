//! # apathy-color: color notation primitives
//!
//! Everything the theme layer needs to read, check, and generate color
//! strings, without any theme state:
//!
//! ```text
//! "#0F0D1A"  ──► hex.rs:      pattern check, hex → (r, g, b)
//! "rgb(..)"  ──► notation.rs: notation detection, rgb() parsing,
//!                             safe_color_conversion (never fails)
//! start/end  ──► gradient.rs: linear integer interpolation → "#rrggbb"
//! ```
//!
//! Colors are plain 8-bit sRGB triples. There is no color-space math here;
//! conversions are purely textual.

pub mod error;
pub mod gradient;
pub mod hex;
pub mod notation;

pub use error::ColorError;
pub use gradient::{gradient, gradient_values};
pub use hex::{HEX_COLOR_PATTERN, Rgb, format_hex_value, hex_to_rgb, is_hex_color, parse_hex_value};
pub use notation::{ColorNotation, RgbComponents, convert, parse_rgb_function, safe_color_conversion};
