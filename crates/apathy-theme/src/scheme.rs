//! Color schemes: immutable four-color records built on demand.
//!
//! A scheme is not tied to any [`Theme`](crate::Theme); it only copies
//! values out of whatever mapping it is given.

use serde::{Deserialize, Serialize};

use crate::hook::with_operation_log;
use crate::theme::ColorMap;

const DEFAULT_BACKGROUND: &str = "#000000";
const DEFAULT_FOREGROUND: &str = "#FFFFFF";
const DEFAULT_ACCENT: &str = "#FF0000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,
    pub background: String,
    pub foreground: String,
    pub accent: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Build a scheme named `name` from the `background`, `foreground`, and
/// `accent` entries of `colors`.
///
/// Missing entries fall back to black, white, and red. Other entries are
/// ignored and values are copied without validation. The call is wrapped
/// in [`with_operation_log`].
#[must_use]
pub fn create_color_scheme(name: &str, colors: &ColorMap) -> ColorScheme {
    with_operation_log("create_color_scheme", || {
        let pick = |slot: &str, fallback: &str| {
            colors.get(slot).map_or(fallback, String::as_str).to_owned()
        };
        ColorScheme {
            name: name.to_owned(),
            background: pick("background", DEFAULT_BACKGROUND),
            foreground: pick("foreground", DEFAULT_FOREGROUND),
            accent: pick("accent", DEFAULT_ACCENT),
            is_default: false,
        }
    })
}
