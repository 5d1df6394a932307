//! # apathy-theme: theme value object and color schemes
//!
//! A [`Theme`] owns a name, a version, and an insertion-ordered mapping of
//! color slots (`background`, `foreground`, `accent`, plus anything added
//! later). Around it sit a few independent helpers:
//!
//! ```text
//! Theme ──────────── set_color (validated) / replace_colors (merged as-is)
//!   │
//!   ├─ activate() ── Activation guard: logs on entry, deactivates on drop
//!   └─ to_json() ─── ThemeDocument { name, type, colors, tokenColors }
//!
//! create_color_scheme ── wrapped by hook::with_operation_log
//! process_data ───────── uppercase text rendering of mixed items
//! theme_config() ─────── inert static configuration record
//! ```
//!
//! Color parsing itself lives in `apathy-color`; this crate only stores and
//! validates color strings.

pub mod config;
pub mod data;
pub mod document;
pub mod error;
pub mod hook;
pub mod kind;
pub mod scheme;
pub mod theme;
pub mod token;

pub use config::{ConfigFormat, ThemeConfig, theme_config};
pub use data::{DataItem, process_data};
pub use document::ThemeDocument;
pub use error::{ConfigError, ThemeError};
pub use hook::with_operation_log;
pub use kind::ThemeKind;
pub use scheme::{ColorScheme, create_color_scheme};
pub use theme::{Activation, ColorMap, Theme};
pub use token::{TokenColor, TokenSettings};
