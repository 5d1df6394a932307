//! Token color rules: syntax scopes mapped to foreground and font style.
//!
//! These serialize in the editor-theme shape
//! `{ "scope": [..], "settings": { "foreground": .., "fontStyle": .. } }`.
//! Values are stored as given; unset settings are omitted from the output.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

impl TokenSettings {
    /// Settings with only a foreground color.
    #[must_use]
    pub fn foreground(color: impl Into<String>) -> Self {
        Self { foreground: Some(color.into()), font_style: None }
    }

    /// Add a font style (`italic`, `bold`, `underline`, ...).
    #[must_use]
    pub fn with_font_style(mut self, style: impl Into<String>) -> Self {
        self.font_style = Some(style.into());
        self
    }
}

/// One rule: every scope in `scope` is styled with `settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenColor {
    pub scope: Vec<String>,
    pub settings: TokenSettings,
}

impl TokenColor {
    #[must_use]
    pub fn new<I, S>(scope: I, settings: TokenSettings) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scope: scope.into_iter().map(Into::into).collect(),
            settings,
        }
    }
}
