//! JSON theme documents in the editor-theme shape
//! `{ name, type, colors, tokenColors }`.
//!
//! Rendering only; writing the text anywhere is the caller's business.

use serde::Serialize;

use crate::error::ThemeError;
use crate::kind::ThemeKind;
use crate::theme::{ColorMap, Theme};
use crate::token::TokenColor;

/// A borrowed, serializable view of a theme.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeDocument<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: ThemeKind,
    pub colors: &'a ColorMap,
    #[serde(rename = "tokenColors")]
    pub token_colors: &'a [TokenColor],
}

impl Theme {
    /// Borrow this theme as a document of the given kind.
    #[must_use]
    pub fn document(&self, kind: ThemeKind) -> ThemeDocument<'_> {
        ThemeDocument {
            name: &self.name,
            kind,
            colors: self.colors_ref(),
            token_colors: self.token_colors(),
        }
    }

    /// Render this theme as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Json`] if serialization fails.
    pub fn to_json(&self, kind: ThemeKind) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(&self.document(kind))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::token::TokenSettings;
    use serde_json::{Value, json};

    #[test]
    fn document_shape() {
        let mut theme = Theme::new("Apathy (Experimental)");
        theme.replace_colors([("editor.background", "#0A0A0A")]);
        theme.add_token_color(TokenColor::new(
            ["comment", "punctuation.definition.comment", "string.comment"],
            TokenSettings::foreground("#5A5A5A").with_font_style("italic"),
        ));
        let parsed: Value = serde_json::from_str(&theme.to_json(ThemeKind::Dark).unwrap()).unwrap();
        assert_eq!(
            parsed,
            json!({
                "name": "Apathy (Experimental)",
                "type": "dark",
                "colors": {
                    "background": "#0F0D1A",
                    "foreground": "#E6E2D1",
                    "accent": "#FF7A00",
                    "editor.background": "#0A0A0A",
                },
                "tokenColors": [
                    {
                        "scope": ["comment", "punctuation.definition.comment", "string.comment"],
                        "settings": { "foreground": "#5A5A5A", "fontStyle": "italic" },
                    },
                ],
            })
        );
    }

    #[test]
    fn slot_order_is_preserved() {
        let theme = Theme::default();
        let text = theme.to_json(ThemeKind::Light).unwrap();
        let bg = text.find("background").unwrap();
        let fg = text.find("foreground").unwrap();
        let ac = text.find("accent").unwrap();
        assert!(bg < fg && fg < ac, "{text}");
    }

    #[test]
    fn theme_without_rules_has_empty_token_colors() {
        let parsed: Value =
            serde_json::from_str(&Theme::default().to_json(ThemeKind::Dark).unwrap()).unwrap();
        assert_eq!(parsed["tokenColors"], json!([]));
    }
}
