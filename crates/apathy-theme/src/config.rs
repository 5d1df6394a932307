//! Static theme configuration.
//!
//! The record is declarative only: nothing in [`Theme`](crate::Theme)
//! consults it. It can be read from TOML so callers can carry their own
//! copy alongside themes.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::ConfigError;

/// A serialization format a theme may be exchanged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub default_theme: String,
    pub supported_formats: Vec<ConfigFormat>,
    pub max_colors: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: "Apathy".to_owned(),
            supported_formats: vec![ConfigFormat::Json, ConfigFormat::Yaml, ConfigFormat::Toml],
            max_colors: 256,
        }
    }
}

impl ThemeConfig {
    /// Parse a configuration from TOML. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] for malformed TOML or unknown format
    /// names, and [`ConfigError::Invalid`] for an empty theme name or a
    /// zero color limit.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.default_theme.trim().is_empty() {
            return Err(ConfigError::Invalid("default_theme must not be empty".into()));
        }
        if config.max_colors == 0 {
            return Err(ConfigError::Invalid("max_colors must be at least 1".into()));
        }
        Ok(config)
    }
}

/// The process-wide built-in configuration.
#[must_use]
pub fn theme_config() -> &'static ThemeConfig {
    static CONFIG: OnceLock<ThemeConfig> = OnceLock::new();
    CONFIG.get_or_init(ThemeConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_values() {
        let config = theme_config();
        assert_eq!(config.default_theme, "Apathy");
        assert_eq!(
            config.supported_formats,
            vec![ConfigFormat::Json, ConfigFormat::Yaml, ConfigFormat::Toml]
        );
        assert_eq!(config.max_colors, 256);
    }

    #[test]
    fn toml_overrides_some_keys() {
        let config = ThemeConfig::from_toml_str(
            r#"
            default_theme = "Apathy (Experimental)"
            supported_formats = ["json"]
            "#,
        )
        .unwrap();
        assert_eq!(config.default_theme, "Apathy (Experimental)");
        assert_eq!(config.supported_formats, vec![ConfigFormat::Json]);
        assert_eq!(config.max_colors, 256);
    }

    #[test]
    fn empty_toml_is_the_default() {
        assert_eq!(ThemeConfig::from_toml_str("").unwrap(), ThemeConfig::default());
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = ThemeConfig::from_toml_str(r#"supported_formats = ["xml"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)), "{err}");
    }

    #[test]
    fn zero_max_colors_is_invalid() {
        let err = ThemeConfig::from_toml_str("max_colors = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn blank_theme_name_is_invalid() {
        let err = ThemeConfig::from_toml_str(r#"default_theme = "  ""#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
