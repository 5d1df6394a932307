//! The `Theme` value object and its scoped activation guard.
//!
//! A theme starts with three color slots and never loses them: every update
//! either overrides an existing slot or adds a new one. Single-slot writes
//! go through the `#RRGGBB` pattern check; bulk merges do not.

use std::fmt;
use std::ops::{Deref, DerefMut};

use apathy_color::{Rgb, hex_to_rgb, is_hex_color};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::info;

use crate::error::ThemeError;
use crate::token::TokenColor;

/// Insertion-ordered mapping from color slot name to color string.
pub type ColorMap = IndexMap<String, String>;

/// Name given to themes constructed without one.
pub const DEFAULT_THEME_NAME: &str = "Apathy";

/// Version stamped on every theme.
pub const THEME_VERSION: &str = "1.0.0";

/// Returned by [`Theme::color`] for slots that are not configured.
pub const FALLBACK_COLOR: &str = "#FFFFFF";

/// The slots every theme starts with.
pub const DEFAULT_COLORS: [(&str, &str); 3] = [
    ("background", "#0F0D1A"),
    ("foreground", "#E6E2D1"),
    ("accent", "#FF7A00"),
];

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A named set of color slots.
///
/// `Display` gives the short user-facing form, `Debug` the developer form:
///
/// ```
/// use apathy_theme::Theme;
///
/// let theme = Theme::new("Apathy VS Code");
/// assert_eq!(theme.to_string(), "Theme(name='Apathy VS Code', version='1.0.0')");
/// assert_eq!(format!("{theme:?}"), "Theme(name='Apathy VS Code', colors=3 colors)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Theme {
    /// Free-form label.
    pub name: String,
    version: String,
    colors: ColorMap,
    token_colors: Vec<TokenColor>,
    active: bool,
}

impl Theme {
    /// Create an active theme with the default color slots.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let colors = DEFAULT_COLORS
            .iter()
            .map(|&(slot, value)| (slot.to_owned(), value.to_owned()))
            .collect();
        Self {
            name: name.into(),
            version: THEME_VERSION.to_owned(),
            colors,
            token_colors: Vec::new(),
            active: true,
        }
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the theme is still active. Becomes `false` once an
    /// [`Activation`] scope ends and stays that way.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// An owned copy of the color mapping. Mutating it does not touch the
    /// theme.
    #[must_use]
    pub fn colors(&self) -> ColorMap {
        self.colors.clone()
    }

    pub(crate) const fn colors_ref(&self) -> &ColorMap {
        &self.colors
    }

    /// Number of configured color slots.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Token color rules, in the order they were added.
    #[must_use]
    pub fn token_colors(&self) -> &[TokenColor] {
        &self.token_colors
    }

    /// Append a token color rule. Rules are not deduplicated; later rules
    /// for the same scope follow earlier ones.
    pub fn add_token_color(&mut self, rule: TokenColor) {
        self.token_colors.push(rule);
    }

    /// Merge `colors` into the mapping, overriding existing slots and
    /// appending new ones.
    ///
    /// Values are stored verbatim; they are NOT checked against the hex
    /// pattern (unlike [`set_color`](Self::set_color)).
    pub fn replace_colors<I, K, V>(&mut self, colors: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.colors
            .extend(colors.into_iter().map(|(slot, value)| (slot.into(), value.into())));
    }

    /// Merge colors from an untyped JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Type`] if `value` is not an object, or if any
    /// of its values is not a string. The theme is left unchanged.
    pub fn replace_colors_json(&mut self, value: &Value) -> Result<(), ThemeError> {
        let Value::Object(map) = value else {
            return Err(ThemeError::Type(format!("got {}", json_kind(value))));
        };

        let entries = map
            .iter()
            .map(|(slot, value)| match value {
                Value::String(s) => Ok((slot.clone(), s.clone())),
                other => Err(ThemeError::Type(format!("slot `{slot}` holds {}", json_kind(other)))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.replace_colors(entries);
        Ok(())
    }

    /// The color in `slot`, or [`FALLBACK_COLOR`] if the slot is absent.
    #[must_use]
    pub fn color(&self, slot: &str) -> &str {
        self.color_or(slot, FALLBACK_COLOR)
    }

    /// The color in `slot`, or `default` if the slot is absent.
    #[must_use]
    pub fn color_or<'a>(&'a self, slot: &str, default: &'a str) -> &'a str {
        self.colors.get(slot).map_or(default, String::as_str)
    }

    /// Store `value` in `slot` after checking it against `#RRGGBB`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Format`] if `value` is not a hex color; the
    /// slot keeps its previous value.
    pub fn set_color(&mut self, slot: impl Into<String>, value: &str) -> Result<(), ThemeError> {
        if !is_hex_color(value) {
            return Err(ThemeError::Format(value.to_owned()));
        }
        self.colors.insert(slot.into(), value.to_owned());
        Ok(())
    }

    /// Decode a hex color string. Stateless; see [`apathy_color::hex_to_rgb`].
    ///
    /// # Errors
    ///
    /// Propagates the decoding error for malformed input.
    pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ThemeError> {
        Ok(hex_to_rgb(hex)?)
    }

    /// Decode the color in `slot` (falling back to [`FALLBACK_COLOR`]).
    ///
    /// # Errors
    ///
    /// Fails if the stored value was merged in unvalidated and is not a hex
    /// color.
    pub fn rgb(&self, slot: &str) -> Result<Rgb, ThemeError> {
        Self::hex_to_rgb(self.color(slot))
    }

    /// Enter the theme's usage scope.
    ///
    /// Logs an activation notice and returns a guard that dereferences to
    /// the theme. Dropping the guard, on any path including unwinding,
    /// logs a deactivation notice and marks the theme inactive.
    pub fn activate(&mut self) -> Activation<'_> {
        info!(theme = %self.name, "activating theme");
        Activation { theme: self }
    }

    /// Run `f` inside an activation scope.
    pub fn with_activation<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut scope = self.activate();
        f(&mut scope)
    }

    /// Placeholder for an asynchronous theme operation that was referenced
    /// but never given a body. Always fails.
    ///
    /// # Errors
    ///
    /// Always returns [`ThemeError::UndefinedOperation`].
    #[allow(clippy::unused_self)]
    pub fn async_operation(&self) -> Result<String, ThemeError> {
        Err(ThemeError::UndefinedOperation("async_operation"))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(DEFAULT_THEME_NAME)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Theme(name='{}', version='{}')", self.name, self.version)
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Theme(name='{}', colors={} colors)", self.name, self.colors.len())
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Activation
// ---------------------------------------------------------------------------

/// Scoped usage of a [`Theme`], created by [`Theme::activate`].
pub struct Activation<'a> {
    theme: &'a mut Theme,
}

impl Deref for Activation<'_> {
    type Target = Theme;

    fn deref(&self) -> &Theme {
        self.theme
    }
}

impl DerefMut for Activation<'_> {
    fn deref_mut(&mut self) -> &mut Theme {
        self.theme
    }
}

impl Drop for Activation<'_> {
    fn drop(&mut self) {
        info!(theme = %self.theme.name, "deactivating theme");
        self.theme.active = false;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn new_theme_has_default_slots() {
        let theme = Theme::new("Apathy VS Code");
        let slots: Vec<_> = theme.colors().into_iter().collect();
        assert_eq!(
            slots,
            vec![
                ("background".to_owned(), "#0F0D1A".to_owned()),
                ("foreground".to_owned(), "#E6E2D1".to_owned()),
                ("accent".to_owned(), "#FF7A00".to_owned()),
            ]
        );
        assert_eq!(theme.version(), "1.0.0");
        assert!(theme.is_active());
    }

    #[test]
    fn token_rules_keep_insertion_order() {
        use crate::token::TokenSettings;

        let mut theme = Theme::default();
        assert!(theme.token_colors().is_empty());
        theme.add_token_color(TokenColor::new(["comment"], TokenSettings::foreground("#5A5A5A")));
        theme.add_token_color(TokenColor::new(["keyword"], TokenSettings::foreground("#FF7A00")));
        let scopes: Vec<&str> =
            theme.token_colors().iter().map(|rule| rule.scope[0].as_str()).collect();
        assert_eq!(scopes, vec!["comment", "keyword"]);
        assert_eq!(theme.color_count(), 3);
    }

    #[test]
    fn default_name() {
        assert_eq!(Theme::default().name, "Apathy");
    }

    #[test]
    fn colors_returns_a_copy() {
        let theme = Theme::default();
        let mut copy = theme.colors();
        copy.insert("background".into(), "#000000".into());
        copy.shift_remove("accent");
        assert_eq!(theme.color("background"), "#0F0D1A");
        assert_eq!(theme.color("accent"), "#FF7A00");
    }

    #[test]
    fn replace_merges_without_validation() {
        let mut theme = Theme::default();
        theme.replace_colors([("accent", "not-a-color"), ("selection", "#333333")]);
        assert_eq!(theme.color("accent"), "not-a-color");
        assert_eq!(theme.color("selection"), "#333333");
        assert_eq!(theme.color("background"), "#0F0D1A");
        assert_eq!(theme.color_count(), 4);
    }

    #[test]
    fn replace_json_accepts_string_objects() {
        let mut theme = Theme::default();
        theme
            .replace_colors_json(&json!({"accent": "not-a-color", "border": "#5A5A5A"}))
            .unwrap();
        assert_eq!(theme.color("accent"), "not-a-color");
        assert_eq!(theme.color("border"), "#5A5A5A");
    }

    #[test]
    fn replace_json_rejects_non_mappings() {
        let mut theme = Theme::default();
        for bad in [json!(null), json!("#000000"), json!(["#000000"]), json!(42)] {
            let err = theme.replace_colors_json(&bad).unwrap_err();
            assert!(matches!(err, ThemeError::Type(_)), "{bad}: {err}");
        }
        assert_eq!(theme.colors(), Theme::default().colors());
    }

    #[test]
    fn replace_json_rejects_non_string_values_atomically() {
        let mut theme = Theme::default();
        let err = theme
            .replace_colors_json(&json!({"accent": "#000000", "border": 7}))
            .unwrap_err();
        assert!(matches!(err, ThemeError::Type(ref msg) if msg.contains("border")));
        assert_eq!(theme.color("accent"), "#FF7A00");
    }

    #[test]
    fn missing_slot_uses_default() {
        let theme = Theme::default();
        assert_eq!(theme.color("cursor"), "#FFFFFF");
        assert_eq!(theme.color_or("cursor", "#123456"), "#123456");
        assert_eq!(theme.color_or("accent", "#123456"), "#FF7A00");
    }

    #[test]
    fn set_color_rejects_bad_format() {
        let mut theme = Theme::default();
        let err = theme.set_color("accent", "orange").unwrap_err();
        assert_eq!(err.to_string(), "invalid color format: orange");
        assert_eq!(theme.color("accent"), "#FF7A00");
    }

    #[test]
    fn hex_to_rgb_is_stateless() {
        assert_eq!(Theme::hex_to_rgb("#0F0D1A").unwrap(), (15, 13, 26));
        assert!(matches!(Theme::hex_to_rgb("#0F0D"), Err(ThemeError::Color(_))));
    }

    #[test]
    fn rgb_of_slot() {
        let mut theme = Theme::default();
        assert_eq!(theme.rgb("accent").unwrap(), (255, 122, 0));
        assert_eq!(theme.rgb("missing").unwrap(), (255, 255, 255));
        theme.replace_colors([("accent", "not-a-color")]);
        assert!(theme.rgb("accent").is_err());
    }

    #[test]
    fn descriptions() {
        let mut theme = Theme::new("Night");
        theme.replace_colors([("border", "#222222")]);
        assert_eq!(theme.to_string(), "Theme(name='Night', version='1.0.0')");
        assert_eq!(format!("{theme:?}"), "Theme(name='Night', colors=4 colors)");
    }

    #[test]
    fn activation_scope_deactivates() {
        let mut theme = Theme::new("Scoped");
        {
            let active = theme.activate();
            assert!(active.is_active());
            assert_eq!(active.color("background"), "#0F0D1A");
        }
        assert!(!theme.is_active());
    }

    #[test]
    fn activation_allows_mutation() {
        let mut theme = Theme::default();
        theme.with_activation(|t| t.set_color("accent", "#00FF00")).unwrap();
        assert_eq!(theme.color("accent"), "#00FF00");
        assert!(!theme.is_active());
    }

    #[test]
    fn activation_ends_on_error() {
        let mut theme = Theme::default();
        let result = theme.with_activation(|t| t.set_color("accent", "bad"));
        assert!(result.is_err());
        assert!(!theme.is_active());
    }

    #[test]
    fn activation_ends_on_panic() {
        let mut theme = Theme::default();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            theme.with_activation(|_| panic!("boom"));
        }));
        assert!(outcome.is_err());
        assert!(!theme.is_active());
    }

    #[test]
    fn reactivation_keeps_theme_inactive() {
        let mut theme = Theme::default();
        theme.with_activation(|_| ());
        theme.with_activation(|t| assert!(!t.is_active()));
        assert!(!theme.is_active());
    }

    #[test]
    fn async_operation_is_undefined() {
        let err = Theme::default().async_operation().unwrap_err();
        assert!(matches!(err, ThemeError::UndefinedOperation("async_operation")));
    }

    fn hex_color() -> impl Strategy<Value = String> {
        "#[0-9A-Fa-f]{6}"
    }

    proptest! {
        #[test]
        fn set_then_get_round_trips(slot in "[a-z][a-z_.]{0,20}", value in hex_color()) {
            let mut theme = Theme::default();
            theme.set_color(slot.clone(), &value).unwrap();
            prop_assert_eq!(theme.color(&slot), value.as_str());
        }

        #[test]
        fn invalid_values_leave_state_unchanged(
            slot in "(background|foreground|accent|extra)",
            value in "\\PC{0,10}",
        ) {
            prop_assume!(!is_hex_color(&value));
            let mut theme = Theme::default();
            let before = theme.colors();
            let result = theme.set_color(slot, &value);
            prop_assert!(matches!(result, Err(ThemeError::Format(_))));
            prop_assert_eq!(theme.colors(), before);
        }
    }
}
