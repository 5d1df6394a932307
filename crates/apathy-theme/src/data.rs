//! Text normalization of mixed text/number input.

use std::fmt;

/// A value accepted by [`process_data`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataItem {
    Text(String),
    Integer(i64),
}

impl fmt::Display for DataItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for DataItem {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for DataItem {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for DataItem {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

/// Drop absent entries and render the rest as uppercase text, keeping order.
///
/// ```
/// use apathy_theme::{DataItem, process_data};
///
/// let items = [Some(DataItem::from("accent")), None, Some(DataItem::from(42))];
/// assert_eq!(process_data(&items), ["ACCENT", "42"]);
/// ```
#[must_use]
pub fn process_data(items: &[Option<DataItem>]) -> Vec<String> {
    items
        .iter()
        .flatten()
        .map(|item| item.to_string().to_uppercase())
        .collect()
}
