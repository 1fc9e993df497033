//! Values substituted into `{{.name}}` placeholders.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// HashMap wrapper used when passing placeholder bindings to lookups.
pub type Bindings<'a> = HashMap<Cow<'a, str>, BindingValue<'a>>;

/// A value that can be substituted into a `{{.name}}` placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum BindingValue<'a> {
    /// Text inserted as-is.
    Text(Cow<'a, str>),
    /// Signed integer rendered in base ten.
    Integer(i64),
    /// Floating-point number rendered in its shortest round-trip form.
    Float(f64),
    /// Boolean rendered as `true` or `false`.
    Boolean(bool),
}

impl fmt::Display for BindingValue<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => formatter.write_str(text),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Boolean(value) => write!(formatter, "{value}"),
        }
    }
}

impl<'a> From<&'a str> for BindingValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for BindingValue<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for BindingValue<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for BindingValue<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for BindingValue<'_> {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for BindingValue<'_> {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for BindingValue<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for BindingValue<'_> {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Merge binding sets left to right; later sets win on key collisions.
///
/// ```
/// use std::borrow::Cow;
/// use lexicon_common::i18n::{BindingValue, Bindings, merge_bindings};
///
/// let mut first = Bindings::new();
/// first.insert(Cow::Borrowed("name"), BindingValue::from("Ann"));
/// let mut second = Bindings::new();
/// second.insert(Cow::Borrowed("name"), BindingValue::from("Lee"));
///
/// let merged = merge_bindings(&[&first, &second]);
/// assert_eq!(merged["name"], BindingValue::from("Lee"));
/// ```
#[must_use]
pub fn merge_bindings<'a>(sets: &[&Bindings<'a>]) -> Bindings<'a> {
    let mut merged = Bindings::new();
    for set in sets {
        merged.extend(
            set.iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
    }
    merged
}
