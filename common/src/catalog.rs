//! Compiled, read-only translation catalog.
//!
//! A [`Catalog`] maps locale-qualified canonical keys such as
//! `en.messages.hello` to template strings. It is built once by the compiler
//! and then shared between any number of [`crate::Localizer`] values. Cloning
//! is cheap because the entries sit behind an [`Arc`], and nothing hands out
//! mutable access once the catalog exists.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Separator between the segments of a canonical key.
pub const KEY_SEPARATOR: char = '.';

/// Immutable mapping from canonical keys to template strings.
///
/// Entries are stored in key order so serialisation is deterministic: the same
/// entries always produce byte-identical JSON.
///
/// ```
/// use lexicon_common::Catalog;
///
/// let catalog: Catalog = [("en.messages.hello".to_owned(), "hello".to_owned())]
///     .into_iter()
///     .collect();
///
/// assert_eq!(catalog.get("en.messages.hello"), Some("hello"));
/// assert!(catalog.has_locale("en"));
/// assert!(!catalog.has_locale("es"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Arc<BTreeMap<String, String>>,
}

impl Catalog {
    /// Wrap an already merged key/value mapping.
    #[must_use]
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Look up the template stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether an entry exists for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, template)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Sorted, distinct leading key segments.
    ///
    /// Runtime lookups treat the first segment of every key as its locale, so
    /// this is the set of locales a [`crate::Localizer`] can serve directly.
    #[must_use]
    pub fn locales(&self) -> BTreeSet<&str> {
        self.entries
            .keys()
            .filter_map(|key| key.split_once(KEY_SEPARATOR).map(|(locale, _)| locale))
            .collect()
    }

    /// Whether at least one key is qualified by `locale`.
    #[must_use]
    pub fn has_locale(&self, locale: &str) -> bool {
        let prefix = format!("{locale}{KEY_SEPARATOR}");
        self.entries
            .range::<str, _>((
                std::ops::Bound::Included(prefix.as_str()),
                std::ops::Bound::Unbounded,
            ))
            .next()
            .is_some_and(|(key, _)| key.starts_with(prefix.as_str()))
    }

    /// Serialise the catalog as a pretty-printed, key-sorted JSON object.
    ///
    /// # Errors
    ///
    /// Returns the serialiser error; with string keys and values this does
    /// not happen in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a catalog previously written by [`Catalog::to_json`].
    ///
    /// # Errors
    ///
    /// Returns an error when `source` is not a JSON object of strings.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

impl From<BTreeMap<String, String>> for Catalog {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<(String, String)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
