use log::{debug, trace};
use thiserror::Error;

use super::template::{self, MISSING_VALUE, Template, TemplateError};
use super::{Bindings, merge_bindings};
use crate::catalog::{Catalog, KEY_SEPARATOR};

const LOG_TARGET: &str = "lexicon::localizer";

/// Error raised when the catalog cannot satisfy a caller request.
///
/// Only [`Localizer::try_get_with_locale`] surfaces these; the `get*` methods
/// fold them into their documented fallback strings.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    /// Raised when neither the requested nor the fallback locale has the key.
    #[error("message `{key}` missing for locale `{locale}` and fallback `{fallback}`")]
    MissingMessage {
        /// Requested key, without locale qualification.
        key: String,
        /// Locale consulted first.
        locale: String,
        /// Fallback locale consulted second.
        fallback: String,
    },
    /// Raised when the stored template cannot be rendered.
    #[error("message `{key}` could not be rendered: {source}")]
    Template {
        /// Requested key, without locale qualification.
        key: String,
        /// Underlying template failure.
        #[source]
        source: TemplateError,
    },
}

/// Resolve localized strings from a shared [`Catalog`].
///
/// A `Localizer` is a small value: two locale tags and a handle to the
/// catalog. The `with_*` methods return a reconfigured copy and leave the
/// receiver untouched, so a localizer can be handed to other threads or stored
/// per request without coordination.
///
/// ```
/// use std::borrow::Cow;
/// use lexicon_common::{BindingValue, Bindings, Catalog, Localizer};
///
/// let catalog: Catalog = [
///     ("en.messages.hello_my_name_is", "Hello my name is {{.name}}"),
///     ("es.messages.hello", "Hola"),
/// ]
/// .into_iter()
/// .map(|(key, value)| (key.to_owned(), value.to_owned()))
/// .collect();
///
/// let localizer = Localizer::new(catalog, "en", "es");
/// let mut bindings = Bindings::new();
/// bindings.insert(Cow::Borrowed("name"), BindingValue::from("Ann"));
///
/// assert_eq!(
///     localizer.get("messages.hello_my_name_is", &[&bindings]),
///     "Hello my name is Ann",
/// );
/// assert_eq!(localizer.get("messages.hello", &[]), "Hola");
/// assert_eq!(localizer.get("messages.unknown", &[]), "messages.unknown");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Localizer {
    locale: String,
    fallback_locale: String,
    catalog: Catalog,
}

impl Localizer {
    /// Create a localizer serving `locale`, falling back to `fallback_locale`.
    #[must_use]
    pub fn new(
        catalog: Catalog,
        locale: impl Into<String>,
        fallback_locale: impl Into<String>,
    ) -> Self {
        Self {
            locale: locale.into(),
            fallback_locale: fallback_locale.into(),
            catalog,
        }
    }

    /// Return the active locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Return the fallback locale.
    #[must_use]
    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Return the shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Copy of this localizer with a different active locale.
    #[must_use]
    pub fn with_locale(&self, locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..self.clone()
        }
    }

    /// Copy of this localizer with a different fallback locale.
    #[must_use]
    pub fn with_fallback_locale(&self, fallback_locale: impl Into<String>) -> Self {
        Self {
            fallback_locale: fallback_locale.into(),
            ..self.clone()
        }
    }

    /// Copy of this localizer with both locales replaced.
    #[must_use]
    pub fn with_locales(
        &self,
        locale: impl Into<String>,
        fallback_locale: impl Into<String>,
    ) -> Self {
        Self {
            locale: locale.into(),
            fallback_locale: fallback_locale.into(),
            catalog: self.catalog.clone(),
        }
    }

    /// Resolve `key` in the active locale.
    ///
    /// Never fails: a missing key yields `key` itself, a malformed template
    /// is returned unsubstituted, and an unbound placeholder renders as
    /// `<no value>`.
    #[must_use]
    pub fn get(&self, key: &str, bindings: &[&Bindings<'_>]) -> String {
        self.get_with_locale(&self.locale, key, bindings)
    }

    /// Resolve `key` in `locale`, consulting the fallback locale on a miss.
    ///
    /// Binding sets merge left to right before substitution; later sets win.
    /// Never fails, see [`Localizer::get`].
    #[must_use]
    pub fn get_with_locale(&self, locale: &str, key: &str, bindings: &[&Bindings<'_>]) -> String {
        let Some(stored) = self.lookup(locale, key) else {
            debug!(
                target: LOG_TARGET,
                "message `{key}` missing for `{locale}` and `{}`; returning the key",
                self.fallback_locale,
            );
            return key.to_owned();
        };

        match substitute(key, stored, bindings) {
            Ok(rendered) => rendered,
            Err(error) => {
                debug!(
                    target: LOG_TARGET,
                    "message `{key}` left unsubstituted: {error}",
                );
                stored.to_owned()
            }
        }
    }

    /// Resolve `key` in `locale`, reporting misses and malformed templates.
    ///
    /// Unbound placeholders are not errors; they render as `<no value>` just
    /// as they do for [`Localizer::get`].
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MissingMessage`] when neither locale holds the key
    /// and [`I18nError::Template`] when the stored template cannot be parsed.
    pub fn try_get_with_locale(
        &self,
        locale: &str,
        key: &str,
        bindings: &[&Bindings<'_>],
    ) -> Result<String, I18nError> {
        let stored = self
            .lookup(locale, key)
            .ok_or_else(|| I18nError::MissingMessage {
                key: key.to_owned(),
                locale: locale.to_owned(),
                fallback: self.fallback_locale.clone(),
            })?;

        substitute(key, stored, bindings).map_err(|source| I18nError::Template {
            key: key.to_owned(),
            source,
        })
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        if let Some(found) = self.catalog.get(&qualify(locale, key)) {
            return Some(found);
        }

        let fallback = self.catalog.get(&qualify(&self.fallback_locale, key));
        if fallback.is_some() {
            trace!(
                target: LOG_TARGET,
                "message `{key}` served from fallback locale `{}`",
                self.fallback_locale,
            );
        }
        fallback
    }
}

fn qualify(locale: &str, key: &str) -> String {
    format!("{locale}{KEY_SEPARATOR}{key}")
}

fn substitute(
    key: &str,
    stored: &str,
    bindings: &[&Bindings<'_>],
) -> Result<String, TemplateError> {
    if !template::has_placeholders(stored) {
        return Ok(stored.to_owned());
    }

    let parsed = Template::parse(stored)?;
    let merged = merge_bindings(bindings);
    for name in parsed.unbound(&merged) {
        debug!(
            target: LOG_TARGET,
            "message `{key}`: no binding supplied for placeholder `{name}`; rendering {MISSING_VALUE}",
        );
    }
    Ok(parsed.render(&merged))
}
