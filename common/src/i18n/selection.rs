//! Choosing the active locale for a [`Localizer`].
//!
//! Candidates arrive from several places and are only accepted when the
//! catalog holds at least one entry for them.

use std::env;
use std::fmt;

use log::{debug, warn};

use super::Localizer;
use crate::catalog::Catalog;

/// Environment variable consulted for the active locale.
pub const LOCALE_ENV_VAR: &str = "LEXICON_LOCALE";

const LOG_TARGET: &str = "lexicon::selection";

/// Where the active locale came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleSource {
    /// Passed directly by the caller.
    ExplicitArgument,
    /// Locale sourced from the `LEXICON_LOCALE` environment variable.
    EnvironmentVariable,
    /// Locale taken from `lexicon.toml` configuration.
    Configuration,
    /// The fallback locale, used when no candidate is served by the catalog.
    Fallback,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitArgument => formatter.write_str("the caller"),
            Self::EnvironmentVariable => formatter.write_str(LOCALE_ENV_VAR),
            Self::Configuration => formatter.write_str("lexicon.toml"),
            Self::Fallback => formatter.write_str("the fallback"),
        }
    }
}

/// A resolved [`Localizer`] together with the candidate that produced it.
#[derive(Clone, Debug)]
pub struct LocaleSelection {
    localizer: Localizer,
    source: LocaleSource,
    requested: Option<String>,
}

impl LocaleSelection {
    const fn new(localizer: Localizer, source: LocaleSource, requested: Option<String>) -> Self {
        Self {
            localizer,
            source,
            requested,
        }
    }

    /// Which candidate supplied the active locale.
    #[must_use]
    pub const fn source(&self) -> LocaleSource {
        self.source
    }

    /// The normalised candidate value, or `None` for the fallback.
    #[must_use]
    pub fn requested(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    /// The active locale of the resolved localizer.
    #[must_use]
    pub fn locale(&self) -> &str {
        self.localizer.locale()
    }

    /// Whether the fallback locale was made active.
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        self.source == LocaleSource::Fallback
    }

    /// Borrow the resolved [`Localizer`].
    #[must_use]
    pub const fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    /// Unwrap the resolved [`Localizer`].
    #[must_use]
    pub fn into_localizer(self) -> Localizer {
        self.localizer
    }

    /// Log the winning candidate at debug level.
    pub fn log_outcome(&self) {
        debug!(
            target: LOG_TARGET,
            "active locale `{}` taken from {}",
            self.locale(),
            self.source(),
        );
    }
}

/// Resolve the active locale from explicit, environment, and configuration
/// candidates.
///
/// The resolver considers candidates in the following order and keeps the
/// first one the catalog holds entries for:
///
/// 1. The explicit locale supplied by the caller.
/// 2. The `LEXICON_LOCALE` environment variable.
/// 3. The `locale` setting from `lexicon.toml`.
/// 4. `fallback_locale` when no candidate is usable.
///
/// ```
/// use lexicon_common::{Catalog, LocaleSource, resolve_localizer};
///
/// let catalog: Catalog = [("es.messages.hello".to_owned(), "Hola".to_owned())]
///     .into_iter()
///     .collect();
///
/// let selection = resolve_localizer(&catalog, "en", Some("fr"), None, Some("es"));
/// assert_eq!(selection.source(), LocaleSource::Configuration);
/// assert_eq!(selection.locale(), "es");
/// assert_eq!(selection.localizer().fallback_locale(), "en");
/// ```
#[must_use]
pub fn resolve_localizer(
    catalog: &Catalog,
    fallback_locale: &str,
    explicit: Option<&str>,
    environment: Option<String>,
    configuration: Option<&str>,
) -> LocaleSelection {
    let candidates = [
        (LocaleSource::ExplicitArgument, explicit),
        (LocaleSource::EnvironmentVariable, environment.as_deref()),
        (LocaleSource::Configuration, configuration),
    ];

    candidates
        .into_iter()
        .find_map(|(source, raw)| try_resolve_candidate(catalog, fallback_locale, source, raw))
        .unwrap_or_else(|| {
            LocaleSelection::new(
                Localizer::new(catalog.clone(), fallback_locale, fallback_locale),
                LocaleSource::Fallback,
                None,
            )
        })
}

/// Resolve a localizer using `LEXICON_LOCALE` and an optional configured locale.
///
/// The chosen source is logged before the [`Localizer`] is returned.
#[must_use]
pub fn localizer_from_environment(
    catalog: &Catalog,
    fallback_locale: &str,
    configuration_locale: Option<&str>,
) -> Localizer {
    let environment_locale =
        env::var_os(LOCALE_ENV_VAR).and_then(|value| value.into_string().ok());
    let selection = resolve_localizer(
        catalog,
        fallback_locale,
        None,
        environment_locale,
        configuration_locale,
    );

    selection.log_outcome();
    selection.into_localizer()
}

/// Trim a locale candidate, treating blank input as absent.
#[must_use]
pub fn normalise_locale(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|value| !value.is_empty())
}

fn try_resolve_candidate(
    catalog: &Catalog,
    fallback_locale: &str,
    source: LocaleSource,
    raw: Option<&str>,
) -> Option<LocaleSelection> {
    let candidate = normalise_locale(raw)?;

    if catalog.has_locale(candidate) {
        return Some(LocaleSelection::new(
            Localizer::new(catalog.clone(), candidate, fallback_locale),
            source,
            Some(candidate.to_owned()),
        ));
    }

    warn!(
        target: LOG_TARGET,
        "catalog has no `{candidate}` entries; ignoring the locale from {source}",
    );

    None
}
