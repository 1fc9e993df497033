//! Workspace configuration loaded from `lexicon.toml`.
//!
//! The file names the catalog source root and the locales a consuming
//! application should start with:
//!
//! ```toml
//! input = "locales"
//! locale = "es"
//! fallback_locale = "en"
//! ```
//!
//! Every field is optional. Unknown fields are rejected so typos surface as
//! errors instead of silently falling back to defaults.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use lexicon_common::normalise_locale;
use serde::Deserialize;
use thiserror::Error;

/// Default file name for the configuration document.
pub const CONFIG_FILE_NAME: &str = "lexicon.toml";

/// Errors raised while loading `lexicon.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}")]
    Read {
        /// Location of the configuration file.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has unexpected fields.
    #[error("invalid configuration in {origin}: {source}")]
    Parse {
        /// File path or other description of where the text came from.
        origin: String,
        /// The TOML deserialisation error.
        #[source]
        source: toml::de::Error,
    },
}

/// Settings shared by the compiler and the runtime localizer.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconConfig {
    /// Root directory of the translation sources.
    pub input: Utf8PathBuf,
    /// Preferred active locale when no explicit or environment override wins.
    ///
    /// The resolver trims whitespace and ignores blank values, so
    /// `locale = ""` behaves as if the field were absent.
    pub locale: Option<String>,
    /// Locale consulted when the active locale lacks a key.
    #[serde(default = "LexiconConfig::default_fallback_locale")]
    pub fallback_locale: String,
}

impl LexiconConfig {
    fn default_input() -> Utf8PathBuf {
        Utf8PathBuf::from("locales")
    }

    fn default_fallback_locale() -> String {
        String::from("en")
    }

    /// Reads and parses the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not a valid configuration.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|error| ConfigError::Read {
            path: path.to_owned(),
            source: error,
        })?;
        Self::parse(path.as_str(), &source)
    }

    /// Parses configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexicon::LexiconConfig;
    ///
    /// let config = LexiconConfig::from_toml_str("locale = \"es\"\n")?;
    /// assert_eq!(config.locale(), Some("es"));
    /// assert_eq!(config.fallback_locale, "en");
    /// # Ok::<(), lexicon::ConfigError>(())
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Self::parse("inline configuration", source)
    }

    /// Loads configuration using the supplied loader.
    ///
    /// The `name` parameter is passed through so callers can resolve a
    /// location explicitly. This helper also exists to support dependency
    /// injection in tests so that loading can be simulated without touching
    /// the file system.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexicon::LexiconConfig;
    ///
    /// let config = LexiconConfig::load_with("lexicon.toml", |_| LexiconConfig::default());
    /// assert_eq!(config.input.as_str(), "locales");
    /// ```
    #[must_use]
    pub fn load_with<F>(name: &str, loader: F) -> Self
    where
        F: FnOnce(&str) -> Self,
    {
        loader(name)
    }

    /// Returns the configured locale override, if present.
    ///
    /// Whitespace-only values are treated as absent.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        normalise_locale(self.locale.as_deref())
    }

    fn parse(origin: &str, source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|error| ConfigError::Parse {
            origin: origin.to_owned(),
            source: error,
        })
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            input: Self::default_input(),
            locale: None,
            fallback_locale: Self::default_fallback_locale(),
        }
    }
}
