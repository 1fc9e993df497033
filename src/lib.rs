//! Lexicon compiles layered translation sources into one flat catalog and
//! resolves localized strings from it at runtime.
//!
//! The workspace splits into two crates re-exported here:
//!
//! - [`lexicon_compiler`] walks a tree of JSON, YAML, TOML, and CSV files and
//!   merges them into a [`Catalog`] keyed by dotted paths such as
//!   `en.messages.hello`.
//! - [`lexicon_common`] holds the [`Catalog`] type, the placeholder
//!   [`Template`] engine, and the [`Localizer`] that looks messages up with
//!   locale fallback.
//!
//! [`build_localizer`] ties the two together using [`LexiconConfig`].

pub mod config;

use camino::Utf8Path;
use log::debug;
use thiserror::Error;

pub use config::{CONFIG_FILE_NAME, ConfigError, LexiconConfig};
pub use lexicon_common::{
    BindingValue, Bindings, Catalog, I18nError, KEY_SEPARATOR, LOCALE_ENV_VAR, LocaleSelection,
    LocaleSource, Localizer, Template, TemplateError, localizer_from_environment, merge_bindings,
    normalise_locale, resolve_localizer,
};
pub use lexicon_compiler::{CompileError, FormatError, SourceFormat, compile, compile_files};

const LOG_TARGET: &str = "lexicon";

/// Failures surfaced by the top-level helpers.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// `lexicon.toml` could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The translation sources failed to compile.
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Compile the sources named by `config` and resolve the active locale.
///
/// The locale is chosen from `LEXICON_LOCALE`, then `config.locale`, then
/// `config.fallback_locale`, keeping the first one the compiled catalog holds
/// entries for.
///
/// # Errors
///
/// Returns [`LexiconError::Compile`] when the sources under `config.input`
/// cannot be discovered, read, or parsed.
pub fn build_localizer(config: &LexiconConfig) -> Result<Localizer, LexiconError> {
    let catalog = compile(&config.input)?;
    debug!(
        target: LOG_TARGET,
        "compiled {} entries from {}",
        catalog.len(),
        config.input,
    );
    Ok(localizer_from_environment(
        &catalog,
        &config.fallback_locale,
        config.locale(),
    ))
}

/// Load `lexicon.toml` from `path` and build a localizer from it.
///
/// Relative `input` paths are resolved against the directory holding the
/// configuration file.
///
/// # Errors
///
/// Returns [`LexiconError::Config`] when the configuration cannot be loaded
/// and [`LexiconError::Compile`] when compilation fails.
pub fn localizer_from_config_file(path: &Utf8Path) -> Result<Localizer, LexiconError> {
    let mut config = LexiconConfig::load(path)?;
    if let Some(parent) = path.parent().filter(|_| config.input.is_relative()) {
        config.input = parent.join(&config.input);
    }
    build_localizer(&config)
}
