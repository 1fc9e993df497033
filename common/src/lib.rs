//! Shared catalog and runtime localizer for Lexicon.
//!
//! The compiler crate produces a [`Catalog`]; applications wrap it in a
//! [`Localizer`] to resolve strings per locale.

pub mod catalog;
pub mod i18n;

pub use catalog::{Catalog, KEY_SEPARATOR};
pub use i18n::{
    BindingValue, Bindings, I18nError, LOCALE_ENV_VAR, LocaleSelection, LocaleSource,
    Localizer, Template, TemplateError, localizer_from_environment, merge_bindings,
    normalise_locale, resolve_localizer,
};
