//! Runtime localisation over a compiled [`Catalog`].
//!
//! A [`Localizer`] resolves `locale.key` entries, retries with its fallback
//! locale, and substitutes `{{.name}}` placeholders from caller-supplied
//! [`Bindings`]. Lookups never fail at the public boundary: a missing key
//! yields the key itself, a malformed template is returned unsubstituted, and
//! a placeholder with no binding renders as `<no value>`.
//! [`Localizer::try_get_with_locale`] is the escape hatch for
//! callers that need to tell those outcomes apart.
//!
//! Locale selection is handled by [`resolve_localizer`], which evaluates
//! explicit overrides, the `LEXICON_LOCALE` environment variable, and
//! configuration in priority order before settling on the fallback locale.
//!
//! [`Catalog`]: crate::Catalog

mod bindings;
mod localizer;
mod selection;
pub mod template;

pub use bindings::{BindingValue, Bindings, merge_bindings};
pub use localizer::{I18nError, Localizer};
pub use selection::{
    LOCALE_ENV_VAR, LocaleSelection, LocaleSource, localizer_from_environment,
    normalise_locale, resolve_localizer,
};
pub use template::{Template, TemplateError};
