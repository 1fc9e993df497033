//! Placeholder templates of the form `Hello {{.name}}`.
//!
//! Parsing returns an explicit result; the [`Localizer`] decides what a
//! failure means for callers. Rendering cannot fail: a placeholder with no
//! binding renders as [`MISSING_VALUE`], so the bindings that were supplied
//! are still substituted.
//!
//! [`Localizer`]: super::Localizer

use thiserror::Error;

use super::Bindings;

/// Marker that opens a placeholder action.
pub const PLACEHOLDER_OPEN: &str = "{{";
/// Marker that closes a placeholder action.
pub const PLACEHOLDER_CLOSE: &str = "}}";
/// Text rendered in place of a placeholder that has no binding.
pub const MISSING_VALUE: &str = "<no value>";

/// Error raised when a template cannot be parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{{` marker was never closed.
    #[error("unclosed placeholder starting at byte {offset}")]
    Unterminated {
        /// Byte offset of the opening marker.
        offset: usize,
    },
    /// The text between the markers is not a `.name` reference.
    #[error("unsupported placeholder action `{action}`")]
    InvalidAction {
        /// Raw action text, trimmed.
        action: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Segment<'t> {
    Literal(&'t str),
    Placeholder(&'t str),
}

/// A parsed template borrowing from its source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template<'t> {
    segments: Vec<Segment<'t>>,
}

impl<'t> Template<'t> {
    /// Parse `source` into literal text and placeholder references.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Unterminated`] for a dangling `{{` and
    /// [`TemplateError::InvalidAction`] for anything other than `.name`
    /// between the markers.
    pub fn parse(source: &'t str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some((literal, after_open)) = rest.split_once(PLACEHOLDER_OPEN) {
            if !literal.is_empty() {
                segments.push(Segment::Literal(literal));
            }

            let Some((action, tail)) = after_open.split_once(PLACEHOLDER_CLOSE) else {
                return Err(TemplateError::Unterminated {
                    offset: source.len() - rest.len() + literal.len(),
                });
            };

            segments.push(Segment::Placeholder(parse_action(action)?));
            rest = tail;
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest));
        }

        Ok(Self { segments })
    }

    /// Names referenced by the template, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &'t str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(*name),
            Segment::Literal(_) => None,
        })
    }

    /// Referenced names that `bindings` does not cover, in order of
    /// appearance.
    pub fn unbound<'b>(
        &'b self,
        bindings: &'b Bindings<'_>,
    ) -> impl Iterator<Item = &'t str> + 'b {
        self.placeholders()
            .filter(move |name| !bindings.contains_key(*name))
    }

    /// Substitute every placeholder with its bound value.
    ///
    /// Unbound placeholders render as [`MISSING_VALUE`].
    #[must_use]
    pub fn render(&self, bindings: &Bindings<'_>) -> String {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => match bindings.get(*name) {
                    Some(value) => output.push_str(&value.to_string()),
                    None => output.push_str(MISSING_VALUE),
                },
            }
        }
        output
    }
}

/// Whether `source` contains a placeholder opening marker at all.
#[must_use]
pub fn has_placeholders(source: &str) -> bool {
    source.contains(PLACEHOLDER_OPEN)
}

/// Parse and render `source` in one step.
///
/// # Errors
///
/// Propagates any [`TemplateError`] from parsing.
pub fn render(source: &str, bindings: &Bindings<'_>) -> Result<String, TemplateError> {
    Ok(Template::parse(source)?.render(bindings))
}

fn parse_action(raw: &str) -> Result<&str, TemplateError> {
    let action = raw.trim();
    action
        .strip_prefix('.')
        .filter(|name| is_identifier(name))
        .ok_or_else(|| TemplateError::InvalidAction {
            action: action.to_owned(),
        })
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first == '_' || first.is_alphabetic())
        && chars.all(|character| character == '_' || character.is_alphanumeric())
}
