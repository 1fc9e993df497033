//! Shared helpers for behaviour-driven suites.
//!
//! Step parameters arrive as raw text, usually wrapped in double quotes in the
//! Gherkin sources. [`StepText`] strips that quoting so steps receive the
//! value the scenario author meant.
//!
//! Each crate's integration tests compile as separate binaries outside the
//! crate, so every crate carries its own copy of this module rather than
//! depending on a shared test-only crate.

use std::convert::Infallible;
use std::str::FromStr;

/// Wrapper for quoted values supplied via behaviour-driven test steps.
#[derive(Clone, Debug)]
pub struct StepText {
    raw: String,
}

impl FromStr for StepText {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let raw = input
            .trim()
            .trim_matches(|candidate| matches!(candidate, '"' | '\''))
            .to_owned();

        Ok(Self { raw })
    }
}

impl AsRef<str> for StepText {
    fn as_ref(&self) -> &str {
        self.raw.as_str()
    }
}

impl StepText {
    /// Consumes the step value, yielding the parsed string.
    pub fn into_inner(self) -> String {
        self.raw
    }
}
