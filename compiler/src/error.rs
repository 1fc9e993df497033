//! Error types for catalog compilation.
//!
//! Every variant names the file or directory involved so a failed build
//! points straight at the offending source. Compilation stops at the first
//! error; no partial catalog is ever returned.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while turning one file's bytes into local entries.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The JSON document is malformed or holds non-string members.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML document is malformed or is not a mapping.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The TOML document is malformed or holds non-string members.
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The CSV reader rejected the input.
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A CSV record had fewer than the two required fields.
    #[error("malformed CSV row on line {line}: expected at least 2 fields, found {fields}")]
    MalformedRow {
        /// One-based line the record starts on.
        line: u64,
        /// Number of fields the record held.
        fields: usize,
    },

    /// A member held something other than a string.
    #[error("value for `{key}` is not a string")]
    NonStringValue {
        /// Key of the offending member.
        key: String,
    },

    /// The source is not valid UTF-8.
    #[error("source is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Errors that abort catalog compilation.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The input tree could not be traversed.
    #[error("failed to walk {path}")]
    Discovery {
        /// Directory or entry that could not be read.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A discovered source file could not be read.
    #[error("failed to read {path}")]
    Read {
        /// File that could not be read.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A source file held malformed content.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File whose content was rejected.
        path: Utf8PathBuf,
        /// The format-specific cause.
        #[source]
        source: FormatError,
    },
}

impl CompileError {
    /// Path of the file or directory the error concerns.
    #[must_use]
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            Self::Discovery { path, .. } | Self::Read { path, .. } | Self::Parse { path, .. } => {
                path
            }
        }
    }
}
