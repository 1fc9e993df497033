//! Derive canonical key prefixes from source file locations.
//!
//! A file at `<root>/mock/dir/valid.json` contributes keys prefixed with
//! `mock.dir.valid`. Directory segments are trimmed of whitespace and stray
//! separators, empty segments are dropped, and the file stem is appended last.

use camino::{Utf8Component, Utf8Path};
use lexicon_common::KEY_SEPARATOR;

const STRAY_SEPARATORS: [char; 2] = ['/', '\\'];

/// Ordered key prefix segments for one source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Derive the prefix for `file` relative to `root`.
    ///
    /// A file outside `root` keeps all of its directory components.
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use lexicon_compiler::KeyPath;
    ///
    /// let path = KeyPath::derive(
    ///     Utf8Path::new("locales"),
    ///     Utf8Path::new("locales/en/messages.json"),
    /// );
    /// assert_eq!(path.canonical_key("hello"), "en.messages.hello");
    /// ```
    #[must_use]
    pub fn derive(root: &Utf8Path, file: &Utf8Path) -> Self {
        let relative = file.strip_prefix(root).unwrap_or(file);

        let mut segments: Vec<String> = relative
            .parent()
            .into_iter()
            .flat_map(Utf8Path::components)
            .filter_map(|component| match component {
                Utf8Component::Normal(part) => Some(part),
                Utf8Component::ParentDir => Some(".."),
                Utf8Component::Prefix(_) | Utf8Component::RootDir | Utf8Component::CurDir => None,
            })
            .filter_map(normalise_segment)
            .collect();

        if let Some(stem) = relative.file_stem() {
            segments.push(stem.to_owned());
        }

        Self { segments }
    }

    /// Prefix segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Join the prefix and `local_key` into a dotted canonical key.
    #[must_use]
    pub fn canonical_key(&self, local_key: &str) -> String {
        let mut key = String::new();
        for segment in &self.segments {
            key.push_str(segment);
            key.push(KEY_SEPARATOR);
        }
        key.push_str(local_key);
        key
    }
}

fn normalise_segment(raw: &str) -> Option<String> {
    let trimmed = raw
        .trim()
        .trim_matches(|candidate| STRAY_SEPARATORS.contains(&candidate))
        .trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
