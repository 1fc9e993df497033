//! Source discovery for the catalog compiler.
//!
//! The walk is depth-first. Entries within each directory are visited in
//! lexical order of their file names and subdirectories are descended into
//! where they sort, so `dir/sub/a.json` precedes `dir/valid.json`. Only files
//! with a supported extension are returned; everything else in the tree is
//! ignored. Symlinked directories are not followed.

use camino::{Utf8Path, Utf8PathBuf};
use log::trace;

use crate::error::CompileError;
use crate::format::SourceFormat;

const LOG_TARGET: &str = "lexicon::compiler";

/// A discovered source file and its detected format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    /// Location of the file, rooted like the walk root.
    pub path: Utf8PathBuf,
    /// Encoding detected from the extension.
    pub format: SourceFormat,
}

impl SourceFile {
    /// Build a source file for `path` when its extension is supported.
    #[must_use]
    pub fn detect(path: Utf8PathBuf) -> Option<Self> {
        SourceFormat::from_path(&path).map(|format| Self { path, format })
    }
}

/// Walk `root` and return its supported source files in discovery order.
///
/// When `root` is itself a file it is returned on its own, provided its
/// extension is supported.
///
/// # Errors
///
/// Returns [`CompileError::Discovery`] when `root` or any directory beneath it
/// cannot be read, or when an entry name is not valid UTF-8.
pub fn discover(root: &Utf8Path) -> Result<Vec<SourceFile>, CompileError> {
    let metadata = root
        .symlink_metadata()
        .map_err(|source| discovery_error(root, source))?;

    let mut files = Vec::new();
    if metadata.is_dir() {
        walk(root, &mut files)?;
    } else if let Some(file) = SourceFile::detect(root.to_owned()) {
        files.push(file);
    }

    Ok(files)
}

fn walk(directory: &Utf8Path, files: &mut Vec<SourceFile>) -> Result<(), CompileError> {
    let mut entries = directory
        .read_dir_utf8()
        .map_err(|source| discovery_error(directory, source))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| discovery_error(directory, source))?;
    entries.sort_by(|left, right| left.file_name().cmp(right.file_name()));

    for entry in entries {
        let file_type = entry
            .file_type()
            .map_err(|source| discovery_error(entry.path(), source))?;

        if file_type.is_dir() {
            walk(entry.path(), files)?;
        } else if let Some(file) = SourceFile::detect(entry.path().to_owned()) {
            trace!(target: LOG_TARGET, "discovered {}", file.path);
            files.push(file);
        }
    }

    Ok(())
}

fn discovery_error(path: &Utf8Path, source: std::io::Error) -> CompileError {
    CompileError::Discovery {
        path: path.to_owned(),
        source,
    }
}
