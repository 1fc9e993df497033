//! Merge parsed source files into one catalog.
//!
//! Files are applied strictly in the order given. When two entries share a
//! canonical key the later one silently replaces the earlier; collisions are
//! logged at debug level but never rejected. The first read or parse failure
//! aborts compilation.

use std::collections::BTreeMap;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use lexicon_common::Catalog;
use log::debug;

use crate::discovery::{SourceFile, discover};
use crate::error::CompileError;
use crate::key_path::KeyPath;

const LOG_TARGET: &str = "lexicon::compiler";

/// Discover and compile every supported source file under `root`.
///
/// ```no_run
/// use camino::Utf8Path;
///
/// let catalog = lexicon_compiler::compile(Utf8Path::new("locales"))?;
/// println!("{}", catalog.to_json()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns the first [`CompileError`] raised while walking, reading, or
/// parsing.
pub fn compile(root: &Utf8Path) -> Result<Catalog, CompileError> {
    let sources = discover(root)?;
    debug!(
        target: LOG_TARGET,
        "discovered {} source files under {root}",
        sources.len(),
    );
    merge(root, sources)
}

/// Compile an explicit list of files, keyed relative to `root`.
///
/// Paths with unsupported extensions are skipped without error.
///
/// # Errors
///
/// Returns the first [`CompileError`] raised while reading or parsing.
pub fn compile_files(root: &Utf8Path, files: &[Utf8PathBuf]) -> Result<Catalog, CompileError> {
    let sources = files.iter().filter_map(|path| {
        let detected = SourceFile::detect(path.clone());
        if detected.is_none() {
            debug!(target: LOG_TARGET, "skipping unsupported file {path}");
        }
        detected
    });
    merge(root, sources)
}

/// Read and parse one source file into canonical key/value pairs.
///
/// The file is read fully and released before parsing.
///
/// # Errors
///
/// Returns [`CompileError::Read`] when the file cannot be read and
/// [`CompileError::Parse`] when its content is rejected.
pub fn parse_source(
    root: &Utf8Path,
    source: &SourceFile,
) -> Result<BTreeMap<String, String>, CompileError> {
    let bytes = fs::read(&source.path).map_err(|error| CompileError::Read {
        path: source.path.clone(),
        source: error,
    })?;

    let local = source
        .format
        .parse(&bytes)
        .map_err(|error| CompileError::Parse {
            path: source.path.clone(),
            source: error,
        })?;

    let prefix = KeyPath::derive(root, &source.path);
    Ok(local
        .into_iter()
        .map(|(key, value)| (prefix.canonical_key(&key), value))
        .collect())
}

fn merge(
    root: &Utf8Path,
    sources: impl IntoIterator<Item = SourceFile>,
) -> Result<Catalog, CompileError> {
    let mut entries = BTreeMap::new();

    for source in sources {
        let parsed = parse_source(root, &source)?;
        debug!(
            target: LOG_TARGET,
            "parsed {} entries from {}",
            parsed.len(),
            source.path,
        );

        for (key, value) in parsed {
            if entries.contains_key(&key) {
                debug!(
                    target: LOG_TARGET,
                    "{} overrides the earlier value for `{key}`",
                    source.path,
                );
            }
            entries.insert(key, value);
        }
    }

    Ok(Catalog::new(entries))
}
