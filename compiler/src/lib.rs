//! Catalog compiler for Lexicon.
//!
//! Walks a tree of JSON, YAML, TOML, and CSV translation sources, derives a
//! dotted key for every entry from its file's location, and merges everything
//! into one [`Catalog`]. A file at `<root>/en/messages.json` holding
//! `{"hello": "Hello"}` contributes `en.messages.hello`.
//!
//! Later files override earlier ones on key collisions, in discovery order.
//! Any unreadable or malformed source aborts the build with a
//! [`CompileError`] naming the file.
//!
//! [`Catalog`]: lexicon_common::Catalog

pub mod compile;
pub mod discovery;
pub mod error;
pub mod format;
pub mod key_path;

pub use compile::{compile, compile_files, parse_source};
pub use discovery::{SourceFile, discover};
pub use error::{CompileError, FormatError};
pub use format::{LocalEntries, SourceFormat};
pub use key_path::KeyPath;
