//! Source encodings and their parsers.
//!
//! Each supported encoding turns one file's bytes into a flat map of local
//! key to raw template string. JSON, YAML, and TOML sources must be a single
//! level object of strings. CSV sources hold `key,value` records.
//!
//! CSV records with more than two fields are accepted and the extra fields
//! ignored; only records with fewer than two fields are rejected. Every record
//! must have the same number of fields as the first one, so a file mixing
//! two- and three-column rows is rejected as invalid CSV.

use std::collections::BTreeMap;

use camino::Utf8Path;

use crate::error::FormatError;

/// Flat mapping from in-file key to raw template string.
pub type LocalEntries = BTreeMap<String, String>;

/// Signature shared by every format parser.
pub type Parser = fn(&[u8]) -> Result<LocalEntries, FormatError>;

/// Supported source encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// `.json` objects.
    Json,
    /// `.yaml` and `.yml` mappings.
    Yaml,
    /// `.toml` tables.
    Toml,
    /// `.csv` two-column tables.
    Csv,
}

/// Extension lookup table; matching is exact and case-sensitive.
const EXTENSIONS: [(&str, SourceFormat); 5] = [
    ("json", SourceFormat::Json),
    ("yaml", SourceFormat::Yaml),
    ("yml", SourceFormat::Yaml),
    ("toml", SourceFormat::Toml),
    ("csv", SourceFormat::Csv),
];

impl SourceFormat {
    /// Detect the format for a bare extension such as `yml`.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        EXTENSIONS
            .iter()
            .find(|(candidate, _)| *candidate == extension)
            .map(|(_, format)| *format)
    }

    /// Detect the format from a path's extension.
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use lexicon_compiler::SourceFormat;
    ///
    /// assert_eq!(
    ///     SourceFormat::from_path(Utf8Path::new("en/messages.yml")),
    ///     Some(SourceFormat::Yaml),
    /// );
    /// assert_eq!(SourceFormat::from_path(Utf8Path::new("README.txt")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        path.extension().and_then(Self::from_extension)
    }

    /// Parser function for this format.
    #[must_use]
    pub fn parser(self) -> Parser {
        match self {
            Self::Json => parse_json,
            Self::Yaml => parse_yaml,
            Self::Toml => parse_toml,
            Self::Csv => parse_csv,
        }
    }

    /// Parse `bytes` as this format.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] for malformed content, non-string members, or
    /// CSV rows with fewer than two fields.
    pub fn parse(self, bytes: &[u8]) -> Result<LocalEntries, FormatError> {
        (self.parser())(bytes)
    }
}

fn require_strings<V>(
    members: BTreeMap<String, V>,
    into_text: impl Fn(V) -> Option<String>,
) -> Result<LocalEntries, FormatError> {
    members
        .into_iter()
        .map(|(key, value)| match into_text(value) {
            Some(text) => Ok((key, text)),
            None => Err(FormatError::NonStringValue { key }),
        })
        .collect()
}

fn parse_json(bytes: &[u8]) -> Result<LocalEntries, FormatError> {
    let members: BTreeMap<String, serde_json::Value> = serde_json::from_slice(bytes)?;
    require_strings(members, |value| match value {
        serde_json::Value::String(text) => Some(text),
        _ => None,
    })
}

fn parse_yaml(bytes: &[u8]) -> Result<LocalEntries, FormatError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(LocalEntries::new());
    }

    let members: Option<BTreeMap<String, serde_yaml::Value>> = serde_yaml::from_slice(bytes)?;
    require_strings(members.unwrap_or_default(), |value| match value {
        serde_yaml::Value::String(text) => Some(text),
        _ => None,
    })
}

fn parse_toml(bytes: &[u8]) -> Result<LocalEntries, FormatError> {
    let source = std::str::from_utf8(bytes)?;
    let members: BTreeMap<String, toml::Value> = toml::from_str(source)?;
    require_strings(members, |value| match value {
        toml::Value::String(text) => Some(text),
        _ => None,
    })
}

fn parse_csv(bytes: &[u8]) -> Result<LocalEntries, FormatError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(bytes);
    let mut entries = LocalEntries::new();

    for result in reader.records() {
        let record = result?;
        match (record.get(0), record.get(1)) {
            (Some(key), Some(value)) => {
                entries.insert(key.to_owned(), value.to_owned());
            }
            _ => {
                return Err(FormatError::MalformedRow {
                    line: record.position().map_or(0, csv::Position::line),
                    fields: record.len(),
                });
            }
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entries(pairs: &[(&str, &str)]) -> LocalEntries {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[rstest]
    #[case("json", Some(SourceFormat::Json))]
    #[case("yaml", Some(SourceFormat::Yaml))]
    #[case("yml", Some(SourceFormat::Yaml))]
    #[case("toml", Some(SourceFormat::Toml))]
    #[case("csv", Some(SourceFormat::Csv))]
    #[case("txt", None)]
    #[case("JSON", None)]
    #[case("", None)]
    fn detects_formats_by_extension(#[case] extension: &str, #[case] expected: Option<SourceFormat>) {
        assert_eq!(SourceFormat::from_extension(extension), expected);
    }

    #[rstest]
    #[case(SourceFormat::Json, "{\"test1\":\"test2\"}")]
    #[case(SourceFormat::Yaml, "test1: test2\n")]
    #[case(SourceFormat::Toml, "test1 = \"test2\"\n")]
    #[case(SourceFormat::Csv, "test1,test2\n")]
    fn parses_a_single_entry(#[case] format: SourceFormat, #[case] source: &str) {
        let parsed = format.parse(source.as_bytes()).expect("source should parse");
        assert_eq!(parsed, entries(&[("test1", "test2")]));
    }

    #[rstest]
    #[case(SourceFormat::Json, "{\"count\": 3}")]
    #[case(SourceFormat::Json, "{\"nested\": {\"key\": \"value\"}}")]
    #[case(SourceFormat::Yaml, "count: 3\n")]
    #[case(SourceFormat::Yaml, "nested:\n  key: value\n")]
    #[case(SourceFormat::Toml, "count = 3\n")]
    #[case(SourceFormat::Toml, "[nested]\nkey = \"value\"\n")]
    fn rejects_non_string_members(#[case] format: SourceFormat, #[case] source: &str) {
        let outcome = format.parse(source.as_bytes());
        assert!(
            matches!(outcome, Err(FormatError::NonStringValue { .. })),
            "expected a non-string error, got {outcome:?}"
        );
    }

    #[rstest]
    #[case(SourceFormat::Json, "{\"test\": \"test\"")]
    #[case(SourceFormat::Json, "[\"test\"]")]
    #[case(SourceFormat::Yaml, "test: [unclosed\n")]
    #[case(SourceFormat::Toml, "test = \n")]
    fn rejects_malformed_syntax(#[case] format: SourceFormat, #[case] source: &str) {
        assert!(format.parse(source.as_bytes()).is_err());
    }

    #[rstest]
    #[case("")]
    #[case("  \n")]
    fn treats_blank_yaml_as_empty(#[case] source: &str) {
        let parsed = SourceFormat::Yaml.parse(source.as_bytes()).expect("blank YAML");
        assert!(parsed.is_empty());
    }

    #[rstest]
    fn rejects_toml_that_is_not_utf8() {
        let outcome = SourceFormat::Toml.parse(&[0x74, 0x3d, 0xff]);
        assert!(matches!(outcome, Err(FormatError::Encoding(_))));
    }

    #[rstest]
    fn csv_accepts_two_columns() {
        let parsed = SourceFormat::Csv.parse(b"test,test").expect("valid CSV");
        assert_eq!(parsed, entries(&[("test", "test")]));
    }

    #[rstest]
    fn csv_ignores_extra_columns() {
        let parsed = SourceFormat::Csv.parse(b"test,test,test").expect("valid CSV");
        assert_eq!(parsed, entries(&[("test", "test")]));
    }

    #[rstest]
    fn csv_rejects_single_column_rows() {
        let outcome = SourceFormat::Csv.parse(b"test\n");
        assert!(
            matches!(outcome, Err(FormatError::MalformedRow { line: 1, fields: 1 })),
            "expected a malformed row error, got {outcome:?}"
        );
    }

    #[rstest]
    fn csv_rejects_rows_of_differing_width() {
        let outcome = SourceFormat::Csv.parse(b"test,test\ntest,test,test");
        assert!(matches!(outcome, Err(FormatError::Csv(_))));
    }

    #[rstest]
    fn csv_honours_quoted_fields() {
        let parsed = SourceFormat::Csv
            .parse(b"greeting,\"Hello, {{.name}}\"\nfarewell,Bye\n")
            .expect("valid CSV");
        assert_eq!(
            parsed,
            entries(&[("farewell", "Bye"), ("greeting", "Hello, {{.name}}")])
        );
    }
}
