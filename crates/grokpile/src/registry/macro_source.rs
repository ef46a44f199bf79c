//! # Macro Source IO
//!
//! Macro sources are UTF-8 text, one macro per line:
//!
//! ```text
//! # comments and blank lines are ignored.
//! DAY (?:Mon(?:day)?|Tue(?:sday)?|Wed(?:nesday)?)
//! WEEKDAY %{DAY}
//! ```
//!
//! The first run of whitespace separates the name from the fragment;
//! the fragment keeps any whitespace after that.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{GrokError, GrokResult};

/// Origin label used for in-memory sources.
pub const IN_MEMORY_ORIGIN: &str = "<source>";

/// One named pattern fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacroDefinition {
    /// The macro name.
    pub name: String,

    /// The pattern fragment; may reference other macros.
    pub fragment: String,
}

impl MacroDefinition {
    /// Create a new definition.
    pub fn new(
        name: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            fragment: fragment.into(),
        }
    }
}

/// Is `name` usable as a macro name?
///
/// Names are non-empty runs of ASCII alphanumerics, `_`, `-` and `.`.
pub fn is_valid_macro_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'))
}

/// Parse one source line.
///
/// ## Returns
/// `Ok(None)` for blank and comment lines; `Err(reason)` for malformed lines.
fn parse_macro_line(line: &str) -> Result<Option<MacroDefinition>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (name, fragment) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (trimmed, ""),
    };

    if !is_valid_macro_name(name) {
        return Err(format!("invalid macro name {name:?}"));
    }
    if fragment.is_empty() {
        return Err(format!("missing pattern fragment for macro {name:?}"));
    }

    Ok(Some(MacroDefinition::new(name, fragment)))
}

/// Parse macro definitions from in-memory source text.
///
/// ## Arguments
/// * `source` - the source text.
///
/// ## Returns
/// The definitions in source order, or [`GrokError::Import`] for the first malformed line.
pub fn parse_macro_source(source: &str) -> GrokResult<Vec<MacroDefinition>> {
    read_macro_definitions(source.as_bytes(), IN_MEMORY_ORIGIN)
}

/// Read macro definitions from a [`BufRead`] stream.
///
/// ## Arguments
/// * `reader` - the line reader.
/// * `origin` - label for error messages.
pub fn read_macro_definitions<R: BufRead>(
    reader: R,
    origin: &str,
) -> GrokResult<Vec<MacroDefinition>> {
    let mut definitions = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| GrokError::import(origin, err.to_string()))?;
        match parse_macro_line(&line) {
            Ok(Some(definition)) => definitions.push(definition),
            Ok(None) => (),
            Err(reason) => {
                return Err(GrokError::import(origin, format!("line {}: {reason}", idx + 1)));
            }
        }
    }
    Ok(definitions)
}

/// Load macro definitions from a file.
///
/// # Arguments
/// * `path` - the path to the macro file.
pub fn load_macro_definitions_path<P: AsRef<Path>>(path: P) -> GrokResult<Vec<MacroDefinition>> {
    let path = path.as_ref();
    let origin = path.display().to_string();

    let file = File::open(path).map_err(|err| GrokError::import(&origin, err.to_string()))?;
    let reader = BufReader::new(file);

    read_macro_definitions(reader, &origin)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_source() {
        let source = "\
# leading comment

DAY (?:Mon|Tue)
   # indented comment
SPACED\t  a b  c
CRLF x+\r
";
        let definitions = parse_macro_source(source).unwrap();
        assert_eq!(
            definitions,
            vec![
                MacroDefinition::new("DAY", "(?:Mon|Tue)"),
                MacroDefinition::new("SPACED", "a b  c"),
                MacroDefinition::new("CRLF", "x+"),
            ]
        );
    }

    #[test]
    fn test_missing_fragment() {
        let err = parse_macro_source("OK a\nLONELY\n").unwrap_err();
        match err {
            GrokError::Import { origin, reason } => {
                assert_eq!(origin, IN_MEMORY_ORIGIN);
                assert_eq!(reason, r#"line 2: missing pattern fragment for macro "LONELY""#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_name() {
        let err = parse_macro_source("BAD{NAME} a\n").unwrap_err();
        assert!(matches!(err, GrokError::Import { .. }));
    }

    #[test]
    fn test_valid_names() {
        assert!(is_valid_macro_name("URIPATHPARAM"));
        assert!(is_valid_macro_name("S3_REQUEST_LINE"));
        assert!(is_valid_macro_name("a.b-c"));
        assert!(!is_valid_macro_name(""));
        assert!(!is_valid_macro_name("A:B"));
        assert!(!is_valid_macro_name("%{A}"));
    }

    #[test]
    fn test_load_path() {
        tempdir::TempDir::new("macro_test")
            .and_then(|dir| {
                let path = dir.path().join("patterns");
                let mut file = File::create(&path)?;
                writeln!(file, "# test patterns")?;
                writeln!(file, "WORD \\b\\w+\\b")?;
                drop(file);

                let definitions = load_macro_definitions_path(&path).expect("Failed to load");
                assert_eq!(definitions, vec![MacroDefinition::new("WORD", r"\b\w+\b")]);

                let missing = load_macro_definitions_path(dir.path().join("missing"));
                assert!(matches!(missing, Err(GrokError::Import { .. })));

                Ok(())
            })
            .unwrap();
    }
}
