//! # Builtin Base Patterns

/// The builtin base macro source.
///
/// Common building blocks for log lines: numbers, words, hosts, URIs, dates.
pub const BASE_PATTERNS: &str = include_str!("../../patterns/base");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::parse_macro_source;

    #[test]
    fn test_base_patterns_parse() {
        let definitions = parse_macro_source(BASE_PATTERNS).unwrap();
        let names: Vec<&str> = definitions.iter().map(|d| d.name.as_str()).collect();

        for expected in [
            "DAY",
            "MONTH",
            "WORD",
            "NOTSPACE",
            "INT",
            "NUMBER",
            "BASE10NUM",
            "IP",
            "HTTPDATE",
            "QS",
            "URI",
            "URIHOST",
            "URIPATH",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }
}
