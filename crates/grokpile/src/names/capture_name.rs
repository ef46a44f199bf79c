//! # Capture Names
//!
//! Every named group in a compiled matcher carries a raw name, in one of three forms:
//!
//! | raw name     | source                     | logical key |
//! |--------------|----------------------------|-------------|
//! | `DAY:day`    | `%{DAY:day}`               | `day`       |
//! | `DAY`        | `%{DAY}`                   | `DAY`       |
//! | `:word`      | `(?P<word>...)`            | `:word`     |
//!
//! The leading `:` marks a group the engine named directly, with no macro
//! involvement. Raw names are decoded once into a [`CaptureName`], and
//! extraction works on the decoded form.

use std::sync::Arc;

/// Separator between a macro name and its alias in a raw capture name.
pub const ALIAS_SEPARATOR: char = ':';

/// Where a named capture came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureKind {
    /// A macro reference with an alias: `%{DAY:day}`.
    MacroAlias,

    /// A macro reference without an alias: `%{DAY}`.
    MacroBare,

    /// A group named in the regex itself: `(?P<word>...)`.
    RawNamed,
}

/// A decoded capture name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaptureName {
    kind: CaptureKind,
    key: Arc<str>,
    name: Arc<str>,
    macro_name: Option<Arc<str>>,
}

impl CaptureName {
    /// Decode a raw capture name.
    pub fn decode(raw: &str) -> Self {
        if let Some(name) = raw.strip_prefix(ALIAS_SEPARATOR) {
            return Self {
                kind: CaptureKind::RawNamed,
                key: raw.into(),
                name: name.into(),
                macro_name: None,
            };
        }

        match raw.split_once(ALIAS_SEPARATOR) {
            Some((macro_name, alias)) => {
                let alias: Arc<str> = alias.into();
                Self {
                    kind: CaptureKind::MacroAlias,
                    key: alias.clone(),
                    name: alias,
                    macro_name: Some(macro_name.into()),
                }
            }
            None => {
                let name: Arc<str> = raw.into();
                Self {
                    kind: CaptureKind::MacroBare,
                    key: name.clone(),
                    name: name.clone(),
                    macro_name: Some(name),
                }
            }
        }
    }

    /// The capture kind.
    pub fn kind(&self) -> CaptureKind {
        self.kind
    }

    /// The logical key, as reported by the all-captures view and the walk.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The logical key, shared.
    pub fn key_arc(&self) -> &Arc<str> {
        &self.key
    }

    /// The caller-chosen name: the alias, the raw group name without its
    /// `:` sentinel, or the macro name for bare references.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The macro this capture was produced by, if any.
    pub fn macro_name(&self) -> Option<&str> {
        self.macro_name.as_deref()
    }

    /// Was this capture explicitly named by the pattern author?
    ///
    /// True for macro aliases and raw named groups; false for bare macro references.
    pub fn is_aliased(&self) -> bool {
        !matches!(self.kind, CaptureKind::MacroBare)
    }

    /// The key under which this capture appears in the collapsed view.
    ///
    /// ## Returns
    /// `None` for bare macro references, which the collapsed view excludes.
    pub fn collapsed_key(&self) -> Option<&Arc<str>> {
        match self.kind {
            CaptureKind::MacroAlias => Some(&self.key),
            CaptureKind::RawNamed => Some(&self.name),
            CaptureKind::MacroBare => None,
        }
    }
}

/// Encode the raw name of a macro reference capture.
///
/// ## Arguments
/// * `macro_name` - the referenced macro.
/// * `alias` - the optional alias from `%{MACRO:alias}`.
pub fn encode_macro_capture(
    macro_name: &str,
    alias: Option<&str>,
) -> String {
    match alias {
        Some(alias) => format!("{macro_name}{ALIAS_SEPARATOR}{alias}"),
        None => macro_name.to_string(),
    }
}

/// Encode the raw name of a group the engine named directly.
pub fn encode_raw_capture(group_name: &str) -> String {
    format!("{ALIAS_SEPARATOR}{group_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_alias() {
        let name = CaptureName::decode("DAY:day");
        assert_eq!(name.kind(), CaptureKind::MacroAlias);
        assert_eq!(name.key(), "day");
        assert_eq!(name.name(), "day");
        assert_eq!(name.macro_name(), Some("DAY"));
        assert!(name.is_aliased());
        assert_eq!(name.collapsed_key().map(|k| &**k), Some("day"));
    }

    #[test]
    fn test_decode_alias_with_separator() {
        let name = CaptureName::decode("NUMBER:num:int");
        assert_eq!(name.kind(), CaptureKind::MacroAlias);
        assert_eq!(name.key(), "num:int");
        assert_eq!(name.macro_name(), Some("NUMBER"));
    }

    #[test]
    fn test_decode_bare() {
        let name = CaptureName::decode("MONTH");
        assert_eq!(name.kind(), CaptureKind::MacroBare);
        assert_eq!(name.key(), "MONTH");
        assert_eq!(name.macro_name(), Some("MONTH"));
        assert!(!name.is_aliased());
        assert_eq!(name.collapsed_key(), None);
    }

    #[test]
    fn test_decode_raw() {
        let name = CaptureName::decode(":word");
        assert_eq!(name.kind(), CaptureKind::RawNamed);
        assert_eq!(name.key(), ":word");
        assert_eq!(name.name(), "word");
        assert_eq!(name.macro_name(), None);
        assert!(name.is_aliased());
        assert_eq!(name.collapsed_key().map(|k| &**k), Some("word"));
    }

    #[test]
    fn test_encode_decode_agree() {
        assert_eq!(
            CaptureName::decode(&encode_macro_capture("DAY", Some("day"))).key(),
            "day"
        );
        assert_eq!(
            CaptureName::decode(&encode_macro_capture("DAY", None)).key(),
            "DAY"
        );
        assert_eq!(
            CaptureName::decode(&encode_raw_capture("word")).key(),
            ":word"
        );
    }
}
