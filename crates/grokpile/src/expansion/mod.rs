//! # Macro Expansion
//!
//! Rewrites a root pattern into one engine regex, replacing each
//! `%{NAME}` / `%{NAME:alias}` reference with the (recursively expanded)
//! macro fragment, wrapped in a generated named group.
//!
//! Generated groups are named [`GROUP_PREFIX`] + a sequence number, and
//! [`ExpandedPattern::macro_captures`] records which raw capture name each
//! generated group carries. Groups open in reference order, so the engine's
//! group numbering matches the order references are met in the text.
//!
//! Raw named groups may not use [`GROUP_PREFIX`]. Expansion is bounded by
//! [`MAX_MACRO_DEPTH`] levels of nesting and a caller-supplied length limit.

use std::sync::LazyLock;

use crate::{
    errors::CompileFailure,
    names::encode_macro_capture,
    registry::{MacroTable, is_valid_macro_name},
};

/// Prefix of generated group names; reserved.
pub const GROUP_PREFIX: &str = "__grok";

/// The deepest chain of macro references a pattern may expand through.
pub const MAX_MACRO_DEPTH: usize = 256;

/// The default limit on the length of an expanded pattern, in bytes.
pub const DEFAULT_EXPANDED_LIMIT: usize = 1 << 24;

static MACRO_REFERENCE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"%\{[^{}]*\}").unwrap());

static RESERVED_GROUP: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(&format!(r"\(\?P?<({GROUP_PREFIX}[^>]*)>")).unwrap()
});

/// A generated group standing in for one macro reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroCapture {
    /// The engine group name.
    pub group_name: String,

    /// The raw capture name; see [`encode_macro_capture`].
    pub raw_name: String,
}

/// The result of expanding a root pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedPattern {
    /// The engine regex.
    pub regex: String,

    /// One entry per generated group, in group order.
    pub macro_captures: Vec<MacroCapture>,
}

/// Expand every macro reference in `pattern`.
///
/// ## Arguments
/// * `pattern` - the root pattern.
/// * `macros` - the macro table to resolve references against.
/// * `max_len` - the longest expanded pattern to build, in bytes.
///
/// ## Returns
/// The expanded pattern, or the first failure met while expanding.
pub fn expand_pattern(
    pattern: &str,
    macros: &MacroTable,
    max_len: usize,
) -> Result<ExpandedPattern, CompileFailure> {
    let mut expander = Expander {
        macros,
        max_len,
        captures: Vec::new(),
        stack: Vec::new(),
    };

    let mut regex = String::with_capacity(pattern.len());
    expander.expand_into(pattern, &mut regex)?;

    Ok(ExpandedPattern {
        regex,
        macro_captures: expander.captures,
    })
}

/// Split the body of a `%{...}` reference into name and optional alias.
fn parse_reference(body: &str) -> Result<(&str, Option<&str>), CompileFailure> {
    let (name, alias) = match body.split_once(':') {
        Some((name, alias)) => (name.trim(), Some(alias.trim())),
        None => (body.trim(), None),
    };

    if !is_valid_macro_name(name) || alias.is_some_and(str::is_empty) {
        return Err(CompileFailure::MalformedReference(format!("%{{{body}}}")));
    }
    Ok((name, alias))
}

struct Expander<'a> {
    macros: &'a MacroTable,
    max_len: usize,
    captures: Vec<MacroCapture>,
    stack: Vec<&'a str>,
}

impl<'a> Expander<'a> {
    fn expand_into(
        &mut self,
        pattern: &str,
        out: &mut String,
    ) -> Result<(), CompileFailure> {
        let mut last = 0;
        for reference in MACRO_REFERENCE.find_iter(pattern) {
            self.push_literal(&pattern[last..reference.start()], out)?;
            last = reference.end();

            let text = reference.as_str();
            let (name, alias) = parse_reference(&text[2..text.len() - 1])?;

            let macros = self.macros;
            let Some((name, fragment)) = macros.get_key_value(name) else {
                return Err(CompileFailure::UndefinedMacro(name.to_string()));
            };
            let name = name.as_str();

            if self.stack.contains(&name) {
                let mut chain = self.stack.join(" -> ");
                chain.push_str(" -> ");
                chain.push_str(name);
                return Err(CompileFailure::RecursiveMacro(chain));
            }
            if self.stack.len() >= MAX_MACRO_DEPTH {
                return Err(CompileFailure::ExpansionLimit(format!(
                    "macros nested deeper than {MAX_MACRO_DEPTH} at {name}"
                )));
            }

            let group_name = format!("{GROUP_PREFIX}{}", self.captures.len());
            out.push_str("(?P<");
            out.push_str(&group_name);
            out.push('>');
            self.check_len(out)?;

            self.captures.push(MacroCapture {
                group_name,
                raw_name: encode_macro_capture(name, alias),
            });

            self.stack.push(name);
            self.expand_into(fragment, out)?;
            self.stack.pop();

            out.push(')');
        }
        self.push_literal(&pattern[last..], out)
    }

    /// Copy pattern text between references, rejecting reserved group names.
    fn push_literal(
        &self,
        text: &str,
        out: &mut String,
    ) -> Result<(), CompileFailure> {
        if let Some(caps) = RESERVED_GROUP.captures(text) {
            return Err(CompileFailure::ReservedGroupName(caps[1].to_string()));
        }
        out.push_str(text);
        self.check_len(out)
    }

    fn check_len(
        &self,
        out: &str,
    ) -> Result<(), CompileFailure> {
        if out.len() > self.max_len {
            return Err(CompileFailure::ExpansionLimit(format!(
                "expanded pattern longer than {} bytes",
                self.max_len
            )));
        }
        Ok(())
    }
}
