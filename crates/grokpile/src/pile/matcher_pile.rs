//! # Matcher Pile

use std::{io::BufRead, path::Path};

use crate::{CompiledMatcher, GrokResult, MacroRegistry, MatchResult, MatcherOptions};

/// An ordered fallback chain of [`CompiledMatcher`]s.
///
/// Members are tried in insertion order; the first one to match wins.
///
/// The pile owns one [`MacroRegistry`]. Each member is compiled against a
/// snapshot of the registry taken when it was added, so macros added later
/// only affect members added later.
#[derive(Debug, Default)]
pub struct MatcherPile {
    registry: MacroRegistry,
    options: MatcherOptions,
    matchers: Vec<CompiledMatcher>,
}

impl From<MacroRegistry> for MatcherPile {
    fn from(registry: MacroRegistry) -> Self {
        Self {
            registry,
            ..Default::default()
        }
    }
}

impl MatcherPile {
    /// Create an empty pile, with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pile whose registry holds the builtin base patterns.
    pub fn with_base_patterns() -> GrokResult<Self> {
        Ok(MacroRegistry::with_base_patterns()?.into())
    }

    /// Set the default options used by [`add_pattern`](Self::add_pattern).
    pub fn with_options(
        mut self,
        options: MatcherOptions,
    ) -> Self {
        self.options = options;
        self
    }

    /// The default compile options.
    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    /// The pile's macro registry.
    pub fn registry(&self) -> &MacroRegistry {
        &self.registry
    }

    /// Add (or replace) a macro; see [`MacroRegistry::add_macro`].
    pub fn add_macro(
        &mut self,
        name: impl Into<String>,
        fragment: impl Into<String>,
    ) {
        self.registry.add_macro(name, fragment);
    }

    /// Import macros from source text; see [`MacroRegistry::import_macros_from_source`].
    pub fn import_macros_from_source(
        &mut self,
        source: &str,
    ) -> GrokResult<usize> {
        self.registry.import_macros_from_source(source)
    }

    /// Import macros from a reader; see [`MacroRegistry::import_macros_from_reader`].
    pub fn import_macros_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        origin: &str,
    ) -> GrokResult<usize> {
        self.registry.import_macros_from_reader(reader, origin)
    }

    /// Import macros from a file; see [`MacroRegistry::import_macros_from_path`].
    pub fn import_macros_from_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> GrokResult<usize> {
        self.registry.import_macros_from_path(path)
    }

    /// Import the builtin base patterns.
    pub fn import_base_patterns(&mut self) -> GrokResult<usize> {
        self.registry.import_base_patterns()
    }

    /// Compile `pattern` and append it to the pile.
    ///
    /// ## Arguments
    /// * `pattern` - the root pattern.
    /// * `aliased_only` - hide bare macro references from extraction.
    ///
    /// ## Returns
    /// The new member.
    pub fn compile(
        &mut self,
        pattern: &str,
        aliased_only: bool,
    ) -> GrokResult<&CompiledMatcher> {
        let options = self.options.with_aliased_only(aliased_only);
        self.compile_with(pattern, &options)
    }

    /// Compile `pattern` with the pile's default options, and append it.
    pub fn add_pattern(
        &mut self,
        pattern: &str,
    ) -> GrokResult<&CompiledMatcher> {
        let options = self.options;
        self.compile_with(pattern, &options)
    }

    /// Compile `pattern` with explicit options, and append it.
    pub fn compile_with(
        &mut self,
        pattern: &str,
        options: &MatcherOptions,
    ) -> GrokResult<&CompiledMatcher> {
        let matcher = options.compile(pattern, &self.registry)?;
        Ok(self.push(matcher))
    }

    /// Append an already compiled matcher.
    pub fn push(
        &mut self,
        matcher: CompiledMatcher,
    ) -> &CompiledMatcher {
        self.matchers.push(matcher);
        &self.matchers[self.matchers.len() - 1]
    }

    /// The members, in match order.
    pub fn matchers(&self) -> &[CompiledMatcher] {
        &self.matchers
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Is the pile empty?
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Try each member in order, returning the first match.
    ///
    /// ## Returns
    /// * `Ok(Some((matcher, result)))` for the first member which matched.
    /// * `Ok(None)` if no member matched.
    /// * `Err(_)` if a member's engine failed; later members are not tried.
    pub fn match_first<'s, 'h>(
        &'s self,
        subject: &'h str,
    ) -> GrokResult<Option<(&'s CompiledMatcher, MatchResult<'s, 'h>)>> {
        for matcher in &self.matchers {
            if let Some(result) = matcher.execute(subject)? {
                return Ok(Some((matcher, result)));
            }
        }
        log::trace!("no pile member matched ({} tried)", self.matchers.len());
        Ok(None)
    }
}
