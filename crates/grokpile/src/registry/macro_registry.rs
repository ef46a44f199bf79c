//! # Macro Registry

use std::{io::BufRead, path::Path, sync::Arc};

use crate::{
    CompiledMatcher,
    GrokError,
    GrokResult,
    MatcherOptions,
    registry::{
        BASE_PATTERNS,
        MacroDefinition,
        load_macro_definitions_path,
        parse_macro_source,
        read_macro_definitions,
    },
    types::GrokHashMap,
};

/// A table of macro fragments, keyed by macro name.
pub type MacroTable = GrokHashMap<String, String>;

/// Accumulates named macro fragments.
///
/// The table is shared copy-on-write: [`snapshot`](Self::snapshot) is cheap,
/// and a snapshot never observes later edits. Matchers compile against a
/// snapshot, so adding macros only affects matchers compiled afterward.
#[derive(Debug, Clone, Default)]
pub struct MacroRegistry {
    macros: Arc<MacroTable>,
}

impl From<MacroTable> for MacroRegistry {
    fn from(macros: MacroTable) -> Self {
        Self {
            macros: Arc::new(macros),
        }
    }
}

impl MacroRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the builtin base patterns.
    pub fn with_base_patterns() -> GrokResult<Self> {
        let mut registry = Self::new();
        registry.import_base_patterns()?;
        Ok(registry)
    }

    /// The number of macros.
    pub fn len(&self) -> usize {
        self.macros.len()
    }

    /// Is the registry empty?
    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }

    /// Is there a macro named `name`?
    pub fn contains_macro(
        &self,
        name: &str,
    ) -> bool {
        self.macros.contains_key(name)
    }

    /// Get the fragment for `name`.
    pub fn get_macro(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.macros.get(name).map(String::as_str)
    }

    /// Iterate over the macro names, in no particular order.
    pub fn macro_names(&self) -> impl Iterator<Item = &str> {
        self.macros.keys().map(String::as_str)
    }

    /// Take a snapshot of the current table.
    pub fn snapshot(&self) -> Arc<MacroTable> {
        self.macros.clone()
    }

    /// Add (or replace) a macro.
    ///
    /// The fragment is not validated until a pattern referencing it is compiled.
    pub fn add_macro(
        &mut self,
        name: impl Into<String>,
        fragment: impl Into<String>,
    ) {
        Arc::make_mut(&mut self.macros).insert(name.into(), fragment.into());
    }

    /// Remove a macro.
    ///
    /// ## Returns
    /// The removed fragment, if there was one.
    pub fn remove_macro(
        &mut self,
        name: &str,
    ) -> Option<String> {
        if !self.macros.contains_key(name) {
            return None;
        }
        Arc::make_mut(&mut self.macros).remove(name)
    }

    /// Add every definition in `definitions`.
    ///
    /// ## Returns
    /// The number of definitions added.
    pub fn extend_macros<I>(
        &mut self,
        definitions: I,
    ) -> usize
    where
        I: IntoIterator<Item = MacroDefinition>,
    {
        let macros = Arc::make_mut(&mut self.macros);
        let mut count = 0;
        for MacroDefinition { name, fragment } in definitions {
            macros.insert(name, fragment);
            count += 1;
        }
        count
    }

    /// Import macros from in-memory source text.
    ///
    /// The source is parsed completely before any macro is added;
    /// a malformed source leaves the registry unchanged.
    ///
    /// ## Returns
    /// The number of macros imported.
    pub fn import_macros_from_source(
        &mut self,
        source: &str,
    ) -> GrokResult<usize> {
        let definitions = parse_macro_source(source)?;
        Ok(self.extend_macros(definitions))
    }

    /// Import macros from a [`BufRead`] stream.
    ///
    /// ## Arguments
    /// * `reader` - the line reader.
    /// * `origin` - label for error messages.
    pub fn import_macros_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        origin: &str,
    ) -> GrokResult<usize> {
        let definitions = read_macro_definitions(reader, origin)?;
        Ok(self.extend_macros(definitions))
    }

    /// Import macros from a file.
    pub fn import_macros_from_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> GrokResult<usize> {
        let path = path.as_ref();
        let definitions = load_macro_definitions_path(path)?;
        let count = self.extend_macros(definitions);
        log::info!("Imported {count} macros from {}", path.display());
        Ok(count)
    }

    /// Import the builtin base patterns.
    pub fn import_base_patterns(&mut self) -> GrokResult<usize> {
        self.import_macros_from_source(BASE_PATTERNS)
            .map_err(|err| GrokError::ResourceInit(format!("builtin base patterns: {err}")))
    }

    /// Compile `pattern` against a snapshot of this registry.
    ///
    /// ## Arguments
    /// * `pattern` - the root pattern.
    /// * `aliased_only` - hide bare macro references from extraction.
    pub fn compile(
        &self,
        pattern: &str,
        aliased_only: bool,
    ) -> GrokResult<CompiledMatcher> {
        MatcherOptions::default()
            .with_aliased_only(aliased_only)
            .compile(pattern, self)
    }
}
