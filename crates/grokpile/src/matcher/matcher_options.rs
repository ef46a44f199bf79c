//! # Matcher Options

use crate::{
    CompiledMatcher,
    GrokResult,
    MacroRegistry,
    regex::{EngineLimits, RegexWrapperPattern},
};

/// Which regex engine a matcher compiles with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineSelection {
    /// Only the `regex` crate; look-around is rejected.
    Basic,

    /// Only the `fancy_regex` crate.
    Fancy,

    /// Try `regex` first, and fall up to `fancy_regex` if the pattern needs it.
    #[default]
    Adaptive,
}

impl EngineSelection {
    /// Label `pattern` for this engine selection.
    pub fn label(
        self,
        pattern: String,
    ) -> RegexWrapperPattern {
        match self {
            Self::Basic => RegexWrapperPattern::Basic(pattern),
            Self::Fancy => RegexWrapperPattern::Fancy(pattern),
            Self::Adaptive => RegexWrapperPattern::Adaptive(pattern),
        }
    }
}

/// Options for compiling a [`CompiledMatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatcherOptions {
    /// Hide bare macro references (`%{DAY}`) from the all-captures view and the walk.
    ///
    /// This is a presentation filter; the engine still produces every group.
    pub aliased_only: bool,

    /// Engine selection.
    pub engine: EngineSelection,

    /// Engine resource limits.
    pub limits: EngineLimits,
}

impl MatcherOptions {
    /// Gets the configured aliased-only value.
    pub fn aliased_only(&self) -> bool {
        self.aliased_only
    }

    /// Sets the configured aliased-only value.
    pub fn set_aliased_only(
        &mut self,
        aliased_only: bool,
    ) {
        self.aliased_only = aliased_only;
    }

    /// Sets the configured aliased-only value.
    pub fn with_aliased_only(
        mut self,
        aliased_only: bool,
    ) -> Self {
        self.set_aliased_only(aliased_only);
        self
    }

    /// Gets the configured engine selection.
    pub fn engine(&self) -> EngineSelection {
        self.engine
    }

    /// Sets the configured engine selection.
    pub fn set_engine(
        &mut self,
        engine: EngineSelection,
    ) {
        self.engine = engine;
    }

    /// Sets the configured engine selection.
    pub fn with_engine(
        mut self,
        engine: EngineSelection,
    ) -> Self {
        self.set_engine(engine);
        self
    }

    /// Sets the compiled program size limit, in bytes.
    pub fn with_size_limit(
        mut self,
        size_limit: usize,
    ) -> Self {
        self.limits.size_limit = Some(size_limit);
        self
    }

    /// Sets the `fancy_regex` backtracking step limit.
    pub fn with_backtrack_limit(
        mut self,
        backtrack_limit: usize,
    ) -> Self {
        self.limits.backtrack_limit = Some(backtrack_limit);
        self
    }

    /// Compile `pattern` against a snapshot of `registry`.
    pub fn compile(
        &self,
        pattern: &str,
        registry: &MacroRegistry,
    ) -> GrokResult<CompiledMatcher> {
        CompiledMatcher::compile(pattern, registry.snapshot(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options() {
        let options = MatcherOptions::default();
        assert!(!options.aliased_only());
        assert_eq!(options.engine(), EngineSelection::Adaptive);
        assert_eq!(options.limits, EngineLimits::default());

        let options = options
            .with_aliased_only(true)
            .with_engine(EngineSelection::Fancy)
            .with_size_limit(1 << 20)
            .with_backtrack_limit(1000);
        assert!(options.aliased_only());
        assert_eq!(options.engine(), EngineSelection::Fancy);
        assert_eq!(options.limits.size_limit, Some(1 << 20));
        assert_eq!(options.limits.backtrack_limit, Some(1000));
    }

    #[test]
    fn test_engine_label() {
        assert_eq!(
            EngineSelection::Basic.label("x".to_string()),
            RegexWrapperPattern::Basic("x".to_string())
        );
        assert_eq!(
            EngineSelection::Adaptive.label("x".to_string()),
            RegexWrapperPattern::Adaptive("x".to_string())
        );
    }
}
