//! # Pattern Matcher Trait

use std::sync::Arc;

use crate::{CompiledMatcher, GrokResult, MatchResult, MatcherPile};

/// Anything that can be run against a subject to produce a [`MatchResult`].
pub trait PatternMatcher: Send + Sync {
    /// Find the first match for `subject`.
    ///
    /// ## Returns
    /// `Ok(None)` when there is no match.
    fn find_match<'s, 'h>(
        &'s self,
        subject: &'h str,
    ) -> GrokResult<Option<MatchResult<'s, 'h>>>;
}

impl PatternMatcher for CompiledMatcher {
    fn find_match<'s, 'h>(
        &'s self,
        subject: &'h str,
    ) -> GrokResult<Option<MatchResult<'s, 'h>>> {
        self.execute(subject)
    }
}

impl PatternMatcher for MatcherPile {
    fn find_match<'s, 'h>(
        &'s self,
        subject: &'h str,
    ) -> GrokResult<Option<MatchResult<'s, 'h>>> {
        Ok(self.match_first(subject)?.map(|(_, result)| result))
    }
}

impl<M: PatternMatcher + ?Sized> PatternMatcher for Arc<M> {
    fn find_match<'s, 'h>(
        &'s self,
        subject: &'h str,
    ) -> GrokResult<Option<MatchResult<'s, 'h>>> {
        (**self).find_match(subject)
    }
}

impl<M: PatternMatcher + ?Sized> PatternMatcher for &M {
    fn find_match<'s, 'h>(
        &'s self,
        subject: &'h str,
    ) -> GrokResult<Option<MatchResult<'s, 'h>>> {
        (**self).find_match(subject)
    }
}
