//! # Parallel Matcher

use crate::{GrokResult, MatchResult, PatternMatcher, types::GrokHashMap};

/// Collapsed captures, detached from the subject.
pub type OwnedCollapsedCaptures = GrokHashMap<String, String>;

/// All captures, detached from the subject.
pub type OwnedAllCaptures = GrokHashMap<String, Vec<String>>;

/// Batch-Level Parallel Matcher Wrapper.
///
/// Runs batches of subjects through the inner matcher with ``rayon``.
#[derive(Debug, Clone)]
pub struct ParallelRayonMatcher<M: PatternMatcher> {
    /// Inner matcher.
    pub inner: M,
}

impl<M: PatternMatcher> ParallelRayonMatcher<M> {
    /// Create a new parallel matcher.
    ///
    /// ## Arguments
    /// * `inner` - The matcher to wrap.
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Match every subject in `batch`, collapsing the captures of each.
    ///
    /// ## Returns
    /// One entry per subject, in batch order; `None` where there was no match.
    /// The first engine failure fails the whole batch.
    pub fn collapsed_batch<S>(
        &self,
        batch: &[S],
    ) -> GrokResult<Vec<Option<OwnedCollapsedCaptures>>>
    where
        S: AsRef<str> + Sync,
    {
        self.map_batch(batch, |result| {
            result
                .collapsed_captures()
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect()
        })
    }

    /// Match every subject in `batch`, collecting all captures of each.
    ///
    /// See [`collapsed_batch`](Self::collapsed_batch).
    pub fn all_batch<S>(
        &self,
        batch: &[S],
    ) -> GrokResult<Vec<Option<OwnedAllCaptures>>>
    where
        S: AsRef<str> + Sync,
    {
        self.map_batch(batch, |result| {
            result
                .all_captures()
                .into_iter()
                .map(|(key, values)| {
                    (
                        key.to_string(),
                        values.into_iter().map(str::to_string).collect(),
                    )
                })
                .collect()
        })
    }

    fn map_batch<S, T, F>(
        &self,
        batch: &[S],
        f: F,
    ) -> GrokResult<Vec<Option<T>>>
    where
        S: AsRef<str> + Sync,
        T: Send,
        F: Fn(&MatchResult<'_, '_>) -> T + Sync,
    {
        use rayon::prelude::*;
        batch
            .par_iter()
            .map(|subject| -> GrokResult<Option<T>> {
                Ok(self.inner.find_match(subject.as_ref())?.as_ref().map(&f))
            })
            .collect()
    }
}

impl<M: PatternMatcher> PatternMatcher for ParallelRayonMatcher<M> {
    fn find_match<'s, 'h>(
        &'s self,
        subject: &'h str,
    ) -> GrokResult<Option<MatchResult<'s, 'h>>> {
        self.inner.find_match(subject)
    }
}
