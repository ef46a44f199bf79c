//! # Capture Extraction

use std::sync::Arc;

use crate::{MatchResult, names::CaptureName, types::GrokHashMap};

/// Every capture of a match, grouped by logical key, in first-seen order.
pub type AllCaptures<'r> = GrokHashMap<Arc<str>, Vec<&'r str>>;

/// The explicitly named captures of a match, one substring per key.
pub type CollapsedCaptures<'r> = GrokHashMap<Arc<str>, &'r str>;

/// One decoded capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture<'r> {
    /// The decoded capture name.
    pub name: CaptureName,

    /// The captured substring of the subject; `""` if the group did not participate.
    pub value: &'r str,
}

impl<'r> Capture<'r> {
    /// The logical key.
    pub fn key(&self) -> &str {
        self.name.key()
    }
}

/// Iterator over the captures of a [`MatchResult`], in slot order.
///
/// Honors the matcher's `aliased_only` filter.
#[derive(Debug, Clone)]
pub struct Captures<'r> {
    result: &'r MatchResult<'r, 'r>,
    position: usize,
}

impl<'r> Captures<'r> {
    pub(crate) fn new(result: &'r MatchResult<'r, 'r>) -> Self {
        Self {
            result,
            position: 0,
        }
    }
}

impl<'r> Iterator for Captures<'r> {
    type Item = Capture<'r>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.result;
        let matcher = result.matcher();

        while let Some(slot) = matcher.slots().get(self.position) {
            self.position += 1;

            let name = matcher.decode_slot(slot);
            if matcher.aliased_only() && !name.is_aliased() {
                continue;
            }

            return Some(Capture {
                name,
                value: result.group_text(slot.group_index),
            });
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.result.matcher().capture_count() - self.position;
        (0, Some(remaining))
    }
}

/// A cursor-style walk over the captures of a [`MatchResult`].
///
/// Started by [`MatchResult::start_iteration`]. [`advance`](Self::advance)
/// moves to the next capture; [`current`](Self::current) reads it without
/// allocating. The walk mutably borrows its result, so a second walk cannot
/// start until this one is dropped.
///
/// The walk is also an [`Iterator`] over [`Capture`]s.
#[derive(Debug)]
pub struct CaptureWalk<'r> {
    captures: Captures<'r>,
    current: Option<Capture<'r>>,
}

impl<'r> CaptureWalk<'r> {
    pub(crate) fn new(captures: Captures<'r>) -> Self {
        Self {
            captures,
            current: None,
        }
    }

    /// Move to the next capture.
    ///
    /// ## Returns
    /// `false` once the captures are exhausted.
    pub fn advance(&mut self) -> bool {
        self.current = self.captures.next();
        self.current.is_some()
    }

    /// The current `(logical_key, substring)` pair.
    ///
    /// ## Returns
    /// `None` before the first [`advance`](Self::advance), and after exhaustion.
    pub fn current(&self) -> Option<(&str, &'r str)> {
        self.current
            .as_ref()
            .map(|capture| (capture.name.key(), capture.value))
    }

    /// The current capture, with its full decoded name.
    pub fn current_capture(&self) -> Option<&Capture<'r>> {
        self.current.as_ref()
    }
}

impl<'r> Iterator for CaptureWalk<'r> {
    type Item = Capture<'r>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            self.current.clone()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MacroRegistry, MatcherOptions, names::CaptureKind};

    fn registry() -> MacroRegistry {
        let mut registry = MacroRegistry::new();
        registry.add_macro("DAY", "(?:Mon|Tue|Wed)");
        registry.add_macro("NUM", "[0-9]+");
        registry
    }

    #[test]
    fn test_walk() {
        let matcher = registry()
            .compile("(?P<word>[a-z]+) %{DAY} %{NUM:num}", false)
            .unwrap();
        let mut result = matcher.execute("message Mon 42").unwrap().unwrap();

        let mut walk = result.start_iteration();
        assert_eq!(walk.current(), None);

        assert!(walk.advance());
        assert_eq!(walk.current(), Some((":word", "message")));
        assert_eq!(
            walk.current_capture().map(|c| c.name.kind()),
            Some(CaptureKind::RawNamed)
        );

        assert!(walk.advance());
        assert_eq!(walk.current(), Some(("DAY", "Mon")));

        assert!(walk.advance());
        assert_eq!(walk.current(), Some(("num", "42")));

        assert!(!walk.advance());
        assert_eq!(walk.current(), None);
        assert!(!walk.advance());
    }

    #[test]
    fn test_walk_aliased_only() {
        let matcher = MatcherOptions::default()
            .with_aliased_only(true)
            .compile("(?P<word>[a-z]+) %{DAY} %{NUM:num}", &registry())
            .unwrap();
        let mut result = matcher.execute("message Mon 42").unwrap().unwrap();

        let keys: Vec<String> = result
            .start_iteration()
            .map(|capture| capture.key().to_string())
            .collect();
        assert_eq!(keys, vec![":word", "num"]);
    }

    #[test]
    fn test_walks_are_sequential() {
        let matcher = registry().compile("%{NUM:a}", false).unwrap();
        let mut result = matcher.execute("7").unwrap().unwrap();

        assert_eq!(result.start_iteration().count(), 1);
        assert_eq!(result.start_iteration().count(), 1);
    }

    #[test]
    fn test_captures_iterator() {
        let matcher = registry().compile("%{NUM:a}%{DAY}", false).unwrap();
        let result = matcher.execute("12Tue").unwrap().unwrap();

        let captures: Vec<(String, &str)> = result
            .captures()
            .map(|capture| (capture.key().to_string(), capture.value))
            .collect();
        assert_eq!(
            captures,
            vec![("a".to_string(), "12"), ("DAY".to_string(), "Tue")]
        );
        assert_eq!(result.captures().size_hint(), (0, Some(2)));
    }
}
