//! # Match Results

use std::{borrow::Cow, ops::Range};

use crate::{
    CompiledMatcher,
    matching::{AllCaptures, CaptureWalk, Captures, CollapsedCaptures},
    regex::CaptureOffsets,
    types::hash_map_with_capacity,
};

/// The outcome of one successful execution of a [`CompiledMatcher`].
///
/// Owns its capture offsets, and either borrows or owns the subject text.
/// Both are released when the result is dropped.
///
/// Every substring handed out is a slice of the original subject.
#[derive(Debug, Clone)]
pub struct MatchResult<'m, 'h> {
    matcher: &'m CompiledMatcher,
    subject: Cow<'h, str>,
    offsets: CaptureOffsets,
}

impl<'m, 'h> MatchResult<'m, 'h> {
    pub(crate) fn new(
        matcher: &'m CompiledMatcher,
        subject: Cow<'h, str>,
        offsets: CaptureOffsets,
    ) -> Self {
        Self {
            matcher,
            subject,
            offsets,
        }
    }

    /// The matcher which produced this result.
    pub fn matcher(&self) -> &'m CompiledMatcher {
        self.matcher
    }

    /// The subject text.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The half-open byte span of the whole match.
    pub fn span(&self) -> Range<usize> {
        match self.offsets.get(0) {
            Some((start, end)) if start <= end && end <= self.subject.len() => start..end,
            _ => 0..0,
        }
    }

    /// The start of the match span.
    pub fn start(&self) -> usize {
        self.span().start
    }

    /// The end of the match span.
    pub fn end(&self) -> usize {
        self.span().end
    }

    /// The matched text.
    pub fn as_str(&self) -> &str {
        self.group_text(0)
    }

    /// Detach this result from a borrowed subject, copying it if needed.
    pub fn into_owned(self) -> MatchResult<'m, 'static> {
        MatchResult {
            matcher: self.matcher,
            subject: Cow::Owned(self.subject.into_owned()),
            offsets: self.offsets,
        }
    }

    /// The text of engine group `group_index`.
    ///
    /// Groups which did not participate, and offsets which do not land on
    /// character boundaries inside the subject, read as `""`.
    pub(crate) fn group_text(
        &self,
        group_index: usize,
    ) -> &str {
        let Some((start, end)) = self.offsets.get(group_index) else {
            return "";
        };
        match self.subject.get(start..end) {
            Some(text) => text,
            None => {
                log::trace!(
                    "clamping group {group_index} offsets {start}..{end} outside of subject (len {})",
                    self.subject.len()
                );
                ""
            }
        }
    }

    /// Iterate over the named captures, in slot order.
    ///
    /// Bare macro references are skipped when the matcher was compiled
    /// `aliased_only`.
    pub fn captures(&self) -> Captures<'_> {
        Captures::new(self)
    }

    /// Start a capture walk.
    ///
    /// The walk holds this result mutably, so only one walk can be live at a time.
    ///
    /// ## Example
    /// ```rust
    /// # use grokpile::MacroRegistry;
    /// let mut registry = MacroRegistry::new();
    /// registry.add_macro("DAY", "(?:Mon|Tue|Wed)");
    /// let matcher = registry.compile("(?P<word>[a-z]+) %{DAY:day}", false).unwrap();
    ///
    /// let mut result = matcher.execute("message Tue").unwrap().unwrap();
    /// let mut walk = result.start_iteration();
    /// let mut seen = Vec::new();
    /// while walk.advance() {
    ///     let (key, value) = walk.current().unwrap();
    ///     seen.push(format!("{key}={value}"));
    /// }
    /// assert_eq!(seen, vec![":word=message", "day=Tue"]);
    /// ```
    pub fn start_iteration(&mut self) -> CaptureWalk<'_> {
        CaptureWalk::new(self.captures())
    }

    /// Every capture, grouped by logical key.
    ///
    /// Repeated keys keep all of their substrings, in first-seen order.
    /// Bare macro references are included, unless the matcher was compiled
    /// `aliased_only`.
    pub fn all_captures(&self) -> AllCaptures<'_> {
        let mut all: AllCaptures<'_> = hash_map_with_capacity(self.matcher.capture_count());
        for capture in self.captures() {
            all.entry(capture.name.key_arc().clone())
                .or_default()
                .push(capture.value);
        }
        all
    }

    /// The explicitly named captures, one substring per key.
    ///
    /// Macro aliases appear under their alias, and raw named groups under
    /// their group name (no `:`). Bare macro references never appear.
    /// When a key repeats, the last occurrence wins.
    pub fn collapsed_captures(&self) -> CollapsedCaptures<'_> {
        let mut collapsed: CollapsedCaptures<'_> =
            hash_map_with_capacity(self.matcher.capture_count());
        self.collapse_into(&mut collapsed);
        collapsed
    }

    /// Write the collapsed captures into `target`; see [`collapsed_captures`](Self::collapsed_captures).
    ///
    /// Entries already in `target` are overwritten on collision.
    pub fn collapse_into<'a>(
        &'a self,
        target: &mut CollapsedCaptures<'a>,
    ) {
        for capture in self.captures() {
            if let Some(key) = capture.name.collapsed_key() {
                target.insert(key.clone(), capture.value);
            }
        }
    }

    /// The first substring captured under logical key `key`.
    pub fn get(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.captures()
            .find(|capture| capture.name.key() == key)
            .map(|capture| capture.value)
    }
}
