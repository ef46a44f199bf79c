//! # Compiled Matcher

use std::{borrow::Cow, sync::Arc};

use crate::{
    GrokError,
    GrokResult,
    MatchResult,
    MatcherOptions,
    errors::CompileFailure,
    expansion::{DEFAULT_EXPANDED_LIMIT, expand_pattern},
    names::{CaptureName, NameCache, encode_raw_capture},
    registry::MacroTable,
    regex::RegexWrapper,
    types::GrokHashMap,
};

/// One named engine group, and the raw name it reports under.
#[derive(Debug, Clone)]
pub(crate) struct CaptureSlot {
    /// The engine group number.
    pub(crate) group_index: usize,

    /// The raw capture name; decoded through the matcher's [`NameCache`].
    pub(crate) raw_name: Arc<str>,
}

/// A compiled, immutable matcher.
///
/// Built from a root pattern and a snapshot of the macro registry.
/// A `CompiledMatcher` is `Send + Sync`, and may be executed from many
/// threads at once; each execution owns its capture storage, and the only
/// shared mutable state is the [`NameCache`].
#[derive(Debug)]
pub struct CompiledMatcher {
    pattern: String,
    regex: RegexWrapper,
    slots: Box<[CaptureSlot]>,
    names: NameCache,
    macros: Arc<MacroTable>,
    aliased_only: bool,
}

impl CompiledMatcher {
    /// Compile `pattern` against a macro table snapshot.
    ///
    /// ## Arguments
    /// * `pattern` - the root pattern.
    /// * `macros` - the macro snapshot; kept for the matcher's lifetime.
    /// * `options` - compile options.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(macros, options)))]
    pub fn compile(
        pattern: &str,
        macros: Arc<MacroTable>,
        options: &MatcherOptions,
    ) -> GrokResult<Self> {
        let max_len = options.limits.size_limit.unwrap_or(DEFAULT_EXPANDED_LIMIT);
        let expanded = expand_pattern(pattern, &macros, max_len)
            .map_err(|failure| GrokError::compile(pattern, failure))?;

        let regex = options
            .engine
            .label(expanded.regex)
            .compile_with(&options.limits)
            .map_err(|err| GrokError::compile(pattern, CompileFailure::Engine(err)))?;

        let generated: GrokHashMap<&str, &str> = expanded
            .macro_captures
            .iter()
            .map(|capture| (capture.group_name.as_str(), capture.raw_name.as_str()))
            .collect();

        let slots: Box<[CaptureSlot]> = regex
            .capture_names()
            .into_iter()
            .enumerate()
            .filter_map(|(group_index, group_name)| {
                let group_name = group_name?;
                let raw_name: Arc<str> = match generated.get(group_name) {
                    Some(raw_name) => (*raw_name).into(),
                    None => encode_raw_capture(group_name).into(),
                };
                Some(CaptureSlot {
                    group_index,
                    raw_name,
                })
            })
            .collect();

        log::debug!(
            "Compiled {pattern:?}: {} named groups, {} bytes expanded, engine: {}",
            slots.len(),
            regex.as_str().len(),
            if regex.is_fancy() { "fancy" } else { "basic" },
        );

        Ok(Self {
            pattern: pattern.to_string(),
            names: NameCache::with_capacity(slots.len()),
            regex,
            slots,
            macros,
            aliased_only: options.aliased_only,
        })
    }

    /// The root pattern this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The fully expanded engine regex.
    pub fn expanded_pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Did this pattern need the `fancy_regex` engine?
    pub fn is_fancy(&self) -> bool {
        self.regex.is_fancy()
    }

    /// Were bare macro references hidden from extraction at compile time?
    pub fn aliased_only(&self) -> bool {
        self.aliased_only
    }

    /// The number of named capture slots.
    pub fn capture_count(&self) -> usize {
        self.slots.len()
    }

    /// The decoded names of every capture slot, in slot order.
    ///
    /// This ignores [`aliased_only`](Self::aliased_only).
    pub fn capture_names(&self) -> Vec<CaptureName> {
        self.slots.iter().map(|slot| self.decode_slot(slot)).collect()
    }

    /// The macro snapshot this matcher was compiled against.
    pub fn macros(&self) -> &MacroTable {
        &self.macros
    }

    /// This matcher's name cache.
    pub fn name_cache(&self) -> &NameCache {
        &self.names
    }

    pub(crate) fn slots(&self) -> &[CaptureSlot] {
        &self.slots
    }

    pub(crate) fn decode_slot(
        &self,
        slot: &CaptureSlot,
    ) -> CaptureName {
        self.names.decode(&slot.raw_name)
    }

    /// Run the matcher once against a borrowed subject.
    ///
    /// ## Returns
    /// * `Ok(Some(result))` on a match.
    /// * `Ok(None)` when there is no match.
    /// * `Err(GrokError::Engine)` if the engine failed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, subject))
    )]
    pub fn execute<'h>(
        &self,
        subject: &'h str,
    ) -> GrokResult<Option<MatchResult<'_, 'h>>> {
        self.execute_cow(Cow::Borrowed(subject))
    }

    /// Run the matcher once against an owned subject.
    ///
    /// The result keeps the subject; see [`execute`](Self::execute).
    pub fn execute_owned(
        &self,
        subject: String,
    ) -> GrokResult<Option<MatchResult<'_, 'static>>> {
        self.execute_cow(Cow::Owned(subject))
    }

    /// Does `subject` match?
    pub fn is_match(
        &self,
        subject: &str,
    ) -> GrokResult<bool> {
        Ok(self.execute(subject)?.is_some())
    }

    fn execute_cow<'h>(
        &self,
        subject: Cow<'h, str>,
    ) -> GrokResult<Option<MatchResult<'_, 'h>>> {
        let offsets = self
            .regex
            .captures_read(&subject)
            .map_err(|err| GrokError::Engine(err.to_string()))?;

        Ok(offsets.map(|offsets| MatchResult::new(self, subject, offsets)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        MacroRegistry,
        names::CaptureKind,
        types::{check_is_send, check_is_sync},
    };

    fn registry() -> MacroRegistry {
        let mut registry = MacroRegistry::new();
        registry.add_macro("DAY", "(?:Mon|Tue|Wed)");
        registry.add_macro("NUM", "[0-9]+");
        registry.add_macro("PAIR", "%{NUM:left},%{NUM:right}");
        registry
    }

    #[test]
    fn test_compile() {
        let matcher = registry()
            .compile(r"(?P<word>[a-z]+) %{DAY} %{PAIR:pair}", false)
            .unwrap();
        check_is_send(&matcher);
        check_is_sync(&matcher);

        assert_eq!(matcher.pattern(), r"(?P<word>[a-z]+) %{DAY} %{PAIR:pair}");
        assert!(!matcher.is_fancy());
        assert!(!matcher.aliased_only());
        assert_eq!(matcher.capture_count(), 5);
        assert!(matcher.expanded_pattern().contains("(?P<__grok0>(?:Mon|Tue|Wed))"));

        let names: Vec<(CaptureKind, String)> = matcher
            .capture_names()
            .into_iter()
            .map(|name| (name.kind(), name.key().to_string()))
            .collect();
        assert_eq!(
            names,
            vec![
                (CaptureKind::RawNamed, ":word".to_string()),
                (CaptureKind::MacroBare, "DAY".to_string()),
                (CaptureKind::MacroAlias, "pair".to_string()),
                (CaptureKind::MacroAlias, "left".to_string()),
                (CaptureKind::MacroAlias, "right".to_string()),
            ]
        );
        assert_eq!(matcher.name_cache().len(), 5);
    }

    #[test]
    fn test_snapshot_is_kept() {
        let mut registry = registry();
        let matcher = registry.compile("%{DAY}", false).unwrap();
        registry.add_macro("LATER", "x");

        assert!(matcher.macros().contains_key("DAY"));
        assert!(!matcher.macros().contains_key("LATER"));
    }

    #[test]
    fn test_compile_errors() {
        let registry = registry();

        let err = registry.compile("%{NOPE}", false).unwrap_err();
        assert!(matches!(
            err,
            GrokError::Compile {
                failure: CompileFailure::UndefinedMacro(_),
                ..
            }
        ));

        let err = registry.compile("%{DAY}(unclosed", false).unwrap_err();
        match err {
            GrokError::Compile {
                pattern,
                failure: CompileFailure::Engine(_),
            } => assert_eq!(pattern, "%{DAY}(unclosed"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_expansion_limits() {
        let mut registry = MacroRegistry::new();
        registry.add_macro("DEEP0", "x");
        registry.add_macro("WIDE0", "x");
        for idx in 1..5000 {
            registry.add_macro(format!("DEEP{idx}"), format!("%{{DEEP{}}}", idx - 1));
            if idx < 64 {
                let prev = idx - 1;
                registry.add_macro(format!("WIDE{idx}"), format!("%{{WIDE{prev}}}%{{WIDE{prev}}}"));
            }
        }

        let err = registry.compile("%{DEEP4999:deep}", false).unwrap_err();
        assert!(
            matches!(
                &err,
                GrokError::Compile {
                    failure: CompileFailure::ExpansionLimit(_),
                    ..
                }
            ),
            "{err:?}"
        );

        let options = MatcherOptions::default().with_size_limit(1 << 20);
        let err = options.compile("%{WIDE63}", &registry).unwrap_err();
        assert!(
            matches!(
                &err,
                GrokError::Compile {
                    failure: CompileFailure::ExpansionLimit(_),
                    ..
                }
            ),
            "{err:?}"
        );

        let matcher = options.compile("^%{WIDE2:w}$", &registry).unwrap();
        assert_eq!(matcher.execute("xxxx").unwrap().unwrap().get("w"), Some("xxxx"));
    }

    #[test]
    fn test_reserved_group_name() {
        let err = registry()
            .compile("(?P<__grok0>[a-z]+) %{DAY}", false)
            .unwrap_err();
        match err {
            GrokError::Compile {
                failure: CompileFailure::ReservedGroupName(name),
                ..
            } => assert_eq!(name, "__grok0"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_engine_selection() {
        let registry = registry();
        let pattern = "(?<![0-9])%{NUM}";

        let options = MatcherOptions::default().with_engine(crate::EngineSelection::Basic);
        assert!(options.compile(pattern, &registry).is_err());

        let matcher = MatcherOptions::default().compile(pattern, &registry).unwrap();
        assert!(matcher.is_fancy());
        let result = matcher.execute("a42").unwrap().unwrap();
        assert_eq!(result.as_str(), "42");
    }

    #[test]
    fn test_execute() {
        let matcher = registry().compile("%{DAY:day}", false).unwrap();

        assert!(matcher.execute("nothing here").unwrap().is_none());
        assert!(!matcher.is_match("nothing here").unwrap());
        assert!(matcher.is_match("on Tue").unwrap());

        let result = matcher.execute("on Tue").unwrap().unwrap();
        assert_eq!(result.span(), 3..6);

        let owned = matcher.execute_owned("Wed!".to_string()).unwrap().unwrap();
        assert_eq!(owned.subject(), "Wed!");
        assert_eq!(owned.get("day"), Some("Wed"));
    }
}
