//! # Compiled Matchers
//!
//! [`MatcherOptions`] compile a root pattern against a [`MacroRegistry`](crate::MacroRegistry)
//! snapshot into a [`CompiledMatcher`]; the [`PatternMatcher`] trait abstracts over
//! single matchers and [`MatcherPile`](crate::MatcherPile)s.

pub mod compiled_matcher;
pub mod matcher_options;
pub mod pattern_matcher;

#[doc(inline)]
pub use compiled_matcher::CompiledMatcher;
#[doc(inline)]
pub use matcher_options::{EngineSelection, MatcherOptions};
#[doc(inline)]
pub use pattern_matcher::PatternMatcher;
