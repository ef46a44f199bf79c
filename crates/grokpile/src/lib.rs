//! # `grokpile` Named-Macro Pattern Matching
//!
//! `grokpile` compiles grok-style patterns, built from named, reusable regex
//! fragments ("macros"), and extracts their captures by logical name.
//!
//! See:
//! * [`registry`] to define macros, and import macro files.
//! * [`matcher`] to compile patterns into [`CompiledMatcher`]s.
//! * [`matching`] to extract captures from a [`MatchResult`].
//! * [`pile`] to try several matchers in order.
//!
//! ## Capture Names
//!
//! A match reports captures under logical keys:
//! * `%{DAY:day}` reports as `day`;
//! * `%{DAY}` reports as `DAY` (all-captures view and walk only);
//! * a raw group `(?P<word>...)` reports as `:word` (`word` in the collapsed view).
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//! * ``std``
//!
//! #### feature: ``std``
//!
//! Required; enables the default feature sets of the engine crates.
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::GrokHash{*}`` type alias machinery.
//!
//! #### feature: ``foldhash``
//!
//! This swaps all HashMap/HashSet implementations for ``foldhash``.
//! If both are enabled, ``ahash`` wins.
//!
//! #### feature: ``rayon``
//!
//! This enables batch matching wrappers using the ``rayon`` crate.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Example
//!
//! ```rust
//! use grokpile::MatcherPile;
//!
//! let mut pile = MatcherPile::with_base_patterns().unwrap();
//! pile.compile("%{IP:client} %{WORD:method} %{URIPATHPARAM:request}", false)
//!     .unwrap();
//! pile.compile("%{DAY:day} %{MONTH} %{MONTHDAY:monthday}", false)
//!     .unwrap();
//!
//! let (_, result) = pile
//!     .match_first("Tue May 15 11:21:42 [conn1047685] moveChunk deleted: 7157")
//!     .unwrap()
//!     .unwrap();
//!
//! let all = result.all_captures();
//! assert_eq!(all["day"], vec!["Tue"]);
//! assert_eq!(all["MONTH"], vec!["May"]);
//!
//! let collapsed = result.collapsed_captures();
//! assert_eq!(collapsed["monthday"], "15");
//! assert!(!collapsed.contains_key("MONTH"));
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod errors;
pub mod expansion;
pub mod matcher;
pub mod matching;
pub mod names;
pub mod pile;
pub mod regex;
pub mod registry;
pub mod types;

#[doc(inline)]
pub use errors::{CompileFailure, GrokError, GrokResult};
#[doc(inline)]
pub use matcher::{CompiledMatcher, EngineSelection, MatcherOptions, PatternMatcher};
#[doc(inline)]
pub use matching::{AllCaptures, Capture, CaptureWalk, CollapsedCaptures, MatchResult};
#[doc(inline)]
pub use names::{CaptureKind, CaptureName};
#[doc(inline)]
pub use pile::MatcherPile;
#[doc(inline)]
pub use registry::{MacroDefinition, MacroRegistry};
