//! # Matcher Piles
//!
//! A [`MatcherPile`] is an ordered list of matchers sharing one macro
//! registry, tried in sequence until one matches.

pub mod matcher_pile;

#[doc(inline)]
pub use matcher_pile::MatcherPile;
