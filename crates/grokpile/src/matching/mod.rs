//! # Matching
//!
//! A [`MatchResult`] is the outcome of one execution. Captures come out of it
//! three ways:
//! * [`MatchResult::all_captures`] - every capture, grouped by logical key;
//! * [`MatchResult::collapsed_captures`] - explicitly named captures, one per key;
//! * [`MatchResult::start_iteration`] - an allocation-free [`CaptureWalk`].

pub mod captures;
pub mod match_result;

#[doc(inline)]
pub use captures::{AllCaptures, Capture, CaptureWalk, Captures, CollapsedCaptures};
#[doc(inline)]
pub use match_result::MatchResult;
