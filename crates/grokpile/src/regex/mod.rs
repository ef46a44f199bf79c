//! # Regex Utilities
//!
//! Macro patterns frequently need extended regex machinery provided by the
//! [`fancy_regex`] crate (look-around, mostly); but naturally, this has performance
//! costs. We'd prefer to avoid using the [`fancy_regex`] crate when possible, falling back
//! on the standard [`regex`] crate when patterns permit this.
//!
//! This recurses into two problems:
//!
//! * Labeling Patterns - [`RegexWrapperPattern`]
//!   * [`RegexWrapperPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RegexWrapperPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RegexWrapperPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//!
//! The [`RegexWrapper`] type supports one execution operation, ``captures_read()``,
//! which reads every group's offsets into a fresh [`CaptureOffsets`].

pub mod regex_wrapper;

#[doc(inline)]
pub use regex_wrapper::{
    CaptureOffsets,
    EngineLimits,
    ErrorWrapper,
    RegexWrapper,
    RegexWrapperPattern,
};
