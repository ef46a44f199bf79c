//! # Capture Names
//!
//! Decoding of raw group names into logical keys, and the per-matcher cache
//! that interns the decoded values.

pub mod capture_name;
pub mod name_cache;

#[doc(inline)]
pub use capture_name::{
    ALIAS_SEPARATOR,
    CaptureKind,
    CaptureName,
    encode_macro_capture,
    encode_raw_capture,
};
#[doc(inline)]
pub use name_cache::NameCache;
