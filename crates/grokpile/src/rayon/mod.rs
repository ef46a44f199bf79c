//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for batch matching.

mod rayon_matcher;

pub use rayon_matcher::{OwnedAllCaptures, OwnedCollapsedCaptures, ParallelRayonMatcher};
