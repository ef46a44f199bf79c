//! # Macro Registry
//!
//! Named pattern fragments ("macros"), their text source format,
//! and the builtin base set.

pub mod base_patterns;
pub mod macro_registry;
pub mod macro_source;

#[doc(inline)]
pub use base_patterns::BASE_PATTERNS;
#[doc(inline)]
pub use macro_registry::{MacroRegistry, MacroTable};
#[doc(inline)]
pub use macro_source::{
    MacroDefinition,
    is_valid_macro_name,
    load_macro_definitions_path,
    parse_macro_source,
    read_macro_definitions,
};
