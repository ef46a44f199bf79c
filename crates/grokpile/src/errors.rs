//! # Error Types

use crate::regex::ErrorWrapper;

/// Why a pattern failed to compile.
#[non_exhaustive]
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompileFailure {
    /// A `%{NAME}` reference names a macro the registry does not hold.
    #[error("undefined macro: {0}")]
    UndefinedMacro(String),

    /// A macro references itself, directly or through other macros.
    #[error("recursive macro reference: {0}")]
    RecursiveMacro(String),

    /// A `%{...}` reference which could not be parsed.
    #[error("malformed macro reference: {0}")]
    MalformedReference(String),

    /// Macro nesting or the expanded pattern grew past the expansion limits.
    #[error("macro expansion limit exceeded: {0}")]
    ExpansionLimit(String),

    /// A raw named group uses the prefix reserved for generated groups.
    #[error("reserved capture group name: {0}")]
    ReservedGroupName(String),

    /// The expanded expression was rejected by the regex engine.
    #[error("{0}")]
    Engine(ErrorWrapper),
}

/// Errors from grokpile operations.
///
/// Note that "no match" is not an error; execution reports it as `Ok(None)`.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum GrokError {
    /// Matcher resources could not be initialized.
    #[error("failed to initialize resources: {0}")]
    ResourceInit(String),

    /// A macro source was unreadable or malformed.
    #[error("failed to import macros from {origin}: {reason}")]
    Import {
        /// The source of the macros; a path, or `<source>` for in-memory text.
        origin: String,

        /// What was wrong with the source.
        reason: String,
    },

    /// A pattern failed to compile.
    #[error("failed to compile {pattern:?}: {failure}")]
    Compile {
        /// The root pattern which was being compiled.
        pattern: String,

        /// The failure, carrying the engine diagnostic where there is one.
        failure: CompileFailure,
    },

    /// The engine failed while executing a compiled pattern.
    #[error("engine failure: {0}")]
    Engine(String),
}

impl GrokError {
    /// Build a [`GrokError::Compile`] for `pattern`.
    pub fn compile(
        pattern: &str,
        failure: CompileFailure,
    ) -> Self {
        Self::Compile {
            pattern: pattern.to_string(),
            failure,
        }
    }

    /// Build a [`GrokError::Import`] for `origin`.
    pub fn import(
        origin: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Import {
            origin: origin.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for grokpile operations.
pub type GrokResult<T> = core::result::Result<T, GrokError>;
