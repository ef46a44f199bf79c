//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types.

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(regex::Error),

    /// Error from `fancy_regex`.
    Fancy(fancy_regex::Error),
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err)
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err)
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

/// Resource limits handed to the engines at compile time.
///
/// `None` leaves the engine's own default in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineLimits {
    /// Compiled program size limit, in bytes.
    pub size_limit: Option<usize>,

    /// Backtracking step limit for `fancy_regex`.
    pub backtrack_limit: Option<usize>,
}

/// Label for regex patterns.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RegexWrapperPattern {
    /// This is a pattern for the `regex` crate.
    Basic(String),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(String),

    /// This pattern will try the `regex` crate first,
    /// and fallback to `fancy_regex` if it fails.
    Adaptive(String),
}

impl<S: AsRef<str>> From<S> for RegexWrapperPattern {
    fn from(pattern: S) -> Self {
        Self::Adaptive(pattern.as_ref().to_string())
    }
}

impl RegexWrapperPattern {
    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a `RegexWrapper`, with engine defaults.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `ErrorWrapper`.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        self.compile_with(&EngineLimits::default())
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// ## Arguments
    /// * `limits` - engine resource limits.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `ErrorWrapper`.
    pub fn compile_with(
        &self,
        limits: &EngineLimits,
    ) -> Result<RegexWrapper, ErrorWrapper> {
        match self {
            Self::Basic(pattern) => build_basic(pattern, limits),
            Self::Fancy(pattern) => build_fancy(pattern, limits),
            Self::Adaptive(pattern) => {
                build_basic(pattern, limits).or_else(|_| build_fancy(pattern, limits))
            }
        }
    }
}

fn build_basic(
    pattern: &str,
    limits: &EngineLimits,
) -> Result<RegexWrapper, ErrorWrapper> {
    let mut builder = regex::RegexBuilder::new(pattern);
    if let Some(limit) = limits.size_limit {
        builder.size_limit(limit);
    }
    builder
        .build()
        .map(RegexWrapper::from)
        .map_err(ErrorWrapper::from)
}

fn build_fancy(
    pattern: &str,
    limits: &EngineLimits,
) -> Result<RegexWrapper, ErrorWrapper> {
    let mut builder = fancy_regex::RegexBuilder::new(pattern);
    if let Some(limit) = limits.size_limit {
        builder.delegate_size_limit(limit);
    }
    if let Some(limit) = limits.backtrack_limit {
        builder.backtrack_limit(limit);
    }
    builder
        .build()
        .map(RegexWrapper::from)
        .map_err(ErrorWrapper::from)
}

/// Wrapper for regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic(_))
    }

    /// Is this `Fancy`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// The number of capture groups, including the implicit group 0.
    pub fn captures_len(&self) -> usize {
        match self {
            Self::Basic(regex) => regex.captures_len(),
            Self::Fancy(regex) => regex.captures_len(),
        }
    }

    /// The capture group names, indexed by group number.
    ///
    /// Unnamed groups (including group 0) are `None`.
    pub fn capture_names(&self) -> Vec<Option<&str>> {
        match self {
            Self::Basic(regex) => regex.capture_names().collect(),
            Self::Fancy(regex) => regex.capture_names().collect(),
        }
    }

    /// Run the regex once against `haystack`, reading all group offsets.
    ///
    /// Each call allocates its own offset storage; nothing is shared between
    /// concurrent calls.
    ///
    /// ## Returns
    /// `Ok(None)` when there is no match.
    pub fn captures_read(
        &self,
        haystack: &str,
    ) -> Result<Option<CaptureOffsets>, ErrorWrapper> {
        match self {
            Self::Basic(regex) => {
                let mut locations = regex.capture_locations();
                Ok(regex
                    .captures_read(&mut locations, haystack)
                    .map(|_| CaptureOffsets::Basic(locations)))
            }
            Self::Fancy(regex) => Ok(regex.captures(haystack)?.map(|captures| {
                CaptureOffsets::Fancy(
                    (0..captures.len())
                        .map(|idx| captures.get(idx).map(|m| (m.start(), m.end())))
                        .collect(),
                )
            })),
        }
    }
}

/// Per-execution capture offsets.
///
/// Group `i` spans `start..end` byte offsets of the haystack it was read from.
#[derive(Debug, Clone)]
pub enum CaptureOffsets {
    /// Offsets read by `regex`.
    Basic(regex::CaptureLocations),

    /// Offsets read by `fancy_regex`.
    Fancy(Vec<Option<(usize, usize)>>),
}

impl CaptureOffsets {
    /// The number of group slots, including group 0.
    pub fn len(&self) -> usize {
        match self {
            Self::Basic(locations) => locations.len(),
            Self::Fancy(offsets) => offsets.len(),
        }
    }

    /// Are there no slots at all?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the `(start, end)` offsets of group `idx`.
    ///
    /// ## Returns
    /// `None` if the group did not participate, or does not exist.
    pub fn get(
        &self,
        idx: usize,
    ) -> Option<(usize, usize)> {
        match self {
            Self::Basic(locations) => locations.get(idx),
            Self::Fancy(offsets) => offsets.get(idx).copied().flatten(),
        }
    }
}
