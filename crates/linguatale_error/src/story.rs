//! Story and artifact generation error types.

/// Specific error conditions for generation operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// Part numbers are 1-based
    #[display("Invalid part number {} (parts are numbered from 1)", _0)]
    InvalidPartNumber(u32),
    /// Continuation requested without the prior narrative
    #[display("Part {} requested without previous story text", _0)]
    MissingPreviousText(u32),
    /// The model reply decoded to something other than a JSON object
    #[display("Response was not a JSON object: {}", _0)]
    SchemaMismatch(String),
    /// Decoded JSON did not contain the expected fields
    #[display("Missing expected field '{}' in response", _0)]
    MissingField(String),
    /// A required input was empty
    #[display("Required input '{}' was empty", _0)]
    EmptyInput(String),
    /// Translating into the source language is a no-op
    #[display("Translation target language matches source language '{}'", _0)]
    SameLanguageTranslation(String),
}

/// Error type for generation operations.
///
/// # Examples
///
/// ```
/// use linguatale_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::InvalidPartNumber(0));
/// assert!(format!("{}", err).contains("part number"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
