//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, JsonError, OpenAiError, StorageError, StoryError};

/// This is the foundation error enum. Each Linguatale crate contributes
/// the variants for its own concern.
///
/// # Examples
///
/// ```
/// use linguatale_error::{LinguataleError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: LinguataleError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LinguataleErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// OpenAI gateway error
    #[from(OpenAiError)]
    OpenAi(OpenAiError),
    /// Story or artifact generation error
    #[from(StoryError)]
    Story(StoryError),
    /// Session storage error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Linguatale error with kind discrimination.
///
/// # Examples
///
/// ```
/// use linguatale_error::{LinguataleResult, ConfigError};
///
/// fn might_fail() -> LinguataleResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Linguatale Error: {}", _0)]
pub struct LinguataleError(Box<LinguataleErrorKind>);

impl LinguataleError {
    /// Create a new error from a kind.
    pub fn new(kind: LinguataleErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LinguataleErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to LinguataleErrorKind
impl<T> From<T> for LinguataleError
where
    T: Into<LinguataleErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Linguatale operations.
///
/// # Examples
///
/// ```
/// use linguatale_error::{LinguataleResult, HttpError};
///
/// fn fetch_data() -> LinguataleResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type LinguataleResult<T> = std::result::Result<T, LinguataleError>;
