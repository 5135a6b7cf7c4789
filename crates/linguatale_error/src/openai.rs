//! OpenAI gateway error types and retry classification.

/// OpenAI-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum OpenAiErrorKind {
    /// API key not found in environment
    #[display("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,
    /// API request failed
    #[display("OpenAI API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body did not match the chat-completions shape
    #[display("Malformed completion response: {}", _0)]
    MalformedResponse(String),
    /// Response contained no completion text
    #[display("Completion response contained no choices")]
    EmptyResponse,
    /// All retry attempts failed
    #[display("Completion failed after {} attempts: {}", attempts, message)]
    RetriesExhausted {
        /// Number of attempts made
        attempts: usize,
        /// Message from the final attempt
        message: String,
    },
}

impl OpenAiErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            OpenAiErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            OpenAiErrorKind::ApiRequest(_) => true,
            OpenAiErrorKind::EmptyResponse => true,
            _ => false,
        }
    }
}

/// OpenAI error with source location tracking.
///
/// # Examples
///
/// ```
/// use linguatale_error::{OpenAiError, OpenAiErrorKind};
///
/// let err = OpenAiError::new(OpenAiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("OPENAI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("OpenAI Error: {} at line {} in {}", kind, line, file)]
pub struct OpenAiError {
    /// The kind of error that occurred
    pub kind: OpenAiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl OpenAiError {
    /// Create a new OpenAiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OpenAiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
