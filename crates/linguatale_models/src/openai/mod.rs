//! OpenAI chat-completions gateway.

mod client;
mod wire;

pub use client::OpenAiClient;

use linguatale_error::OpenAiError;

/// Result alias for OpenAI-specific operations.
pub(crate) type OpenAiResult<T> = std::result::Result<T, OpenAiError>;
