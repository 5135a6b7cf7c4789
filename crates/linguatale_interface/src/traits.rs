//! Trait definitions for completion gateway backends.

use async_trait::async_trait;
use linguatale_core::CompletionRequest;
use linguatale_error::LinguataleResult;

/// Core trait that all completion gateways must implement.
///
/// The gateway owns retry and timeout behavior; callers issue a single
/// `complete` and receive either the model's reply text or a failure after
/// the gateway has exhausted its attempts.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Generate completion text for the given request.
    async fn complete(&self, req: &CompletionRequest) -> LinguataleResult<String>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier (e.g., "gpt-3.5-turbo").
    fn model_name(&self) -> &str;
}
