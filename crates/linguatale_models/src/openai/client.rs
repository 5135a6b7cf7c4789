//! OpenAI chat-completions client implementation.
//!
//! Retry behavior lives here and nowhere else: each attempt carries the
//! configured per-attempt timeout, attempts are separated by a fixed delay,
//! and only transient conditions (connection failures, 408/429/5xx) are
//! retried. Callers see a single success or a single failure.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use tokio_retry2::{strategy::FixedInterval, Retry, RetryError};
use tracing::{debug, instrument, warn};

use linguatale_core::{CompletionRequest, Settings};
use linguatale_error::{HttpError, LinguataleResult, OpenAiError, OpenAiErrorKind};
use linguatale_interface::CompletionDriver;

use super::wire::{ChatCompletionRequest, ChatCompletionResponse};
use super::OpenAiResult;

/// Chat-completions endpoint.
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Fixed delay between retry attempts.
const RETRY_DELAY_MS: u64 = 1000;

/// Client for the OpenAI chat-completions API.
///
/// # Example
///
/// ```no_run
/// use linguatale_core::CompletionRequest;
/// use linguatale_interface::CompletionDriver;
/// use linguatale_models::OpenAiClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = OpenAiClient::new()?;
/// let request = CompletionRequest::from_prompt("Suggest a topic.", Some(0.9), Some(0.9));
/// let text = client.complete(&request).await?;
/// println!("{text}");
/// # Ok(())
/// # }
/// ```
pub struct OpenAiClient {
    /// HTTP client carrying the per-attempt timeout
    http: reqwest::Client,
    /// Bearer token for the API
    api_key: String,
    /// Default model when the request does not name one
    model_name: String,
    /// Endpoint URL (overridable for test servers)
    base_url: String,
    /// Default maximum attempts when the request carries no hint
    max_retries: usize,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Create a client with default settings.
    ///
    /// Reads the API key from the `OPENAI_API_KEY` environment variable
    /// (loading `.env` first if present).
    #[instrument(name = "openai_client_new")]
    pub fn new() -> LinguataleResult<Self> {
        Self::with_settings(&Settings::default())
    }

    /// Create a client from explicit settings.
    #[instrument(name = "openai_client_with_settings", skip(settings))]
    pub fn with_settings(settings: &Settings) -> LinguataleResult<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| OpenAiError::new(OpenAiErrorKind::MissingApiKey))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key,
            model_name: settings.model.clone(),
            base_url: OPENAI_API_URL.to_string(),
            max_retries: settings.max_retries,
        })
    }

    /// Point the client at a different endpoint (test servers, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Issue one attempt against the endpoint.
    async fn complete_once(&self, req: &CompletionRequest) -> OpenAiResult<String> {
        let body = ChatCompletionRequest {
            model: req
                .model
                .clone()
                .unwrap_or_else(|| self.model_name.clone()),
            messages: req.messages.iter().map(Into::into).collect(),
            temperature: req.temperature,
            top_p: req.top_p,
            max_tokens: req.max_tokens,
        };

        let response = self
            .http
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| OpenAiError::new(OpenAiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(OpenAiError::new(OpenAiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| OpenAiError::new(OpenAiErrorKind::MalformedResponse(e.to_string())))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| OpenAiError::new(OpenAiErrorKind::EmptyResponse))
    }

    /// Issue the request, retrying transient failures with a fixed delay.
    async fn complete_internal(&self, req: &CompletionRequest) -> OpenAiResult<String> {
        let attempts = req.max_retries.unwrap_or(self.max_retries).max(1);
        let strategy = FixedInterval::from_millis(RETRY_DELAY_MS).take(attempts - 1);

        Retry::spawn(strategy, || async {
            match self.complete_once(req).await {
                Ok(text) => {
                    debug!(response_length = text.len(), "Received completion");
                    Ok(text)
                }
                Err(e) if e.kind.is_retryable() => {
                    warn!(error = %e, "Transient completion failure, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Permanent completion failure");
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await
    }
}

#[async_trait]
impl CompletionDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(model = ?req.model))]
    async fn complete(&self, req: &CompletionRequest) -> LinguataleResult<String> {
        self.complete_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
