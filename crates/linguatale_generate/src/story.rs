//! Interactive story continuation engine.
//!
//! The engine is a pure transformation: given the story context for one turn
//! it produces one [`StoryPart`] via a single gateway call and one decoder
//! pass. It holds no story state and performs no persistence; the caller
//! hands the returned part to the story store.

use std::sync::Arc;

use derive_builder::Builder;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use linguatale_core::CompletionRequest;
use linguatale_error::{LinguataleResult, StoryError, StoryErrorKind};
use linguatale_interface::{CompletionDriver, StoryPart};

use crate::decode::{decode, Decoded};
use crate::prompt;

/// Inputs for one story-part generation.
///
/// `previous_text` and `choice_made` are ignored for part 1; for later parts
/// `previous_text` must carry the concatenated prose of all prior parts.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct StoryPartRequest {
    /// Target language
    pub language: String,
    /// Proficiency tier
    pub level: String,
    /// Story topic, also used as the story id by convention
    pub topic: String,
    /// 1-based part number
    #[builder(default = "1")]
    pub part_number: u32,
    /// Concatenated prose of all prior parts, in order
    #[builder(default)]
    pub previous_text: String,
    /// The branch description the reader selected
    #[builder(default)]
    pub choice_made: String,
    /// Sampling temperature override
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Nucleus sampling override
    #[builder(default)]
    pub top_p: Option<f32>,
    /// Maximum retry hint passed through to the gateway
    #[builder(default)]
    pub max_retries: Option<usize>,
}

/// Generates story parts through a completion gateway.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use linguatale_generate::{StoryGenerator, StoryPartRequestBuilder};
/// use linguatale_models::OpenAiClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let engine = StoryGenerator::new(Arc::new(OpenAiClient::new()?));
/// let request = StoryPartRequestBuilder::default()
///     .language("French")
///     .level("B1-B2")
///     .topic("A Trip to the Market")
///     .build()?;
/// let part = engine.generate_part(&request).await?;
/// println!("{}", part.text);
/// # Ok(())
/// # }
/// ```
pub struct StoryGenerator {
    driver: Arc<dyn CompletionDriver>,
}

impl std::fmt::Debug for StoryGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryGenerator")
            .field("provider", &self.driver.provider_name())
            .finish_non_exhaustive()
    }
}

impl StoryGenerator {
    /// Create an engine over the given gateway.
    pub fn new(driver: Arc<dyn CompletionDriver>) -> Self {
        Self { driver }
    }

    /// Generate one story part.
    ///
    /// Fails fast on an invalid part number or a missing continuation context
    /// before any gateway call is made. A gateway failure propagates as-is;
    /// a reply that does not decode to a JSON object is a schema failure.
    /// Missing fields inside a decoded object default to empty/false instead
    /// of failing.
    #[instrument(skip(self, req), fields(part = req.part_number, topic = %req.topic))]
    pub async fn generate_part(&self, req: &StoryPartRequest) -> LinguataleResult<StoryPart> {
        if req.part_number < 1 {
            return Err(StoryError::new(StoryErrorKind::InvalidPartNumber(req.part_number)).into());
        }

        let prompt = if req.part_number == 1 {
            prompt::story_opening(&req.language, &req.level, &req.topic)
        } else {
            if req.previous_text.trim().is_empty() {
                return Err(
                    StoryError::new(StoryErrorKind::MissingPreviousText(req.part_number)).into(),
                );
            }
            prompt::story_continuation(
                &req.language,
                &req.level,
                req.part_number,
                &req.previous_text,
                &req.choice_made,
            )
        };

        let mut completion = CompletionRequest::from_prompt(prompt, req.temperature, req.top_p);
        completion.max_retries = req.max_retries;

        let reply = self.driver.complete(&completion).await?;
        let fields = require_object(&reply)?;

        debug!(
            is_final = bool_field(&fields, "is_final"),
            "Decoded story part"
        );

        let part = StoryPart::new(
            str_field(&fields, "story_text"),
            str_field(&fields, "choice_1"),
            str_field(&fields, "choice_2"),
            bool_field(&fields, "is_final"),
        );

        if req.part_number > 1 {
            Ok(part.with_choice_made(&req.choice_made))
        } else {
            Ok(part)
        }
    }
}

/// Decode a reply and insist on a JSON object.
fn require_object(reply: &str) -> LinguataleResult<Map<String, Value>> {
    match decode(reply) {
        Decoded::Json(Value::Object(map)) => Ok(map),
        Decoded::Json(other) => Err(StoryError::new(StoryErrorKind::SchemaMismatch(format!(
            "expected object, got {}",
            json_type_name(&other)
        )))
        .into()),
        Decoded::Raw(text) => Err(StoryError::new(StoryErrorKind::SchemaMismatch(preview(
            &text,
        )))
        .into()),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// First 100 chars of an unusable reply, for the error message.
pub(crate) fn preview(text: &str) -> String {
    text.chars().take(100).collect()
}

fn str_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn bool_field(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).and_then(Value::as_bool).unwrap_or(false)
}
