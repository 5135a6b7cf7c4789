//! Passage and study-artifact generators.
//!
//! Each operation is one gateway call. Passages and summaries come back as
//! plain prose; vocabulary, questions, exercises, and translations come back
//! as JSON and are decoded into their record types. Models wrap list replies
//! inconsistently, so both a bare array and an object carrying the array
//! under a known key decode here.

use std::sync::Arc;

use derive_builder::Builder;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;

use linguatale_core::{CompletionRequest, TextType, DEFAULT_WORD_COUNT};
use linguatale_error::{JsonError, LinguataleResult, StoryError, StoryErrorKind};
use linguatale_interface::{CompletionDriver, Exercise, KeyWord, Question, TranslationLine};

use crate::decode::{decode, Decoded};
use crate::prompt;
use crate::story::preview;

/// Sampling temperatures tuned per artifact; factual artifacts run cold.
const TOPIC_TEMPERATURE: f32 = 0.9;
const SUMMARY_TEMPERATURE: f32 = 0.3;
const KEY_WORDS_TEMPERATURE: f32 = 0.3;
const QUESTIONS_TEMPERATURE: f32 = 0.3;
const EXERCISES_TEMPERATURE: f32 = 0.4;
const TRANSLATION_TEMPERATURE: f32 = 0.3;

/// Shared nucleus sampling parameter for artifact calls.
const ARTIFACT_TOP_P: f32 = 0.9;

/// Inputs for one passage generation.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct PassageRequest {
    /// Target language
    pub language: String,
    /// Proficiency tier
    pub level: String,
    /// Passage topic
    pub topic: String,
    /// Approximate word count
    #[builder(default = "DEFAULT_WORD_COUNT")]
    pub word_count: u32,
    /// The kind of passage requested
    #[builder(default)]
    pub text_type: TextType,
    /// Sampling temperature override
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Nucleus sampling override
    #[builder(default)]
    pub top_p: Option<f32>,
}

/// Generates passages and study artifacts through a completion gateway.
pub struct TextGenerator {
    driver: Arc<dyn CompletionDriver>,
}

impl std::fmt::Debug for TextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextGenerator")
            .field("provider", &self.driver.provider_name())
            .finish_non_exhaustive()
    }
}

impl TextGenerator {
    /// Create a generator over the given gateway.
    pub fn new(driver: Arc<dyn CompletionDriver>) -> Self {
        Self { driver }
    }

    /// Generate a free-standing passage.
    #[instrument(skip(self, req), fields(topic = %req.topic, words = req.word_count))]
    pub async fn generate_passage(&self, req: &PassageRequest) -> LinguataleResult<String> {
        if req.topic.trim().is_empty() {
            return Err(StoryError::new(StoryErrorKind::EmptyInput("topic".to_string())).into());
        }
        let prompt = prompt::passage(
            &req.language,
            &req.level,
            req.word_count,
            &req.topic,
            req.text_type,
        );
        self.driver
            .complete(&CompletionRequest::from_prompt(
                prompt,
                req.temperature,
                req.top_p,
            ))
            .await
    }

    /// Suggest a topic for the given language and tier.
    #[instrument(skip(self))]
    pub async fn suggest_topic(&self, language: &str, level: &str) -> LinguataleResult<String> {
        let prompt = prompt::topic_suggestion(language, level);
        let topic = self
            .driver
            .complete(&CompletionRequest::from_prompt(
                prompt,
                Some(TOPIC_TEMPERATURE),
                Some(ARTIFACT_TOP_P),
            ))
            .await?;
        Ok(topic.trim().to_string())
    }

    /// Summarize a passage in 3-5 sentences.
    #[instrument(skip(self, text))]
    pub async fn summarize(
        &self,
        text: &str,
        language: &str,
        level: &str,
    ) -> LinguataleResult<String> {
        require_text(text)?;
        let prompt = prompt::summary(text, language, level);
        self.driver
            .complete(&CompletionRequest::from_prompt(
                prompt,
                Some(SUMMARY_TEMPERATURE),
                Some(ARTIFACT_TOP_P),
            ))
            .await
    }

    /// Extract key vocabulary from a passage.
    #[instrument(skip(self, text))]
    pub async fn key_words(
        &self,
        text: &str,
        language: &str,
        level: &str,
        count: usize,
    ) -> LinguataleResult<Vec<KeyWord>> {
        require_text(text)?;
        let prompt = prompt::key_words(text, language, level, count);
        let reply = self
            .driver
            .complete(&CompletionRequest::from_prompt(
                prompt,
                Some(KEY_WORDS_TEMPERATURE),
                Some(ARTIFACT_TOP_P),
            ))
            .await?;
        decode_records(&reply, "key_words")
    }

    /// Generate comprehension questions on a passage.
    #[instrument(skip(self, text))]
    pub async fn comprehension_questions(
        &self,
        text: &str,
        language: &str,
        level: &str,
        count: usize,
    ) -> LinguataleResult<Vec<Question>> {
        require_text(text)?;
        let prompt = prompt::comprehension_questions(text, language, level, count);
        let reply = self
            .driver
            .complete(&CompletionRequest::from_prompt(
                prompt,
                Some(QUESTIONS_TEMPERATURE),
                Some(ARTIFACT_TOP_P),
            ))
            .await?;
        decode_records(&reply, "questions")
    }

    /// Generate language exercises from a passage.
    #[instrument(skip(self, text))]
    pub async fn exercises(
        &self,
        text: &str,
        language: &str,
        level: &str,
        count: usize,
    ) -> LinguataleResult<Vec<Exercise>> {
        require_text(text)?;
        let prompt = prompt::exercises(text, language, level, count);
        let reply = self
            .driver
            .complete(&CompletionRequest::from_prompt(
                prompt,
                Some(EXERCISES_TEMPERATURE),
                Some(ARTIFACT_TOP_P),
            ))
            .await?;
        decode_records(&reply, "exercises")
    }

    /// Translate a passage line by line.
    #[instrument(skip(self, text))]
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
        level: &str,
    ) -> LinguataleResult<Vec<TranslationLine>> {
        require_text(text)?;
        if source_language == target_language {
            return Err(StoryError::new(StoryErrorKind::SameLanguageTranslation(
                target_language.to_string(),
            ))
            .into());
        }
        let prompt = prompt::translation(text, source_language, target_language, level);
        let reply = self
            .driver
            .complete(&CompletionRequest::from_prompt(
                prompt,
                Some(TRANSLATION_TEMPERATURE),
                Some(ARTIFACT_TOP_P),
            ))
            .await?;
        decode_records(&reply, "translation")
    }
}

fn require_text(text: &str) -> LinguataleResult<()> {
    if text.trim().is_empty() {
        Err(StoryError::new(StoryErrorKind::EmptyInput("text".to_string())).into())
    } else {
        Ok(())
    }
}

/// Decode a reply into a list of records.
///
/// Accepts either a bare JSON array or an object wrapping the array under
/// `wrapper_key`. Anything else is a schema failure.
fn decode_records<T: DeserializeOwned>(reply: &str, wrapper_key: &str) -> LinguataleResult<Vec<T>> {
    let items = match decode(reply) {
        Decoded::Json(Value::Array(items)) => Value::Array(items),
        Decoded::Json(Value::Object(mut map)) => match map.remove(wrapper_key) {
            Some(Value::Array(items)) => Value::Array(items),
            _ => {
                return Err(StoryError::new(StoryErrorKind::MissingField(
                    wrapper_key.to_string(),
                ))
                .into());
            }
        },
        Decoded::Json(other) => {
            return Err(StoryError::new(StoryErrorKind::SchemaMismatch(format!(
                "expected array or object, got {}",
                preview(&other.to_string())
            )))
            .into());
        }
        Decoded::Raw(text) => {
            return Err(StoryError::new(StoryErrorKind::SchemaMismatch(preview(&text))).into());
        }
    };

    serde_json::from_value(items)
        .map_err(|e| JsonError::new(format!("Record list did not deserialize: {}", e)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_records_accepts_both_shapes() {
        let bare = r#"[{"question":"Q?","answer":"A."}]"#;
        let wrapped = r#"{"questions":[{"question":"Q?","answer":"A."}]}"#;

        let from_bare: Vec<Question> = decode_records(bare, "questions").unwrap();
        let from_wrapped: Vec<Question> = decode_records(wrapped, "questions").unwrap();
        assert_eq!(from_bare, from_wrapped);
    }

    #[test]
    fn decode_records_rejects_prose() {
        let result: LinguataleResult<Vec<Question>> =
            decode_records("Sorry, I cannot help.", "questions");
        assert!(result.is_err());
    }
}
