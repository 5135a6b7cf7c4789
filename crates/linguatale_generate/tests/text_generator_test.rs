//! Tests for the passage and artifact generators over a scripted gateway.

use std::sync::Arc;

use async_trait::async_trait;
use linguatale_core::CompletionRequest;
use linguatale_error::LinguataleResult;
use linguatale_generate::{PassageRequestBuilder, TextGenerator};
use linguatale_interface::CompletionDriver;

struct EchoDriver {
    reply: String,
}

impl EchoDriver {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
        })
    }
}

#[async_trait]
impl CompletionDriver for EchoDriver {
    async fn complete(&self, _req: &CompletionRequest) -> LinguataleResult<String> {
        Ok(self.reply.clone())
    }

    fn provider_name(&self) -> &'static str {
        "echo"
    }

    fn model_name(&self) -> &str {
        "echo-model"
    }
}

#[tokio::test]
async fn passage_comes_back_as_plain_prose() {
    let generator = TextGenerator::new(EchoDriver::new("Ein kurzer Text über mein Haus."));
    let request = PassageRequestBuilder::default()
        .language("German")
        .level("A1-A2")
        .topic("Mein Haus")
        .word_count(500u32)
        .build()
        .unwrap();

    let text = generator.generate_passage(&request).await.unwrap();
    assert_eq!(text, "Ein kurzer Text über mein Haus.");
}

#[tokio::test]
async fn empty_topic_is_rejected() {
    let generator = TextGenerator::new(EchoDriver::new("unused"));
    let request = PassageRequestBuilder::default()
        .language("German")
        .level("A1-A2")
        .topic("   ")
        .build()
        .unwrap();

    assert!(generator.generate_passage(&request).await.is_err());
}

#[tokio::test]
async fn topic_suggestions_are_trimmed() {
    let generator = TextGenerator::new(EchoDriver::new("  Les marchés de Provence \n"));
    let topic = generator.suggest_topic("French", "B1-B2").await.unwrap();
    assert_eq!(topic, "Les marchés de Provence");
}

#[tokio::test]
async fn key_words_decode_from_a_fenced_array() {
    let generator = TextGenerator::new(EchoDriver::new(
        "```json\n[{\"word\": \"marché\", \"definition\": \"market\", \
         \"example\": \"Je vais au marché.\"}]\n```",
    ));

    let words = generator
        .key_words("Je vais au marché.", "French", "B1-B2", 5)
        .await
        .unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word, "marché");
}

#[tokio::test]
async fn questions_decode_from_a_wrapped_object() {
    let generator = TextGenerator::new(EchoDriver::new(
        "{\"questions\": [{\"question\": \"Où va Marie?\", \"answer\": \"Au marché.\"}]}",
    ));

    let questions = generator
        .comprehension_questions("Marie va au marché.", "French", "B1-B2", 5)
        .await
        .unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].answer, "Au marché.");
}

#[tokio::test]
async fn exercises_decode_from_a_wrapped_object() {
    let generator = TextGenerator::new(EchoDriver::new(
        "{\"exercises\": [{\"instructions\": \"Fill in the blank.\", \
         \"content\": \"Marie va au ___.\", \"solution\": \"marché\"}]}",
    ));

    let exercises = generator
        .exercises("Marie va au marché.", "French", "B1-B2", 3)
        .await
        .unwrap();
    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0].solution, "marché");
}

#[tokio::test]
async fn translation_decodes_from_an_array() {
    let generator = TextGenerator::new(EchoDriver::new(
        "[{\"original\": \"Marie va au marché.\", \"translation\": \"Marie goes to the market.\"}]",
    ));

    let lines = generator
        .translate("Marie va au marché.", "French", "English", "B1-B2")
        .await
        .unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].translation, "Marie goes to the market.");
}

#[tokio::test]
async fn translating_into_the_source_language_is_rejected() {
    let generator = TextGenerator::new(EchoDriver::new("unused"));
    let result = generator
        .translate("Marie va au marché.", "French", "French", "B1-B2")
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn prose_reply_for_key_words_is_a_schema_failure() {
    let generator = TextGenerator::new(EchoDriver::new("I'm sorry, I can't produce JSON."));
    let result = generator
        .key_words("Marie va au marché.", "French", "B1-B2", 5)
        .await;
    assert!(result.is_err());
}
