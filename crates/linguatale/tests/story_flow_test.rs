//! End-to-end flow: generate story parts through a scripted gateway and
//! drive them through the session store, as the route layer would.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use linguatale::{
    CompletionDriver, CompletionRequest, LinguataleResult, SessionStore, StoryGenerator,
    StoryMetadata, StoryPartRequestBuilder,
};

/// Gateway double that pops replies from a script, in order.
struct ScriptedDriver {
    replies: Mutex<Vec<String>>,
}

impl ScriptedDriver {
    fn new(replies: &[&str]) -> Arc<Self> {
        // Stored reversed so pop() yields the script in order.
        let mut replies: Vec<String> = replies.iter().map(|r| r.to_string()).collect();
        replies.reverse();
        Arc::new(Self {
            replies: Mutex::new(replies),
        })
    }
}

#[async_trait]
impl CompletionDriver for ScriptedDriver {
    async fn complete(&self, _req: &CompletionRequest) -> LinguataleResult<String> {
        Ok(self
            .replies
            .lock()
            .unwrap()
            .pop()
            .expect("script exhausted"))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

const STORY_ID: &str = "A Trip to the Market";

#[tokio::test]
async fn a_story_runs_from_opening_to_ending() {
    let driver = ScriptedDriver::new(&[
        "```json\n{\"story_text\": \"Marie arrive au marché un samedi matin.\", \
         \"choice_1\": \"Buy vegetables\", \"choice_2\": \"Visit the bakery\"}\n```",
        "{\"story_text\": \"Elle choisit des tomates bien mûres.\", \
         \"choice_1\": \"Go home\", \"choice_2\": \"Keep shopping\", \"is_final\": false}",
        "```json\n{\"story_text\": \"Marie rentre chez elle, son panier plein.\", \
         \"choice_1\": \"\", \"choice_2\": \"\", \"is_final\": true}\n```",
    ]);

    let engine = StoryGenerator::new(driver);
    let session = SessionStore::new();
    let metadata = StoryMetadata::new("French", "B1-B2");

    // Part 1: opening scene from the topic alone.
    let request = StoryPartRequestBuilder::default()
        .language("French")
        .level("B1-B2")
        .topic(STORY_ID)
        .build()
        .unwrap();
    let part = engine.generate_part(&request).await.unwrap();
    assert_eq!(part.choice_a, "Buy vegetables");
    assert!(!part.is_final);

    let story = session.stories().append(STORY_ID, 1, part, &metadata);
    assert_eq!(story.parts_count(), 1);

    let listing = session.stories().list();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].parts_count, 1);
    assert!(!listing[0].is_complete);

    // Part 2: continuation embeds the prior prose and the reader's choice.
    let request = StoryPartRequestBuilder::default()
        .language("French")
        .level("B1-B2")
        .topic(STORY_ID)
        .part_number(2u32)
        .previous_text(story.full_text(None))
        .choice_made("Buy vegetables")
        .build()
        .unwrap();
    let part = engine.generate_part(&request).await.unwrap();
    assert_eq!(part.choice_made.as_deref(), Some("Buy vegetables"));

    let story = session.stories().append(STORY_ID, 2, part, &metadata);
    assert!(!story.is_complete());

    // Part 3: the model ends the story.
    let request = StoryPartRequestBuilder::default()
        .language("French")
        .level("B1-B2")
        .topic(STORY_ID)
        .part_number(3u32)
        .previous_text(story.full_text(None))
        .choice_made("Go home")
        .build()
        .unwrap();
    let part = engine.generate_part(&request).await.unwrap();
    assert!(part.is_final);
    assert!(part.choice_a.is_empty() && part.choice_b.is_empty());

    let story = session.stories().append(STORY_ID, 3, part, &metadata);
    assert!(story.is_complete());

    let listing = session.stories().list();
    assert_eq!(listing[0].parts_count, 3);
    assert!(listing[0].is_complete);

    // Deleting the story leaves the store empty.
    assert!(session.stories().delete(STORY_ID));
    assert!(session.stories().get(STORY_ID).is_none());
}

#[tokio::test]
async fn a_failed_generation_writes_nothing() {
    // Prose instead of JSON: the engine reports a schema failure and the
    // caller never reaches the store, so prior state is retained.
    let driver = ScriptedDriver::new(&[
        "{\"story_text\": \"Début.\", \"choice_1\": \"a\", \"choice_2\": \"b\"}",
        "Sorry, no JSON today.",
    ]);

    let engine = StoryGenerator::new(driver);
    let session = SessionStore::new();
    let metadata = StoryMetadata::new("French", "B1-B2");

    let request = StoryPartRequestBuilder::default()
        .language("French")
        .level("B1-B2")
        .topic(STORY_ID)
        .build()
        .unwrap();
    let part = engine.generate_part(&request).await.unwrap();
    session.stories().append(STORY_ID, 1, part, &metadata);

    let request = StoryPartRequestBuilder::default()
        .language("French")
        .level("B1-B2")
        .topic(STORY_ID)
        .part_number(2u32)
        .previous_text("Début.")
        .choice_made("a")
        .build()
        .unwrap();
    assert!(engine.generate_part(&request).await.is_err());

    let story = session.stories().get(STORY_ID).unwrap();
    assert_eq!(story.parts_count(), 1);
}
