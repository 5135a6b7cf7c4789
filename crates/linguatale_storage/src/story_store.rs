//! Keyed repository of story aggregates.

use std::collections::HashMap;
use std::sync::Mutex;

use linguatale_interface::{Story, StoryMetadata, StoryPart, StorySummary};
use tracing::{debug, instrument};

/// Keyed repository of story aggregates.
///
/// A story is created lazily on the first append for its id; there is no
/// explicit create operation. Every read-modify-write sequence runs under one
/// coarse lock, so concurrent appends to the same story id cannot lose
/// updates.
///
/// Listing order follows the underlying map and is not guaranteed sorted;
/// callers needing a stable order must sort explicitly.
#[derive(Debug, Default)]
pub struct StoryStore {
    stories: Mutex<HashMap<String, Story>>,
}

impl StoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `part` at `part_number`, creating the story when absent.
    ///
    /// On lazy creation the title defaults to the story id when `metadata`
    /// carries none. Overwriting an existing part number is permitted;
    /// re-generating a beat replaces it. Returns the full updated aggregate.
    #[instrument(skip(self, part, metadata))]
    pub fn append(
        &self,
        story_id: &str,
        part_number: u32,
        part: StoryPart,
        metadata: &StoryMetadata,
    ) -> Story {
        let mut stories = self.stories.lock().unwrap();
        let story = stories.entry(story_id.to_string()).or_insert_with(|| {
            debug!(story_id, "Creating story on first append");
            let title = metadata
                .title
                .clone()
                .unwrap_or_else(|| story_id.to_string());
            Story::new(title, &metadata.language, &metadata.level)
        });
        story.insert_part(part_number, part);
        story.clone()
    }

    /// Fetch a story by id.
    pub fn get(&self, story_id: &str) -> Option<Story> {
        self.stories.lock().unwrap().get(story_id).cloned()
    }

    /// Remove a story by id.
    ///
    /// Returns whether a story existed; a missing id is not an error.
    #[instrument(skip(self))]
    pub fn delete(&self, story_id: &str) -> bool {
        self.stories.lock().unwrap().remove(story_id).is_some()
    }

    /// Summaries of all stored stories.
    pub fn list(&self) -> Vec<StorySummary> {
        self.stories
            .lock()
            .unwrap()
            .iter()
            .map(|(id, story)| story.summarize(id))
            .collect()
    }

    /// Number of stored stories.
    pub fn len(&self) -> usize {
        self.stories.lock().unwrap().len()
    }

    /// Whether the store holds no stories.
    pub fn is_empty(&self) -> bool {
        self.stories.lock().unwrap().is_empty()
    }

    /// Snapshot of the full map, for session export.
    pub(crate) fn export(&self) -> HashMap<String, Story> {
        self.stories.lock().unwrap().clone()
    }

    /// Replace the full map, for session import.
    pub(crate) fn replace(&self, stories: HashMap<String, Story>) {
        *self.stories.lock().unwrap() = stories;
    }
}
