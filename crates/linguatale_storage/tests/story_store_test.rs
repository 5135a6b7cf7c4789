//! Tests for the story store.

use linguatale_interface::{StoryMetadata, StoryPart};
use linguatale_storage::StoryStore;

fn metadata() -> StoryMetadata {
    StoryMetadata::new("French", "B1-B2")
}

fn open_part(text: &str) -> StoryPart {
    StoryPart::new(text, "choice a", "choice b", false)
}

#[test]
fn first_append_creates_the_story() {
    let store = StoryStore::new();
    assert!(store.is_empty());

    let story = store.append("A Trip to the Market", 1, open_part("one"), &metadata());

    assert_eq!(story.title(), "A Trip to the Market");
    assert_eq!(story.language(), "French");
    assert_eq!(story.parts_count(), 1);
    assert_eq!(store.len(), 1);

    let fetched = store.get("A Trip to the Market").unwrap();
    assert_eq!(fetched.parts().get(&1).unwrap().text, "one");
}

#[test]
fn metadata_title_overrides_the_id_default() {
    let store = StoryStore::new();
    let meta = StoryMetadata {
        title: Some("Le Marché".to_string()),
        ..metadata()
    };
    let story = store.append("market-story", 1, open_part("one"), &meta);
    assert_eq!(story.title(), "Le Marché");
}

#[test]
fn appends_accumulate_and_refresh_last_updated() {
    let store = StoryStore::new();
    let first = store.append("id", 1, open_part("one"), &metadata());
    let second = store.append("id", 2, open_part("two"), &metadata());

    assert_eq!(second.parts_count(), 2);
    assert!(second.parts().contains_key(&1) && second.parts().contains_key(&2));
    assert!(second.last_updated() >= first.last_updated());
}

#[test]
fn overwriting_a_part_number_is_permitted() {
    let store = StoryStore::new();
    store.append("id", 1, open_part("draft"), &metadata());
    let story = store.append("id", 1, open_part("regenerated"), &metadata());

    assert_eq!(story.parts_count(), 1);
    assert_eq!(story.parts().get(&1).unwrap().text, "regenerated");
}

#[test]
fn completeness_follows_the_highest_part_only() {
    let store = StoryStore::new();
    store.append("id", 1, open_part("one"), &metadata());
    store.append("id", 2, StoryPart::new("two", "", "", true), &metadata());
    store.append("id", 3, open_part("three"), &metadata());

    // Part 2 is final but part 3 is the highest, so the story is not complete.
    let listing = store.list();
    assert_eq!(listing.len(), 1);
    assert!(!listing[0].is_complete);
    assert_eq!(listing[0].parts_count, 3);

    store.append("id", 3, StoryPart::new("the end", "", "", true), &metadata());
    assert!(store.list()[0].is_complete);
}

#[test]
fn listing_reports_summary_fields() {
    let store = StoryStore::new();
    store.append("A Trip to the Market", 1, open_part("one"), &metadata());

    let listing = store.list();
    assert_eq!(listing[0].id, "A Trip to the Market");
    assert_eq!(listing[0].title, "A Trip to the Market");
    assert_eq!(listing[0].language, "French");
    assert_eq!(listing[0].level, "B1-B2");
    assert_eq!(listing[0].parts_count, 1);
    assert!(!listing[0].is_complete);
}

#[test]
fn delete_is_idempotent_on_missing_ids() {
    let store = StoryStore::new();
    store.append("kept", 1, open_part("one"), &metadata());

    assert!(!store.delete("missing-id"));
    assert_eq!(store.len(), 1);

    assert!(store.delete("kept"));
    assert!(store.get("kept").is_none());
    assert!(!store.delete("kept"));
}
