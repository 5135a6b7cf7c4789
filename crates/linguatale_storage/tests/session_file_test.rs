//! Tests for session file persistence.

use linguatale_interface::{GeneratedTextBuilder, StoryMetadata, StoryPart};
use linguatale_storage::SessionStore;

fn populated_session() -> SessionStore {
    let session = SessionStore::new();
    session.stories().append(
        "A Trip to the Market",
        1,
        StoryPart::new("Marie arrive au marché.", "Buy vegetables", "Visit the bakery", false),
        &StoryMetadata::new("French", "B1-B2"),
    );
    session.history().append(
        GeneratedTextBuilder::default()
            .topic("Les saisons")
            .text("L'automne arrive...")
            .language("French")
            .level("B1-B2")
            .word_count(500u32)
            .build()
            .unwrap(),
    );
    session
}

#[test]
fn session_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let session = populated_session();
    session.save_to_file(&path).unwrap();

    let loaded = SessionStore::from_file(&path).unwrap();
    assert_eq!(loaded.stories().len(), 1);
    assert_eq!(loaded.history().len(), 1);

    let story = loaded.stories().get("A Trip to the Market").unwrap();
    assert_eq!(story.parts().get(&1).unwrap().choice_a, "Buy vegetables");
    assert_eq!(loaded.export(), session.export());
}

#[test]
fn persisted_document_uses_the_compatibility_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    populated_session().save_to_file(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    // Top-level keys and 1-based "part_<N>" keys are load-bearing for
    // interoperability with existing session files.
    assert!(value["history"].is_array());
    let story = &value["stories"]["A Trip to the Market"];
    assert!(story["parts"]["part_1"]["text"].is_string());
    assert!(story["parts"]["part_1"]["choice_1"].is_string());
    assert!(story["last_updated"].is_string());
}

#[test]
fn loading_a_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert!(SessionStore::from_file(&path).is_err());
}

#[test]
fn loading_a_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(SessionStore::from_file(&path).is_err());
}

#[test]
fn import_replaces_existing_contents() {
    let session = populated_session();
    session.import(Default::default());
    assert!(session.stories().is_empty());
    assert!(session.history().is_empty());
}
