//! Linguatale - language-learning text generation
//!
//! Linguatale generates language-learning artifacts - prose passages,
//! interactive branching stories, summaries, vocabulary, comprehension
//! questions, exercises, and translations - by prompting an LLM
//! text-completion service and persisting the results for later retrieval.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use linguatale::{
//!     OpenAiClient, SessionStore, StoryGenerator, StoryMetadata, StoryPartRequestBuilder,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = StoryGenerator::new(Arc::new(OpenAiClient::new()?));
//!     let session = SessionStore::new();
//!
//!     let request = StoryPartRequestBuilder::default()
//!         .language("French")
//!         .level("B1-B2")
//!         .topic("A Trip to the Market")
//!         .build()?;
//!
//!     let part = engine.generate_part(&request).await?;
//!     let story = session.stories().append(
//!         "A Trip to the Market",
//!         1,
//!         part,
//!         &StoryMetadata::new("French", "B1-B2"),
//!     );
//!     println!("{} parts so far", story.parts_count());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Linguatale is organized as a workspace with focused crates:
//!
//! - `linguatale_error` - Error types
//! - `linguatale_core` - Core data types, language domain data, settings
//! - `linguatale_interface` - CompletionDriver trait and shared records
//! - `linguatale_models` - Completion gateway implementations
//! - `linguatale_generate` - Story continuation engine and artifact generators
//! - `linguatale_storage` - Story store, history log, session persistence
//!
//! This crate (`linguatale`) re-exports everything for convenience.

// Re-export the full public surface
pub use linguatale_core::*;
pub use linguatale_error::*;
pub use linguatale_generate::*;
pub use linguatale_interface::*;
pub use linguatale_models::*;
pub use linguatale_storage::*;
