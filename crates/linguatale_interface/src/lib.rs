//! Driver trait and shared domain records for the Linguatale library.
//!
//! This crate defines the [`CompletionDriver`] trait implemented by gateway
//! backends, plus the record types shared between the generation engine and
//! the session stores: story aggregates, their parts and summaries, and the
//! artifact records appended to the generation history.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod story;
pub mod timestamp;
mod traits;

pub use artifact::{
    Exercise, GeneratedText, GeneratedTextBuilder, KeyWord, Question, TranslationLine,
};
pub use story::{Story, StoryMetadata, StoryPart, StorySummary};
pub use timestamp::{now, TIMESTAMP_FORMAT};
pub use traits::CompletionDriver;
