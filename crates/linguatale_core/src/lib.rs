//! Core data types for the Linguatale text generation library.
//!
//! This crate provides the foundation data types used across all Linguatale
//! interfaces: the completion request shape sent to the gateway, the language
//! and proficiency domain data embedded into prompts, and runtime settings.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod language;
mod message;
mod request;
mod role;
mod settings;
mod telemetry;

pub use language::{
    ProficiencyLevel, TextType, SUPPORTED_LANGUAGES, TEXT_LENGTH_OPTIONS, english_name,
    key_word_count_for,
};
pub use message::Message;
pub use request::{CompletionRequest, CompletionRequestBuilder, SYSTEM_PROMPT};
pub use role::Role;
pub use settings::{
    Settings, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TOP_P, DEFAULT_WORD_COUNT,
    API_MAX_RETRIES, API_TIMEOUT_SECS,
};
pub use telemetry::init_tracing;
