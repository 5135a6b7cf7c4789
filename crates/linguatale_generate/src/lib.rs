//! Story continuation engine and artifact generators for Linguatale.
//!
//! This crate holds the generation core: the lenient [`decode`] pass over
//! model replies, the [`StoryGenerator`] that carries an interactive story
//! across independent stateless completion calls, and the [`TextGenerator`]
//! for passages and their study artifacts.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decode;
mod prompt;
mod story;
mod text;

pub use decode::{decode, Decoded};
pub use story::{StoryGenerator, StoryPartRequest, StoryPartRequestBuilder};
pub use text::{PassageRequest, PassageRequestBuilder, TextGenerator};
