//! Completion gateway implementations for the Linguatale library.
//!
//! The gateway owns everything the generation engine should not care about:
//! authentication, the wire protocol, per-attempt timeouts, and retry with a
//! fixed inter-attempt delay.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::OpenAiClient;
