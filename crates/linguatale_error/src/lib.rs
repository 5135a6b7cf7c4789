//! Error types for the Linguatale library.
//!
//! This crate provides the foundation error types used throughout the Linguatale
//! ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use linguatale_error::{LinguataleResult, HttpError};
//!
//! fn fetch_data() -> LinguataleResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod json;
mod openai;
mod storage;
mod story;

pub use config::ConfigError;
pub use error::{LinguataleError, LinguataleErrorKind, LinguataleResult};
pub use http::HttpError;
pub use json::JsonError;
pub use openai::{OpenAiError, OpenAiErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use story::{StoryError, StoryErrorKind};
