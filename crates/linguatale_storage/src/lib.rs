//! Session storage for Linguatale stories and generation history.
//!
//! The story store and history log are the only shared mutable state in the
//! system; each guards its records behind one coarse lock. The session store
//! combines both behind an explicit construct/load/save lifecycle so callers
//! inject an instance instead of reaching for ambient global state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod history;
mod session;
mod story_store;

pub use history::HistoryLog;
pub use session::{SessionDocument, SessionStore};
pub use story_store::StoryStore;
