//! Session store with explicit file persistence.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use linguatale_error::{LinguataleResult, StorageError, StorageErrorKind};
use linguatale_interface::{GeneratedText, Story};

use crate::{HistoryLog, StoryStore};

/// Wire shape of a persisted session: one JSON document holding the history
/// array and the stories object keyed by story id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionDocument {
    /// Generation history, in insertion order
    #[serde(default)]
    pub history: Vec<GeneratedText>,
    /// Stories keyed by id
    #[serde(default)]
    pub stories: HashMap<String, Story>,
}

/// The story store and history log behind one explicit lifecycle.
///
/// Constructed at process start (empty or from a session file), injected into
/// callers, and flushed to disk on demand. Nothing here persists implicitly.
///
/// # Examples
///
/// ```no_run
/// use linguatale_storage::SessionStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let session = SessionStore::from_file("session.json")?;
/// println!("{} stories", session.stories().len());
/// session.save_to_file("session.json")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SessionStore {
    stories: StoryStore,
    history: HistoryLog,
}

impl SessionStore {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The story repository.
    pub fn stories(&self) -> &StoryStore {
        &self.stories
    }

    /// The generation history log.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Snapshot the session as a document.
    pub fn export(&self) -> SessionDocument {
        SessionDocument {
            history: self.history.export(),
            stories: self.stories.export(),
        }
    }

    /// Replace the session contents with a document.
    pub fn import(&self, document: SessionDocument) {
        self.history.replace(document.history);
        self.stories.replace(document.stories);
    }

    /// Load a session from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as a
    /// session document.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> LinguataleResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| StorageError::new(StorageErrorKind::FileRead(e.to_string())))?;

        let document: SessionDocument = serde_json::from_str(&contents)
            .map_err(|e| StorageError::new(StorageErrorKind::Deserialize(e.to_string())))?;

        let session = Self::new();
        session.import(document);
        debug!(
            stories = session.stories.len(),
            history = session.history.len(),
            "Loaded session"
        );
        Ok(session)
    }

    /// Write the session to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> LinguataleResult<()> {
        let contents = serde_json::to_string_pretty(&self.export())
            .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;

        std::fs::write(path.as_ref(), contents)
            .map_err(|e| StorageError::new(StorageErrorKind::FileWrite(e.to_string())))?;

        debug!("Saved session");
        Ok(())
    }
}
