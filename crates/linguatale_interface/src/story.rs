//! Story aggregates: an ordered, branch-following narrative.
//!
//! A story records a single committed path through an interactive narrative:
//! once a choice is made and the next part generated, only that path is
//! retained. Parts are numbered densely from 1 and serialize under
//! `"part_<N>"` keys for compatibility with existing session documents.

use crate::timestamp::{self, ts};
use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One narrative beat.
///
/// A terminal part carries no forward branches; the constructor enforces
/// that invariant by clearing both choices when `is_final` is set.
///
/// # Examples
///
/// ```
/// use linguatale_interface::StoryPart;
///
/// let ending = StoryPart::new("The end.", "ignored", "ignored", true);
/// assert!(ending.is_final);
/// assert!(ending.choice_a.is_empty());
/// assert!(ending.choice_b.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoryPart {
    /// Narrative prose for this beat
    #[serde(default)]
    pub text: String,
    /// First forward branch, empty on terminal parts
    #[serde(rename = "choice_1", default)]
    pub choice_a: String,
    /// Second forward branch, empty on terminal parts
    #[serde(rename = "choice_2", default)]
    pub choice_b: String,
    /// True when no further parts should be requested
    #[serde(default)]
    pub is_final: bool,
    /// The choice text that led the reader into this part (absent on part 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice_made: Option<String>,
}

impl StoryPart {
    /// Create a part, clearing both choices when the part is terminal.
    pub fn new(
        text: impl Into<String>,
        choice_a: impl Into<String>,
        choice_b: impl Into<String>,
        is_final: bool,
    ) -> Self {
        let (choice_a, choice_b) = if is_final {
            (String::new(), String::new())
        } else {
            (choice_a.into(), choice_b.into())
        };
        Self {
            text: text.into(),
            choice_a,
            choice_b,
            is_final,
            choice_made: None,
        }
    }

    /// Record the choice that led into this part.
    pub fn with_choice_made(mut self, choice_made: impl Into<String>) -> Self {
        let choice_made = choice_made.into();
        if !choice_made.is_empty() {
            self.choice_made = Some(choice_made);
        }
        self
    }
}

/// Creation metadata for a story aggregate.
///
/// Used by the store on lazy creation; a missing title defaults to the
/// story id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoryMetadata {
    /// Story title (defaults to the story id when absent)
    pub title: Option<String>,
    /// Target language
    pub language: String,
    /// Proficiency tier
    pub level: String,
}

impl StoryMetadata {
    /// Metadata with the default title.
    pub fn new(language: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            title: None,
            language: language.into(),
            level: level.into(),
        }
    }
}

/// An ordered branch-following narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Story {
    /// Story title
    title: String,
    /// Target language
    language: String,
    /// Proficiency tier
    level: String,
    /// Parts keyed by 1-based sequential part number
    #[serde(with = "part_keys")]
    parts: BTreeMap<u32, StoryPart>,
    /// Timestamp of the most recent part write
    #[serde(with = "ts")]
    last_updated: NaiveDateTime,
}

impl Story {
    /// Create an empty story.
    pub fn new(
        title: impl Into<String>,
        language: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            language: language.into(),
            level: level.into(),
            parts: BTreeMap::new(),
            last_updated: timestamp::now(),
        }
    }

    /// Insert a part at the given number, refreshing `last_updated`.
    ///
    /// Overwriting an existing part number is permitted; re-generating the
    /// same beat replaces the earlier text.
    pub fn insert_part(&mut self, part_number: u32, part: StoryPart) {
        self.parts.insert(part_number, part);
        self.last_updated = timestamp::now();
    }

    /// Number of parts written so far.
    pub fn parts_count(&self) -> usize {
        self.parts.len()
    }

    /// The highest-numbered part, if any.
    pub fn latest_part(&self) -> Option<(u32, &StoryPart)> {
        self.parts.iter().next_back().map(|(n, p)| (*n, p))
    }

    /// Whether the story has reached its ending.
    ///
    /// Only the part at the highest part number counts; a final marker on an
    /// earlier, overwritten beat does not complete the story. A story with no
    /// parts is never complete.
    pub fn is_complete(&self) -> bool {
        self.latest_part().is_some_and(|(_, part)| part.is_final)
    }

    /// Concatenated prose of all parts up to `up_to` (or all parts), in order.
    pub fn full_text(&self, up_to: Option<u32>) -> String {
        let mut text = String::new();
        for (number, part) in &self.parts {
            if up_to.is_some_and(|limit| *number > limit) {
                break;
            }
            text.push_str(&part.text);
            text.push_str("\n\n");
        }
        text
    }

    /// Build the listing summary for this story.
    pub fn summarize(&self, id: impl Into<String>) -> StorySummary {
        StorySummary {
            id: id.into(),
            title: self.title.clone(),
            language: self.language.clone(),
            level: self.level.clone(),
            parts_count: self.parts_count(),
            is_complete: self.is_complete(),
            last_updated: self.last_updated,
        }
    }
}

/// Listing view of a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorySummary {
    /// Story identifier
    pub id: String,
    /// Story title
    pub title: String,
    /// Target language
    pub language: String,
    /// Proficiency tier
    pub level: String,
    /// Number of parts written
    pub parts_count: usize,
    /// Whether the highest-numbered part is terminal
    pub is_complete: bool,
    /// Timestamp of the most recent part write
    #[serde(with = "ts")]
    pub last_updated: NaiveDateTime,
}

/// Serde adapter mapping part numbers to `"part_<N>"` object keys.
mod part_keys {
    use super::StoryPart;
    use serde::de::Error as DeError;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(
        parts: &BTreeMap<u32, StoryPart>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(parts.len()))?;
        for (number, part) in parts {
            map.serialize_entry(&format!("part_{}", number), part)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<u32, StoryPart>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: BTreeMap<String, StoryPart> = BTreeMap::deserialize(deserializer)?;
        let mut parts = BTreeMap::new();
        for (key, part) in raw {
            let number = key
                .strip_prefix("part_")
                .and_then(|n| n.parse::<u32>().ok())
                .ok_or_else(|| D::Error::custom(format!("invalid part key '{}'", key)))?;
            parts.insert(number, part);
        }
        Ok(parts)
    }
}
