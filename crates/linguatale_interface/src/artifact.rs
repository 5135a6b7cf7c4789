//! Artifact records appended to the generation history.

use crate::timestamp::ts_opt;
use chrono::NaiveDateTime;
use derive_builder::Builder;
use linguatale_core::TextType;
use serde::{Deserialize, Serialize};

/// A key vocabulary word extracted from a passage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyWord {
    /// The word itself
    pub word: String,
    /// Its meaning in the passage's language
    pub definition: String,
    /// An example sentence using the word
    pub example: String,
}

/// A comprehension question with its answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// The question
    pub question: String,
    /// The correct answer
    pub answer: String,
}

/// A language exercise built from a passage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Instructions for the learner
    pub instructions: String,
    /// The exercise content
    pub content: String,
    /// The correct answer or solution
    pub solution: String,
}

/// One line of a line-by-line translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationLine {
    /// The original line
    pub original: String,
    /// Its translation
    pub translation: String,
}

/// A complete generated passage with its associated study artifacts.
///
/// This is the record appended to the history log. Only the passage itself is
/// mandatory; every study artifact is optional and defaults to absent.
///
/// # Examples
///
/// ```
/// use linguatale_interface::GeneratedTextBuilder;
///
/// let record = GeneratedTextBuilder::default()
///     .topic("A Trip to the Market")
///     .text("Marie se promène au marché...")
///     .language("French")
///     .level("B1-B2")
///     .word_count(250u32)
///     .build()
///     .unwrap();
///
/// assert!(record.summary.is_none());
/// assert!(record.key_words.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
pub struct GeneratedText {
    /// Passage topic
    pub topic: String,
    /// The generated passage
    pub text: String,
    /// Passage language
    pub language: String,
    /// Proficiency tier the passage was written for
    pub level: String,
    /// The kind of passage requested
    #[serde(default)]
    pub text_type: TextType,
    /// Brief summary of the passage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Key vocabulary extracted from the passage
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_words: Vec<KeyWord>,
    /// Comprehension questions on the passage
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<Question>,
    /// Exercises built from the passage
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exercises: Vec<Exercise>,
    /// Line-by-line translation of the passage
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translation: Vec<TranslationLine>,
    /// Language the translation targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_language: Option<String>,
    /// When the record was appended (stamped by the history log when absent)
    #[serde(default, with = "ts_opt", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,
    /// Requested word count
    #[serde(default)]
    pub word_count: u32,
}
