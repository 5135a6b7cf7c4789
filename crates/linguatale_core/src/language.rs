//! Language, proficiency, and text-type domain data.
//!
//! Prompts embed the English name of the target language and the proficiency
//! tier, so these mappings sit in the core crate where every generator can
//! reach them.

use serde::{Deserialize, Serialize};

/// Languages offered by the generator.
pub const SUPPORTED_LANGUAGES: [&str; 10] = [
    "English",
    "Turkish",
    "German",
    "French",
    "Spanish",
    "Italian",
    "Dutch",
    "Russian",
    "Portuguese",
    "Japanese",
];

/// Word-count options offered for passage generation.
pub const TEXT_LENGTH_OPTIONS: [u32; 3] = [500, 750, 1000];

/// Resolve a language name to the English name embedded in prompts.
///
/// Unknown languages pass through unchanged, so callers can request languages
/// outside the supported list.
///
/// # Examples
///
/// ```
/// use linguatale_core::english_name;
///
/// assert_eq!(english_name("French"), "French");
/// assert_eq!(english_name("Klingon"), "Klingon");
/// ```
pub fn english_name(language: &str) -> &str {
    SUPPORTED_LANGUAGES
        .iter()
        .copied()
        .find(|l| *l == language)
        .unwrap_or(language)
}

/// A coarse language-skill tier controlling the vocabulary and grammar
/// complexity requested from the generator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum ProficiencyLevel {
    /// Beginner
    #[strum(serialize = "A1-A2")]
    #[serde(rename = "A1-A2")]
    A1A2,
    /// Intermediate
    #[strum(serialize = "B1-B2")]
    #[serde(rename = "B1-B2")]
    B1B2,
    /// Advanced
    #[strum(serialize = "C1-C2")]
    #[serde(rename = "C1-C2")]
    C1C2,
}

impl ProficiencyLevel {
    /// All tiers, lowest first.
    pub const ALL: [ProficiencyLevel; 3] = [
        ProficiencyLevel::A1A2,
        ProficiencyLevel::B1B2,
        ProficiencyLevel::C1C2,
    ];

    /// Recommended number of key vocabulary words to extract at this tier.
    pub const fn key_word_count(&self) -> usize {
        match self {
            ProficiencyLevel::A1A2 => 5,
            ProficiencyLevel::B1B2 => 8,
            ProficiencyLevel::C1C2 => 10,
        }
    }
}

/// Recommended key-word count for a free-form level string.
///
/// Unrecognized tiers fall back to the beginner recommendation.
///
/// # Examples
///
/// ```
/// use linguatale_core::key_word_count_for;
///
/// assert_eq!(key_word_count_for("B1-B2"), 8);
/// assert_eq!(key_word_count_for("native"), 5);
/// ```
pub fn key_word_count_for(level: &str) -> usize {
    level
        .parse::<ProficiencyLevel>()
        .map(|l| l.key_word_count())
        .unwrap_or(5)
}

/// The kind of passage requested from the generator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum TextType {
    /// No particular format
    #[default]
    General,
    /// A creative story
    Story,
    /// A dialogue between two or more people
    Dialogue,
    /// A letter
    Letter,
    /// An article
    Article,
    /// A news article
    News,
    /// An informative text
    Informative,
}

impl TextType {
    /// The formatting clause appended to the passage prompt, if any.
    pub fn format_clause(&self) -> Option<&'static str> {
        match self {
            TextType::General => None,
            TextType::Story => Some("a creative story"),
            TextType::Dialogue => Some("a dialogue between two or more people"),
            TextType::Letter => Some("a letter"),
            TextType::Article => Some("an article"),
            TextType::News => Some("a news article"),
            TextType::Informative => Some("an informative text"),
        }
    }
}
