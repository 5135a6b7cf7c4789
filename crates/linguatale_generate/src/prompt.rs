//! Prompt construction for every generator.
//!
//! Prompt wording is compatibility-relevant: the JSON field names demanded
//! here (`story_text`, `choice_1`, `choice_2`, `is_final`, ...) are the names
//! the decoders expect back. Change them in both places or not at all.

use linguatale_core::{english_name, TextType};

/// Character limits applied to source text embedded in follow-up prompts,
/// to keep the request under the model's context budget.
pub(crate) const SUMMARY_TEXT_LIMIT: usize = 2000;
pub(crate) const ARTIFACT_TEXT_LIMIT: usize = 1500;
pub(crate) const TRANSLATION_TEXT_LIMIT: usize = 2000;

/// Truncate on a char boundary.
pub(crate) fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Opening prompt for part 1 of an interactive story.
pub(crate) fn story_opening(language: &str, level: &str, topic: &str) -> String {
    let lang = english_name(language);
    format!(
        "Generate the beginning of an interactive story in {lang} at {level} level \
         with the title/topic: \"{topic}\".\n\n\
         The story should be appropriate for language learners at {level} level.\n\
         Write approximately 200-250 words for this first part.\n\n\
         At the end of this part, provide TWO different choices for how the story could continue.\n\n\
         Format your response as a JSON object with these fields:\n\
         - \"story_text\": The main text of this part of the story\n\
         - \"choice_1\": A brief description of the first choice (about 15-20 words)\n\
         - \"choice_2\": A brief description of the second choice (about 15-20 words)\n\n\
         Make sure the JSON is properly formatted and valid."
    )
}

/// Continuation prompt for parts after the first.
///
/// The model itself decides termination; the prompt only asks it to consider
/// whether this part should end the story.
pub(crate) fn story_continuation(
    language: &str,
    level: &str,
    part_number: u32,
    previous_text: &str,
    choice_made: &str,
) -> String {
    let lang = english_name(language);
    format!(
        "Continue the interactive story in {lang} at {level} level.\n\n\
         Previous story parts:\n{previous_text}\n\n\
         The reader chose: \"{choice_made}\"\n\n\
         Continue the story based on this choice for approximately 200-250 words.\n\n\
         At the end of this part, provide TWO different choices for how the story could continue.\n\
         Unless this should be the final part (part {part_number}), in which case provide \
         a satisfying ending with no choices.\n\n\
         Format your response as a JSON object with these fields:\n\
         - \"story_text\": The continuation of the story based on the choice made\n\
         - \"choice_1\": A brief description of the first choice (about 15-20 words) or empty string if it's the final part\n\
         - \"choice_2\": A brief description of the second choice (about 15-20 words) or empty string if it's the final part\n\
         - \"is_final\": Boolean value (true/false) indicating if this is the final part of the story\n\n\
         Make sure the JSON is properly formatted and valid."
    )
}

/// Prompt for a free-standing passage.
pub(crate) fn passage(
    language: &str,
    level: &str,
    word_count: u32,
    topic: &str,
    text_type: TextType,
) -> String {
    let lang = english_name(language);
    let format_clause = match text_type.format_clause() {
        Some(phrase) => format!(" Format the text as {}.", phrase),
        None => String::new(),
    };
    format!(
        "Generate a creative and educational text in {lang} language on the topic: \"{topic}\".\n\
         The text should be at {level} language proficiency level.\n\
         The text should be approximately {word_count} words long.\n\
         Make sure the vocabulary and grammar complexity match the specified language level.{format_clause}\n\
         Only provide the generated text, without any additional explanations or notes."
    )
}

/// Prompt for a topic suggestion.
pub(crate) fn topic_suggestion(language: &str, level: &str) -> String {
    let lang = english_name(language);
    format!(
        "Suggest an interesting and educational topic for a {lang} text at {level} level. \
         Return just the topic, no explanations."
    )
}

/// Prompt for a brief summary of a passage.
pub(crate) fn summary(text: &str, language: &str, level: &str) -> String {
    let lang = english_name(language);
    let text = truncate(text, SUMMARY_TEXT_LIMIT);
    format!(
        "Create a brief summary of the following {lang} text, suitable for {level} level language learners.\n\
         The summary should be approximately 3-5 sentences and capture the main points.\n\n\
         TEXT: {text}"
    )
}

/// Prompt for key vocabulary extraction.
pub(crate) fn key_words(text: &str, language: &str, level: &str, count: usize) -> String {
    let lang = english_name(language);
    let text = truncate(text, ARTIFACT_TEXT_LIMIT);
    format!(
        "From the following {lang} text, extract the {count} most important vocabulary words \
         that would be helpful for {level} level language learners to study.\n\
         For each word, provide:\n\
         1. The word itself\n\
         2. Its meaning/definition in {lang}\n\
         3. An example sentence using the word (different from the original text)\n\n\
         Format as a JSON list where each item has \"word\", \"definition\", and \"example\" keys.\n\
         Make sure the JSON is properly formatted and valid.\n\n\
         TEXT: {text}"
    )
}

/// Prompt for comprehension questions.
pub(crate) fn comprehension_questions(
    text: &str,
    language: &str,
    level: &str,
    count: usize,
) -> String {
    let lang = english_name(language);
    let text = truncate(text, ARTIFACT_TEXT_LIMIT);
    format!(
        "Based on the following {lang} text, create {count} comprehension questions \
         suitable for {level} level language learners.\n\
         For each question:\n\
         1. Write the question\n\
         2. Provide the correct answer\n\n\
         Format as a JSON object with \"questions\" as a list, where each item has \
         \"question\" and \"answer\" keys.\n\
         Make sure the JSON is properly formatted and valid.\n\n\
         TEXT: {text}"
    )
}

/// Prompt for language exercises.
pub(crate) fn exercises(text: &str, language: &str, level: &str, count: usize) -> String {
    let lang = english_name(language);
    let text = truncate(text, ARTIFACT_TEXT_LIMIT);
    format!(
        "Based on the following {lang} text, create {count} language exercises suitable \
         for {level} level learners.\n\
         Create a mix of:\n\
         - Fill-in-the-blank sentences\n\
         - Grammar correction exercises\n\
         - Word formation exercises\n\n\
         For each exercise:\n\
         1. Provide instructions\n\
         2. The exercise content\n\
         3. The correct answer/solution\n\n\
         Format as a JSON object with \"exercises\" as a list, where each item has \
         \"instructions\", \"content\", and \"solution\" keys.\n\
         Make sure the JSON is properly formatted and valid.\n\n\
         TEXT: {text}"
    )
}

/// Prompt for a line-by-line translation.
pub(crate) fn translation(
    text: &str,
    source_language: &str,
    target_language: &str,
    level: &str,
) -> String {
    let source = english_name(source_language);
    let target = english_name(target_language);
    let text = truncate(text, TRANSLATION_TEXT_LIMIT);
    format!(
        "Translate the following {source} text into {target}, line by line.\n\
         Provide a translation that is appropriate for {level} level language learners.\n\
         For each line, give both the original text and its translation.\n\n\
         Format as a JSON array where each item has \"original\" and \"translation\" keys.\n\
         Make sure the JSON is properly formatted and valid.\n\n\
         TEXT:\n{text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("short", 100), "short");
    }

    #[test]
    fn opening_prompt_demands_the_expected_fields() {
        let prompt = story_opening("French", "B1-B2", "A Trip to the Market");
        assert!(prompt.contains("\"story_text\""));
        assert!(prompt.contains("\"choice_1\""));
        assert!(prompt.contains("\"choice_2\""));
        assert!(!prompt.contains("is_final"));
        assert!(prompt.contains("A Trip to the Market"));
    }

    #[test]
    fn continuation_prompt_embeds_context_and_termination_field() {
        let prompt = story_continuation("French", "B1-B2", 3, "Once upon a time...", "Buy vegetables");
        assert!(prompt.contains("Once upon a time..."));
        assert!(prompt.contains("\"Buy vegetables\""));
        assert!(prompt.contains("\"is_final\""));
        assert!(prompt.contains("part 3"));
    }

    #[test]
    fn passage_prompt_formats_text_type() {
        let general = passage("German", "A1-A2", 500, "Mein Haus", TextType::General);
        assert!(!general.contains("Format the text as"));

        let dialogue = passage("German", "A1-A2", 500, "Mein Haus", TextType::Dialogue);
        assert!(dialogue.contains("Format the text as a dialogue between two or more people."));
    }
}
