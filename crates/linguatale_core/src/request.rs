//! Request types for text completion.

use crate::{Message, Role};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// System message sent ahead of every user prompt.
pub const SYSTEM_PROMPT: &str = "You are a creative text generator for language learners.";

/// A request to the text-completion gateway.
///
/// # Examples
///
/// ```
/// use linguatale_core::{CompletionRequest, Message, Role};
///
/// let request = CompletionRequest {
///     messages: vec![Message::user("Hello!")],
///     temperature: Some(0.7),
///     top_p: Some(0.9),
///     ..Default::default()
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.messages[0].role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct CompletionRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Nucleus sampling parameter (0.0 to 1.0)
    pub top_p: Option<f32>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Model identifier to use (gateway default when absent)
    pub model: Option<String>,
    /// Maximum retry attempts hint, passed through to the gateway
    pub max_retries: Option<usize>,
}

impl CompletionRequest {
    /// Build a request from a single user prompt, prepending the standard
    /// system message.
    ///
    /// # Examples
    ///
    /// ```
    /// use linguatale_core::{CompletionRequest, Role};
    ///
    /// let request = CompletionRequest::from_prompt("Suggest a topic.", Some(0.9), Some(0.9));
    /// assert_eq!(request.messages.len(), 2);
    /// assert_eq!(request.messages[0].role, Role::System);
    /// ```
    pub fn from_prompt(
        prompt: impl Into<String>,
        temperature: Option<f32>,
        top_p: Option<f32>,
    ) -> Self {
        Self {
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(prompt)],
            temperature,
            top_p,
            ..Default::default()
        }
    }

    /// The user-role portion of the request, concatenated in order.
    pub fn user_text(&self) -> String {
        let mut text = String::new();
        for msg in &self.messages {
            if msg.role == Role::User {
                text.push_str(&msg.content);
            }
        }
        text
    }
}
